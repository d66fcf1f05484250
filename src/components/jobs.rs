use yew::prelude::*;

use super::icons::{Icon, IconKind};
use crate::content::JOBS;

#[function_component(JobsHighlight)]
pub fn jobs_highlight() -> Html {
    html! {
        <section id="jobs" class="section band" aria-label="Jobs highlight">
          <div class="container grid-2">
            <div>
              <h2 class="section-title">{ "More Than Just Coaching: Your Gateway to Top Architecture Jobs." }</h2>
              <p class="section-sub">{ "Curated roles for architects and planners. Get matched through mentors, projects, and hiring partners." }</p>
              <a href="#" class="btn btn-primary btn-lg">{ "Explore Jobs" } <Icon kind={IconKind::Briefcase} /></a>
              <p class="fine-print">{ "Curated roles for architects and planners." }</p>
            </div>
            <div>
              <div class="job-search">
                <label class="field field-wide">
                  <Icon kind={IconKind::Search} size={16} class="muted" />
                  <input aria-label="Search" placeholder="Search roles, firms..." />
                </label>
                <label class="field">
                  <Icon kind={IconKind::MapPin} size={16} class="muted" />
                  <input aria-label="Location" placeholder="Location" />
                </label>
              </div>
              <div class="job-grid">
                { for JOBS.iter().map(|j| html! {
                    <div key={format!("{}{}", j.role, j.firm)} class="card job-card">
                      <div class="card-title">{ j.role }</div>
                      <div class="muted small">{ format!("{} · {}", j.firm, j.location) }</div>
                      <div class="chip-row">
                        { for j.tags.iter().map(|t| html! { <span key={*t} class="chip chip-sm">{ *t }</span> }) }
                      </div>
                    </div>
                })}
              </div>
            </div>
          </div>
        </section>
    }
}
