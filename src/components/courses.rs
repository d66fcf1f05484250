use yew::prelude::*;

use super::icons::{Icon, IconKind};
use crate::content::COURSES;

#[function_component(Courses)]
pub fn courses() -> Html {
    html! {
        <section id="courses" class="section" aria-label="Courses overview">
          <div class="container">
            <div class="section-head split">
              <div>
                <h2 class="section-title">{ "Courses designed for outcomes" }</h2>
                <p class="section-sub">{ "Practical skills, structured prep, and job relevance—without breaking the bank." }</p>
              </div>
              <a href="#" class="text-link hide-sm">{ "View all" } <Icon kind={IconKind::ArrowUpRight} /></a>
            </div>
            <div class="grid-3">
              { for COURSES.iter().map(|c| html! {
                  <a key={c.title} href="#" class="card course-card">
                    <div class="course-media">
                      <img src={c.img} alt="Course visual" loading="lazy" />
                      <span class="badge">{ c.chip }</span>
                    </div>
                    <div class="card-body">
                      <h3 class="card-title">{ c.title }</h3>
                      <p class="muted">{ c.outcome }</p>
                      <div class="small">{ c.duration }</div>
                      <ul class="bullets small">
                        { for c.learn.iter().map(|l| html! { <li key={*l}>{ *l }</li> }) }
                      </ul>
                      <div class="text-link card-foot">{ "View details" } <Icon kind={IconKind::ExternalLink} size={16} /></div>
                    </div>
                  </a>
              })}
            </div>
          </div>
        </section>
    }
}
