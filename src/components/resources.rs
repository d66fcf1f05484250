use yew::prelude::*;

use super::icons::Icon;
use crate::content::RESOURCES;

#[function_component(ResourceHighlights)]
pub fn resource_highlights() -> Html {
    html! {
        <section id="resources" class="section band" aria-label="Resources">
          <div class="container">
            <h2 class="section-title">{ "Free resources to get you started" }</h2>
            <div class="grid-3">
              { for RESOURCES.iter().map(|r| html! {
                  <a key={r.title} href="#" class="card resource-card">
                    <span class="benefit-icon"><Icon kind={r.icon} /></span>
                    <div class="card-title">{ r.title }</div>
                    <p class="muted small">{ r.desc }</p>
                  </a>
              })}
            </div>
          </div>
        </section>
    }
}
