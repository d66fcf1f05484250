use yew::prelude::*;

use super::icons::{Icon, IconKind};

#[function_component(FinalCta)]
pub fn final_cta() -> Html {
    html! {
        <section id="contact" class="section" aria-label="Get started">
          <div class="container">
            <div class="final-cta">
              <h2 class="section-title">{ "Ready to learn, grow, and get hired?" }</h2>
              <p class="section-sub">{ "Join a live cohort, meet mentors, and map your next role." }</p>
              <div class="cta-row center">
                <a href="#courses" class="btn btn-light btn-lg">{ "Start Learning" } <Icon kind={IconKind::ArrowRight} /></a>
                <a href="#community" class="btn btn-outline-light btn-lg">{ "Talk to a mentor" }</a>
              </div>
            </div>
          </div>
        </section>
    }
}
