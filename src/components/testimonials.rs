use yew::prelude::*;

use super::icons::{Icon, IconKind};
use crate::app::use_landing_config;
use crate::content::{PULL_QUOTE, TESTIMONIALS};
use crate::hooks::{use_rotation, RotationAction};

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let config = use_landing_config();
    let rotation = use_rotation(TESTIMONIALS.len(), config.timings.testimonial_period());

    let on_prev = {
        let dispatcher = rotation.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(RotationAction::Retreat))
    };
    let on_next = {
        let dispatcher = rotation.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(RotationAction::Advance))
    };

    html! {
        <section class="section" aria-label="Testimonials">
          <div class="container">
            <div class="section-head split">
              <h2 class="section-title">{ "Learners who made the leap" }</h2>
              <div class="carousel-nav">
                <button class="btn btn-outline btn-icon" aria-label="Previous" onclick={on_prev}>
                  <Icon kind={IconKind::ChevronLeft} />
                </button>
                <button class="btn btn-outline btn-icon" aria-label="Next" onclick={on_next}>
                  <Icon kind={IconKind::ChevronRight} />
                </button>
              </div>
            </div>
            <div class="grid-3">
              { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                  <figure key={t.name} class={classes!("card", "testimonial", rotation.is_current(i).then_some("active"))}>
                    <img class="testimonial-avatar" src={t.img} alt={t.name} loading="lazy" />
                    <blockquote>{ format!("\u{201c}{}\u{201d}", t.quote) }</blockquote>
                    <figcaption class="muted small">{ t.name }</figcaption>
                  </figure>
              })}
            </div>
            <p class="pull-quote">{ PULL_QUOTE }</p>
          </div>
        </section>
    }
}
