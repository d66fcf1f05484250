use yew::prelude::*;

use super::crossfade::CrossFadeStack;
use super::icons::{Icon, IconKind};
use crate::app::use_landing_config;
use crate::behavior::CrossFade;
use crate::content::{HEADLINE, HERO_HIGHLIGHTS, HERO_IMAGES};
use crate::hooks::{use_reduced_motion, use_rotation};

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = use_landing_config();
    let rotation = use_rotation(HERO_IMAGES.len(), config.timings.hero_period());
    let fade = CrossFade::new(use_reduced_motion(), config.timings.crossfade_ms);

    html! {
        <section class="hero" aria-label="Hero">
          <div class="container hero-grid">
            <div>
              <h1 class="hero-title">{ HEADLINE }</h1>
              <p class="hero-lede">
                { "Live coaching, expert mentors, structured GATE Architecture & Planning prep, and real career pathways—all in one place." }
              </p>
              <div class="cta-row">
                <a href="#courses" class="btn btn-primary btn-lg">
                  { "Explore Courses" } <Icon kind={IconKind::ArrowRight} />
                </a>
                <a href="#community" class="btn btn-outline btn-lg">{ "Join the Community" }</a>
              </div>
              <div class="chip-row" aria-label="Highlights">
                { for HERO_HIGHLIGHTS.iter().map(|t| html! { <span key={*t} class="chip">{ *t }</span> }) }
              </div>
            </div>

            <CrossFadeStack
              images={HERO_IMAGES}
              current={rotation.index()}
              fade={fade}
              alt="Architecture studio and site visuals"
              class="hero-media"
            >
              <div class="hero-shade" aria-hidden="true"></div>
            </CrossFadeStack>
          </div>
        </section>
    }
}
