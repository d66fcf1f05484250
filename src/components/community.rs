use yew::prelude::*;

use super::crossfade::CrossFadeStack;
use super::icons::{Icon, IconKind};
use crate::app::use_landing_config;
use crate::behavior::CrossFade;
use crate::content::{BENEFITS, COMMUNITY_IMAGES, MENTORS};
use crate::hooks::{use_reduced_motion, use_rotation, RotationAction};

#[function_component(CommunityMentorship)]
pub fn community_mentorship() -> Html {
    let config = use_landing_config();
    let paused = use_state_eq(|| false);
    let dialog_open = use_state_eq(|| false);
    let rotation = use_rotation(
        COMMUNITY_IMAGES.len(),
        config.timings.community_period().paused_if(*paused),
    );
    let fade = CrossFade::new(use_reduced_motion(), config.timings.crossfade_ms);

    let on_toggle_play = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(!*paused))
    };
    let set_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |open: bool| dialog_open.set(open))
    };

    html! {
        <section id="community" class="section" aria-label="Community and mentorship">
          <div class="container grid-2">
            <CrossFadeStack
              images={COMMUNITY_IMAGES}
              current={rotation.index()}
              fade={fade}
              alt="Community event"
              class="community-media"
            >
              <div class="carousel-controls">
                <div class="dots">
                  { for (0..COMMUNITY_IMAGES.len()).map(|i| {
                      let dispatcher = rotation.dispatcher();
                      html! {
                        <button
                          key={i}
                          class={classes!("dot", rotation.is_current(i).then_some("active"))}
                          aria-label={format!("Go to slide {}", i + 1)}
                          onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(RotationAction::GoTo(i)))}
                        />
                      }
                  })}
                </div>
                <button
                  class="btn btn-ghost btn-sm"
                  aria-label={if *paused { "Play" } else { "Pause" }}
                  onclick={on_toggle_play}
                >
                  <Icon kind={if *paused { IconKind::Play } else { IconKind::Pause }} size={16} />
                </button>
              </div>
            </CrossFadeStack>

            <div>
              <h2 class="section-title">{ "Learn with a community that pushes you forward" }</h2>
              <p class="section-sub">{ "Mentors, peers, and structured accountability. Show up, share work, and grow faster together." }</p>
              <ul class="benefits">
                { for BENEFITS.iter().map(|b| html! {
                    <li key={b.title} class="benefit">
                      <span class="benefit-icon"><Icon kind={b.icon} /></span>
                      <div>
                        <div class="card-title">{ b.title }</div>
                        <p class="muted small">{ b.desc }</p>
                      </div>
                    </li>
                })}
              </ul>
              <div class="cta-row">
                <a href="#" class="btn btn-primary">{ "Join the Community" }</a>
                <button class="btn btn-outline" onclick={set_dialog.reform(|_: MouseEvent| true)}>
                  { "Meet mentors" }
                </button>
              </div>
            </div>
          </div>

          if *dialog_open {
            <MentorDialog on_close={set_dialog.reform(|_: ()| false)} />
          }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct MentorDialogProps {
    pub on_close: Callback<()>,
}

/// Mentor list overlay. Backdrop click or the Close button dismisses it.
// TODO: trap focus inside the panel and close on Escape.
#[function_component(MentorDialog)]
pub fn mentor_dialog(props: &MentorDialogProps) -> Html {
    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-backdrop" onclick={on_backdrop}>
          <div
            class="dialog"
            role="dialog"
            aria-modal="true"
            aria-labelledby="mentor-dialog-title"
            onclick={keep_open}
          >
            <div class="dialog-head">
              <h3 id="mentor-dialog-title" class="card-title">{ "Meet our mentors" }</h3>
              <button class="btn btn-ghost btn-sm" aria-label="Close" onclick={on_close}>
                <Icon kind={IconKind::Close} size={16} />
              </button>
            </div>
            <div class="mentor-grid">
              { for MENTORS.iter().map(|m| html! {
                  <div key={m.name} class="card mentor-card">
                    <div class="avatar">{ m.initials() }</div>
                    <div>
                      <div class="card-title">{ m.name }</div>
                      <div class="muted small">{ format!("{} · {}", m.role, m.firm) }</div>
                    </div>
                  </div>
              })}
            </div>
          </div>
        </div>
    }
}
