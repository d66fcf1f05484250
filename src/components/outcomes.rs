use yew::prelude::*;

use crate::content::OUTCOMES;

/// Image/text rows; every other row puts the image on the right.
#[function_component(OutcomeNarrative)]
pub fn outcome_narrative() -> Html {
    html! {
        <section id="about" class="section band" aria-label="Outcomes">
          <div class="container outcome-list">
            { for OUTCOMES.iter().enumerate().map(|(i, o)| html! {
                <div key={o.title} class={classes!("outcome-row", (i % 2 == 1).then_some("flipped"))}>
                  <img class="outcome-media" src={o.img} alt={o.title} loading="lazy" />
                  <div>
                    <h3 class="outcome-title">{ o.title }</h3>
                    <ul class="bullets">
                      { for o.bullets.iter().map(|b| html! { <li key={*b}>{ *b }</li> }) }
                    </ul>
                  </div>
                </div>
            })}
          </div>
        </section>
    }
}
