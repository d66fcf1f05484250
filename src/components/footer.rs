use gloo::console::debug;
use yew::prelude::*;

use crate::browser::current_year;
use crate::content::{anchor_for, BRAND_NAME, FOOTER_COLUMNS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_memo((), |_| current_year());

    // No backend; the form only keeps the page from reloading.
    let on_subscribe = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("newsletter submit intercepted");
    });

    html! {
        <footer class="site-footer" aria-label="Footer">
          <div class="container footer-grid">
            <div>
              <div class="brand">
                <div class="brand-mark">{ "A" }</div>
                <span class="brand-name">{ BRAND_NAME }</span>
              </div>
              <p class="muted small">{ "Learn, grow, and get hired with mentors who have been there." }</p>
            </div>
            { for FOOTER_COLUMNS.iter().map(|col| html! {
                <div key={col.heading}>
                  <div class="footer-heading">{ col.heading }</div>
                  <ul class="footer-links">
                    { for col.links.iter().map(|l| html! {
                        <li key={*l}><a href={anchor_for(l)}>{ *l }</a></li>
                    })}
                  </ul>
                </div>
            })}
            <form class="newsletter" onsubmit={on_subscribe}>
              <label class="footer-heading" for="newsletter-email">{ "Newsletter" }</label>
              <div class="newsletter-row">
                <input id="newsletter-email" type="email" required={true} placeholder="you@example.com" />
                <button type="submit" class="btn btn-primary btn-sm">{ "Subscribe" }</button>
              </div>
            </form>
          </div>
          <div class="container footer-base small muted">
            { format!("\u{a9} {} {}. All rights reserved.", *year, BRAND_NAME) }
          </div>
        </footer>
    }
}
