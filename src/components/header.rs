use yew::prelude::*;

use super::icons::{Icon, IconKind};
use crate::app::use_landing_config;
use crate::content::{anchor_for, BRAND_NAME, NAV_COURSES, NAV_LINKS};
use crate::hooks::use_scrolled;

#[function_component(Header)]
pub fn header() -> Html {
    let config = use_landing_config();
    let scrolled = use_scrolled(config.timings.scroll_threshold_px);
    let menu_open = use_state(|| false);
    let courses_open = use_state(|| false);

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let set_courses = {
        let courses_open = courses_open.clone();
        Callback::from(move |open: bool| courses_open.set(open))
    };

    html! {
        <header class={classes!("site-header", scrolled.then_some("condensed"))} aria-label="Primary">
          <div class="container header-row">
            <a href="#" class="brand" aria-label={format!("{BRAND_NAME} home")}>
              <div class="brand-mark">{ "A" }</div>
              <span class="brand-name">{ BRAND_NAME }</span>
            </a>

            <nav class="nav-desktop" aria-label="Main navigation">
              <div class="nav-dropdown">
                <button
                  class="nav-link"
                  aria-haspopup="true"
                  aria-expanded={courses_open.to_string()}
                  onmouseenter={set_courses.reform(|_: MouseEvent| true)}
                  onmouseleave={set_courses.reform(|_: MouseEvent| false)}
                  onfocus={set_courses.reform(|_: FocusEvent| true)}
                >
                  { "Courses" }
                </button>
                <div
                  class={classes!("mega-menu", (*courses_open).then_some("open"))}
                  role="menu"
                  onmouseenter={set_courses.reform(|_: MouseEvent| true)}
                  onmouseleave={set_courses.reform(|_: MouseEvent| false)}
                >
                  { for NAV_COURSES.iter().map(|c| html! {
                      <a key={c.title} href="#courses" class="mega-item">
                        <div class="mega-title">{ c.title }</div>
                        <p class="mega-desc">{ c.desc }</p>
                      </a>
                  })}
                </div>
              </div>
              { for NAV_LINKS.iter().map(|label| html! {
                  <a key={*label} href={anchor_for(label)} class="nav-link">{ *label }</a>
              })}
            </nav>

            <div class="nav-actions">
              <a href="#" class="nav-link">{ "Sign in" }</a>
              <a href="#courses" class="btn btn-primary">{ "Start Learning" }</a>
            </div>

            <button class="menu-toggle" aria-label="Toggle menu" aria-expanded={menu_open.to_string()} onclick={on_toggle_menu}>
              <span class="sr-only">{ "Toggle navigation" }</span>
              <Icon kind={if *menu_open { IconKind::Close } else { IconKind::Menu }} size={20} />
            </button>
          </div>

          <div class={classes!("nav-mobile", (*menu_open).then_some("open"))}>
            <div class="container nav-mobile-list">
              { for std::iter::once("Courses").chain(NAV_LINKS.iter().copied()).map(|label| html! {
                  <a key={label} href={anchor_for(label)} class="nav-mobile-link">{ label }</a>
              })}
              <a href="#courses" class="btn btn-primary">{ "Start Learning" }</a>
            </div>
          </div>
        </header>
    }
}
