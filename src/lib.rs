//! Aerie Academy landing page.
//!
//! The page is static content plus three reusable behaviors in [`behavior`]:
//! an interval ticker driving the carousels, a viewport visibility detector
//! and a count-up animator for the metric strip. [`hooks`] binds them to the
//! browser; [`components`] renders the sections.

pub mod app;
pub mod behavior;
pub mod browser;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod theme;

use std::rc::Rc;

use gloo::console::log;

use app::{App, AppProps};
use config::LandingConfig;

/// Loads the config and mounts [`App`] on `<body>`.
pub fn start() {
    let config = LandingConfig::load();
    log!("aerie landing: mounting");
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
