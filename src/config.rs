use gloo::console::{debug, warn};
use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::behavior::count_up::DEFAULT_DURATION_MS;
use crate::behavior::crossfade::NOMINAL_CROSSFADE_MS;
use crate::behavior::ticker::Period;
use crate::behavior::RootMargin;
use crate::error::ConfigError;
use crate::theme::Theme;

/// Id of the optional `<script type="application/json">` override in index.html.
pub const CONFIG_SCRIPT_ID: &str = "landing-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub hero_rotation_ms: u32,
    pub community_rotation_ms: u32,
    pub testimonial_rotation_ms: u32,
    pub crossfade_ms: u32,
    pub count_up_ms: u32,
    pub stats_root_margin: RootMargin,
    pub scroll_threshold_px: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            hero_rotation_ms: 3500,
            community_rotation_ms: 4000,
            testimonial_rotation_ms: 6000,
            crossfade_ms: NOMINAL_CROSSFADE_MS,
            count_up_ms: DEFAULT_DURATION_MS,
            stats_root_margin: RootMargin::uniform(-100),
            scroll_threshold_px: 8.0,
        }
    }
}

impl Timings {
    pub fn hero_period(&self) -> Period {
        Period::every(self.hero_rotation_ms)
    }

    pub fn community_period(&self) -> Period {
        Period::every(self.community_rotation_ms)
    }

    pub fn testimonial_period(&self) -> Period {
        Period::every(self.testimonial_rotation_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("hero_rotation_ms", self.hero_rotation_ms),
            ("community_rotation_ms", self.community_rotation_ms),
            ("testimonial_rotation_ms", self.testimonial_rotation_ms),
        ];
        match periods.into_iter().find(|(_, ms)| *ms == 0) {
            Some((field, _)) => Err(ConfigError::ZeroPeriod { field }),
            None => Ok(()),
        }
    }
}

/// Everything the page needs at startup. Passed into the root component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub theme: Theme,
    pub timings: Timings,
}

impl LandingConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LandingConfig = serde_json::from_str(json)?;
        config.theme.validate()?;
        config.timings.validate()?;
        Ok(config)
    }

    /// Reads the embedded override from `doc`. `Ok(None)` when there is none.
    pub fn from_document(doc: &Document) -> Result<Option<Self>, ConfigError> {
        let Some(text) = doc
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content())
        else {
            return Ok(None);
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        Self::from_json(&text).map(Some)
    }

    /// Embedded override if present and valid, defaults otherwise.
    pub fn load() -> Self {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };
        match Self::from_document(&doc) {
            Ok(Some(config)) => {
                debug!(format!("landing config: loaded #{CONFIG_SCRIPT_ID}"));
                config
            }
            Ok(None) => {
                debug!("landing config: using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(format!("landing config: {e}; using defaults"));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarginParseError;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(LandingConfig::from_json("{}"), Ok(LandingConfig::default()));
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = LandingConfig::from_json(
            r#"{ "timings": { "hero_rotation_ms": 5000, "stats_root_margin": "0px 0px -50px" } }"#,
        )
        .unwrap();
        assert_eq!(config.timings.hero_period(), Period::Every(5000));
        assert_eq!(config.timings.testimonial_rotation_ms, 6000);
        assert_eq!(
            config.timings.stats_root_margin,
            RootMargin {
                top: 0,
                right: 0,
                bottom: -50,
                left: 0
            }
        );
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn zero_rotation_period_is_rejected() {
        let err = LandingConfig::from_json(r#"{ "timings": { "community_rotation_ms": 0 } }"#);
        assert_eq!(
            err,
            Err(ConfigError::ZeroPeriod {
                field: "community_rotation_ms"
            })
        );
    }

    #[test]
    fn zero_crossfade_is_allowed() {
        let config = LandingConfig::from_json(r#"{ "timings": { "crossfade_ms": 0 } }"#).unwrap();
        assert_eq!(config.timings.crossfade_ms, 0);
    }

    #[test]
    fn bad_margin_surfaces_as_json_error() {
        let err = LandingConfig::from_json(r#"{ "timings": { "stats_root_margin": "10%" } }"#);
        let msg = match err {
            Err(ConfigError::Json(msg)) => msg,
            other => panic!("expected a JSON error, got {other:?}"),
        };
        assert!(msg.contains(&MarginParseError::NotPixels("10%".into()).to_string()));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(LandingConfig::from_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn serializes_margin_as_css() {
        let json = serde_json::to_string(&LandingConfig::default()).unwrap();
        assert!(json.contains("\"stats_root_margin\":\"-100px -100px -100px -100px\""));
    }
}
