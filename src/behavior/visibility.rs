//! Viewport intersection rules shared by the observer hook and its fallback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MarginParseError;

/// A CSS `rootMargin`: grows (positive) or shrinks (negative) the viewport
/// before intersection is tested. Pixel lengths only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin::uniform(0);

    pub const fn uniform(px: i32) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }
}

fn parse_length(token: &str) -> Result<i32, MarginParseError> {
    let digits = if token == "0" {
        token
    } else {
        token
            .strip_suffix("px")
            .ok_or_else(|| MarginParseError::NotPixels(token.to_string()))?
    };
    digits
        .parse::<i32>()
        .map_err(|_| MarginParseError::NotPixels(token.to_string()))
}

impl FromStr for RootMargin {
    type Err = MarginParseError;

    /// CSS shorthand: `a`, `a b`, `a b c` or `a b c d` (top, right, bottom, left).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(parse_length)
            .collect::<Result<Vec<_>, _>>()?;
        let (top, right, bottom, left) = match parts.as_slice() {
            [a] => (*a, *a, *a, *a),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            other => return Err(MarginParseError::Arity(other.len())),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl TryFrom<String> for RootMargin {
    type Error = MarginParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RootMargin> for String {
    fn from(m: RootMargin) -> Self {
        m.to_string()
    }
}

/// Axis-aligned box in CSS pixels, viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Rect {
    pub fn viewport(width: f64, height: f64) -> Self {
        Self {
            top: 0.0,
            right: width,
            bottom: height,
            left: 0.0,
        }
    }

    fn expand(self, m: RootMargin) -> Self {
        Self {
            top: self.top - f64::from(m.top),
            right: self.right + f64::from(m.right),
            bottom: self.bottom + f64::from(m.bottom),
            left: self.left - f64::from(m.left),
        }
    }
}

pub fn intersects(element: Rect, viewport: Rect, margin: RootMargin) -> bool {
    let root = viewport.expand(margin);
    element.top < root.bottom
        && element.bottom > root.top
        && element.left < root.right
        && element.right > root.left
}

/// A missing element is never visible.
pub fn resolve_visibility(element: Option<Rect>, viewport: Rect, margin: RootMargin) -> bool {
    element.is_some_and(|rect| intersects(rect, viewport, margin))
}

/// Latched visibility: once an element has been seen it stays revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn observe(self, visible: bool) -> Self {
        Self {
            revealed: self.revealed || visible,
        }
    }

    pub fn is_revealed(self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_at(top: f64) -> Rect {
        Rect {
            top,
            right: 1280.0,
            bottom: top + 160.0,
            left: 0.0,
        }
    }

    #[test]
    fn parses_css_shorthand() {
        assert_eq!("-100px".parse(), Ok(RootMargin::uniform(-100)));
        assert_eq!("0".parse(), Ok(RootMargin::ZERO));
        assert_eq!(
            "10px 20px".parse(),
            Ok(RootMargin {
                top: 10,
                right: 20,
                bottom: 10,
                left: 20
            })
        );
        assert_eq!(
            "1px 2px 3px".parse(),
            Ok(RootMargin {
                top: 1,
                right: 2,
                bottom: 3,
                left: 2
            })
        );
    }

    #[test]
    fn rejects_bad_margins() {
        assert_eq!("".parse::<RootMargin>(), Err(MarginParseError::Arity(0)));
        assert_eq!(
            "1px 1px 1px 1px 1px".parse::<RootMargin>(),
            Err(MarginParseError::Arity(5))
        );
        assert_eq!(
            "10%".parse::<RootMargin>(),
            Err(MarginParseError::NotPixels("10%".into()))
        );
        assert_eq!(
            "px".parse::<RootMargin>(),
            Err(MarginParseError::NotPixels("px".into()))
        );
    }

    #[test]
    fn display_is_observer_ready() {
        assert_eq!(RootMargin::uniform(-100).to_string(), "-100px -100px -100px -100px");
    }

    #[test]
    fn serde_uses_css_string() {
        let m: RootMargin = serde_json::from_str("\"-100px\"").unwrap();
        assert_eq!(m, RootMargin::uniform(-100));
        assert!(serde_json::from_str::<RootMargin>("\"50vh\"").is_err());
    }

    #[test]
    fn negative_margin_delays_visibility() {
        let vp = Rect::viewport(1280.0, 800.0);
        let peeking = strip_at(750.0);
        assert!(intersects(peeking, vp, RootMargin::ZERO));
        assert!(!intersects(peeking, vp, RootMargin::uniform(-100)));
        assert!(intersects(strip_at(650.0), vp, RootMargin::uniform(-100)));
    }

    #[test]
    fn positive_margin_reports_early() {
        let vp = Rect::viewport(1280.0, 800.0);
        let below = strip_at(850.0);
        assert!(!intersects(below, vp, RootMargin::ZERO));
        assert!(intersects(below, vp, RootMargin::uniform(100)));
    }

    #[test]
    fn scrolled_past_is_not_visible() {
        let vp = Rect::viewport(1280.0, 800.0);
        assert!(!intersects(strip_at(-400.0), vp, RootMargin::ZERO));
    }

    #[test]
    fn missing_element_is_not_visible() {
        let vp = Rect::viewport(1280.0, 800.0);
        assert!(!resolve_visibility(None, vp, RootMargin::uniform(500)));
        assert!(resolve_visibility(Some(strip_at(100.0)), vp, RootMargin::ZERO));
    }

    #[test]
    fn reveal_waits_for_first_sighting() {
        let hidden = [false, false, false]
            .into_iter()
            .fold(Reveal::default(), Reveal::observe);
        assert!(!hidden.is_revealed());
        assert!(hidden.observe(true).is_revealed());
    }

    #[test]
    fn reveal_stays_latched_after_leaving_view() {
        let seen = Reveal::default().observe(true).observe(false).observe(false);
        assert!(seen.is_revealed());
    }
}
