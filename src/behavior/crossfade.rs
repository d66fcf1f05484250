pub const NOMINAL_CROSSFADE_MS: u32 = 800;

/// The user's `prefers-reduced-motion` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduce_flag(reduce: bool) -> Self {
        if reduce {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    pub fn transition_ms(self, nominal_ms: u32) -> u32 {
        match self {
            MotionPreference::Full => nominal_ms,
            MotionPreference::Reduced => 0,
        }
    }
}

/// Opacity transition shared by every layer of one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossFade {
    pub duration_ms: u32,
}

impl CrossFade {
    pub fn new(preference: MotionPreference, nominal_ms: u32) -> Self {
        Self {
            duration_ms: preference.transition_ms(nominal_ms),
        }
    }

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }

    /// Inline style for one stacked layer.
    pub fn layer_style(&self, visible: bool) -> String {
        let opacity = if visible { 1 } else { 0 };
        if self.is_instant() {
            format!("opacity: {opacity}; transition: none;")
        } else {
            format!(
                "opacity: {opacity}; transition: opacity {}ms ease-in-out; will-change: opacity;",
                self.duration_ms
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_collapses_duration() {
        let fade = CrossFade::new(MotionPreference::Reduced, NOMINAL_CROSSFADE_MS);
        assert_eq!(fade.duration_ms, 0);
        assert!(fade.is_instant());
    }

    #[test]
    fn full_motion_keeps_nominal_duration() {
        let fade = CrossFade::new(MotionPreference::Full, NOMINAL_CROSSFADE_MS);
        assert_eq!(fade.duration_ms, 800);
    }

    #[test]
    fn instant_layers_have_no_transition() {
        let fade = CrossFade::new(MotionPreference::from_reduce_flag(true), 800);
        assert_eq!(fade.layer_style(true), "opacity: 1; transition: none;");
        assert_eq!(fade.layer_style(false), "opacity: 0; transition: none;");
    }

    #[test]
    fn animated_layers_carry_duration() {
        let fade = CrossFade::new(MotionPreference::from_reduce_flag(false), 800);
        assert!(fade.layer_style(false).contains("transition: opacity 800ms ease-in-out"));
    }
}
