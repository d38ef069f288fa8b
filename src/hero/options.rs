use crate::{
    animation::ease::Ease,
    foundation::error::{HeroError, HeroResult},
};

/// How the shared container is sized across a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerSize {
    /// Tween the container from the outgoing root's size to the incoming root's size.
    #[default]
    Animate,
    /// Hold the outgoing root's size; only the outgoing root stays visible.
    Current,
    /// Hold the incoming root's size; only the incoming root stays visible.
    Incoming,
    /// Hold the larger of both sizes per axis; roots cross-fade in place.
    Largest,
}

impl ContainerSize {
    /// `true` for the policies where both roots fade/scale on the timeline.
    pub fn animates_roots(self) -> bool {
        matches!(self, Self::Animate | Self::Largest)
    }
}

/// Options for one hero transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    /// When `false`, content is swapped immediately without measuring or animating.
    pub animate: bool,
    /// Container sizing policy.
    pub container_size: ContainerSize,
    /// Duration of the whole timeline.
    pub duration_secs: f64,
    /// Easing applied to every tween.
    pub ease: Ease,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            animate: true,
            container_size: ContainerSize::Animate,
            duration_secs: 0.3,
            ease: Ease::CSS_EASE,
        }
    }
}

impl AnimationOptions {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> HeroResult<Self> {
        let opts: Self = serde_json::from_str(s).map_err(|e| HeroError::serde(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject durations and easing parameters the engine cannot sample.
    pub fn validate(&self) -> HeroResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(HeroError::validation(format!(
                "duration_secs must be finite and >= 0, got {}",
                self.duration_secs
            )));
        }
        if !self.ease.is_finite() {
            return Err(HeroError::validation(
                "ease control points must be finite",
            ));
        }
        Ok(())
    }

    /// Copy with a different container policy.
    pub fn with_container_size(mut self, container_size: ContainerSize) -> Self {
        self.container_size = container_size;
        self
    }

    /// Copy with a different duration.
    pub fn with_duration_secs(mut self, duration_secs: f64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Copy with a different easing.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Copy with animation switched on or off.
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hero/options.rs"]
mod tests;
