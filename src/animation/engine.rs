use std::{cell::Cell, rc::Rc};

use crate::{
    animation::timeline::Timeline,
    foundation::error::{HeroError, HeroResult},
    scene::tree::VisualTree,
};

/// Playback state reported by a [`TimelineHandle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineStatus {
    /// Still advancing.
    Running,
    /// Reached the end of the timeline.
    Finished,
    /// Stopped early from outside.
    Cancelled,
}

impl TimelineStatus {
    /// `true` for [`TimelineStatus::Finished`] and [`TimelineStatus::Cancelled`].
    pub fn is_done(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Completion signal of a playing timeline.
pub trait TimelineHandle {
    /// Current playback state.
    fn status(&self) -> TimelineStatus;

    /// Ask the engine to stop. A no-op once the timeline is done.
    fn cancel(&self);
}

/// Something that plays declarative timelines.
pub trait AnimationEngine {
    /// Handle returned for each played timeline.
    type Handle: TimelineHandle;

    /// Start playing `timeline`.
    fn play(&mut self, timeline: Timeline) -> HeroResult<Self::Handle>;
}

/// Handle of a timeline played by [`TimelinePlayer`].
#[derive(Clone, Debug)]
pub struct PlaybackHandle {
    status: Rc<Cell<TimelineStatus>>,
}

impl TimelineHandle for PlaybackHandle {
    fn status(&self) -> TimelineStatus {
        self.status.get()
    }

    fn cancel(&self) {
        if self.status.get() == TimelineStatus::Running {
            self.status.set(TimelineStatus::Cancelled);
        }
    }
}

#[derive(Debug)]
struct Playback {
    timeline: Timeline,
    elapsed_secs: f64,
    status: Rc<Cell<TimelineStatus>>,
}

/// Reference engine that samples a timeline into a [`VisualTree`].
///
/// Single-threaded: the caller drives time with [`TimelinePlayer::advance`]. Playing a new
/// timeline cancels the one in flight.
#[derive(Debug, Default)]
pub struct TimelinePlayer {
    active: Option<Playback>,
}

impl TimelinePlayer {
    /// Idle player.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while a timeline is running.
    pub fn is_playing(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|p| p.status.get() == TimelineStatus::Running)
    }

    /// Seconds elapsed on the active timeline.
    pub fn elapsed_secs(&self) -> Option<f64> {
        self.active.as_ref().map(|p| p.elapsed_secs)
    }

    /// Advance by `dt_secs` and write sampled values into `tree`.
    ///
    /// Advancing by `0` applies the first frame. Returns the status after this step; the
    /// last frame written is always the exact `to` value of every tween.
    pub fn advance<T: VisualTree>(&mut self, tree: &mut T, dt_secs: f64) -> HeroResult<TimelineStatus> {
        if !dt_secs.is_finite() || dt_secs < 0.0 {
            return Err(HeroError::animation(format!(
                "advance step must be finite and >= 0, got {dt_secs}"
            )));
        }
        let Some(playback) = self.active.as_mut() else {
            return Ok(TimelineStatus::Finished);
        };
        if playback.status.get() == TimelineStatus::Cancelled {
            self.active = None;
            return Ok(TimelineStatus::Cancelled);
        }

        playback.elapsed_secs += dt_secs;
        let duration = playback.timeline.duration_secs;
        let progress = if duration <= 0.0 {
            1.0
        } else {
            (playback.elapsed_secs / duration).min(1.0)
        };
        let eased = playback.timeline.ease.apply(progress);

        for entry in &playback.timeline.entries {
            // Targets removed mid-flight (e.g. clones after a forced reset) are skipped.
            let Ok(mut style) = tree.style(entry.target) else {
                continue;
            };
            for tween in &entry.tweens {
                let value = if progress >= 1.0 {
                    tween.range.to
                } else {
                    tween.range.lerp(eased)
                };
                style.set_animated(tween.property, value);
            }
            tree.set_style(entry.target, style)?;
        }

        if progress >= 1.0 {
            playback.status.set(TimelineStatus::Finished);
            self.active = None;
            return Ok(TimelineStatus::Finished);
        }
        Ok(TimelineStatus::Running)
    }

    /// Stop the active timeline where it is.
    pub fn cancel(&mut self) {
        if let Some(p) = self.active.take() {
            p.status.set(TimelineStatus::Cancelled);
        }
    }
}

impl AnimationEngine for TimelinePlayer {
    type Handle = PlaybackHandle;

    fn play(&mut self, timeline: Timeline) -> HeroResult<PlaybackHandle> {
        if !timeline.duration_secs.is_finite() || timeline.duration_secs < 0.0 {
            return Err(HeroError::animation("timeline duration must be finite and >= 0"));
        }
        if self.is_playing() {
            tracing::warn!("replacing a timeline that is still running");
            self.cancel();
        }
        let status = Rc::new(Cell::new(TimelineStatus::Running));
        self.active = Some(Playback {
            timeline,
            elapsed_secs: 0.0,
            status: status.clone(),
        });
        Ok(PlaybackHandle { status })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/engine.rs"]
mod tests;
