// SPDX-License-Identifier: MPL-2.0
//! Duration newtypes for snackbar timing.
//!
//! [`DisplayDuration`] is how long a snackbar stays on screen, where zero
//! means "until dismissed". [`AnimationDuration`] bounds the enter and exit
//! animations.

use crate::config::{MAX_ANIMATION_MS, MAX_SNACKBAR_DURATION_SECS};
use std::time::Duration;

/// On-screen duration of a snackbar.
///
/// Zero is the indefinite duration: the snackbar only leaves the screen when
/// it is dismissed explicitly or replaced by another one.
///
/// # Example
///
/// ```
/// use iced_snackbar::ui::snackbar::DisplayDuration;
/// use std::time::Duration;
///
/// let short = DisplayDuration::from_secs_f64(5.0);
/// assert_eq!(short.as_duration(), Some(Duration::from_secs(5)));
///
/// // Zero, negative and NaN values all mean "stay until dismissed"
/// assert!(DisplayDuration::from_secs_f64(0.0).is_indefinite());
/// assert!(DisplayDuration::from_secs_f64(-3.0).is_indefinite());
/// assert!(DisplayDuration::from_secs_f64(f64::NAN).is_indefinite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct DisplayDuration(Duration);

impl DisplayDuration {
    /// Stays on screen until dismissed.
    pub const INDEFINITE: Self = Self(Duration::ZERO);

    /// Creates a display duration from seconds, clamping to the valid range.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_nan() || secs <= 0.0 {
            return Self::INDEFINITE;
        }
        Self(Duration::from_secs_f64(secs.min(MAX_SNACKBAR_DURATION_SECS)))
    }

    /// Creates a display duration, clamping to the valid range.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration.min(Duration::from_secs_f64(MAX_SNACKBAR_DURATION_SECS)))
    }

    /// Returns true when the snackbar never dismisses itself.
    #[must_use]
    pub fn is_indefinite(self) -> bool {
        self.0.is_zero()
    }

    /// Returns the auto-dismiss delay, or `None` when indefinite.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        (!self.is_indefinite()).then_some(self.0)
    }

    /// Returns the value in seconds (zero when indefinite).
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0.as_secs_f64()
    }
}

impl From<Duration> for DisplayDuration {
    fn from(duration: Duration) -> Self {
        Self::new(duration)
    }
}

/// Length of an enter or exit animation.
///
/// Zero disables the animation: the snackbar appears or disappears on the
/// next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct AnimationDuration(u64);

impl AnimationDuration {
    pub const NONE: Self = Self(0);

    /// Creates an animation duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.min(MAX_ANIMATION_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Fraction of the animation covered by `elapsed`, in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(self, elapsed: Duration) -> f32 {
        if self.is_none() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.as_duration().as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_duration_clamps_to_max() {
        let huge = DisplayDuration::from_secs_f64(1e9);
        assert_eq!(huge.as_secs_f64(), MAX_SNACKBAR_DURATION_SECS);
        let huge = DisplayDuration::new(Duration::from_secs(1_000_000));
        assert_eq!(huge.as_secs_f64(), MAX_SNACKBAR_DURATION_SECS);
    }

    #[test]
    fn display_duration_default_is_indefinite() {
        assert!(DisplayDuration::default().is_indefinite());
        assert_eq!(DisplayDuration::default().as_duration(), None);
    }

    #[test]
    fn display_duration_from_std_duration() {
        let d: DisplayDuration = Duration::from_millis(1500).into();
        assert_eq!(d.as_duration(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn animation_duration_clamps_to_max() {
        assert_eq!(
            AnimationDuration::from_millis(u64::MAX).as_millis(),
            MAX_ANIMATION_MS
        );
    }

    #[test]
    fn animation_fraction_progresses_linearly() {
        let anim = AnimationDuration::from_millis(200);
        assert_eq!(anim.fraction(Duration::ZERO), 0.0);
        assert!((anim.fraction(Duration::from_millis(100)) - 0.5).abs() < 1e-6);
        assert_eq!(anim.fraction(Duration::from_millis(500)), 1.0);
    }

    #[test]
    fn disabled_animation_is_always_complete() {
        assert_eq!(AnimationDuration::NONE.fraction(Duration::ZERO), 1.0);
    }
}
