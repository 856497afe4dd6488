//! Decorative animation curves.
//!
//! Pure functions of elapsed time. Nothing here owns a timer: a view samples
//! these with "time since I was mounted" whenever it is drawn.

use std::time::Duration;

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Linear 0 → 1 ramp that starts after `delay` and lasts `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    pub delay: Duration,
    pub duration: Duration,
}

impl Fade {
    pub const fn new(delay_ms: u64, duration_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(duration_ms),
        }
    }

    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(t) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (t.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn done(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// A fade that also travels vertically from `from_y` to its resting place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub fade: Fade,
    pub from_y: f32,
}

impl Slide {
    pub const fn new(from_y: f32, fade: Fade) -> Self {
        Self { fade, from_y }
    }

    pub fn offset(&self, elapsed: Duration) -> f32 {
        lerp(self.from_y, 0.0, self.fade.progress(elapsed))
    }

    pub fn opacity(&self, elapsed: Duration) -> f32 {
        self.fade.progress(elapsed)
    }
}

/// Opacity keyframes 1 → 0 → 1 over one `period`, repeating forever.
pub fn blink_opacity(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 1.0;
    }
    let phase = cycle_phase(elapsed, period);
    if phase < 0.5 {
        1.0 - 2.0 * phase
    } else {
        2.0 * phase - 1.0
    }
}

/// Fraction of the current cycle completed, in `[0, 1)`.
pub fn cycle_phase(elapsed: Duration, period: Duration) -> f32 {
    let period_ns = period.as_nanos();
    if period_ns == 0 {
        return 0.0;
    }
    (elapsed.as_nanos() % period_ns) as f32 / period_ns as f32
}

// ────────────────────────────────────────────────────────────────
// Progress bar segments
// ────────────────────────────────────────────────────────────────

/// Looping linear sweep shared by the progress-bar segments.
///
/// Segment `i` starts its first sweep `i * stagger` after the animation
/// began and rests at `from` until then.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub from: f32,
    pub to: f32,
    pub cycle: Duration,
    pub stagger: Duration,
}

impl Sweep {
    pub fn position(&self, index: usize, elapsed: Duration) -> f32 {
        let start = self.stagger * index as u32;
        match elapsed.checked_sub(start) {
            Some(t) => lerp(self.from, self.to, cycle_phase(t, self.cycle)),
            None => self.from,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_waits_for_delay() {
        let fade = Fade::new(500, 1000);
        assert_eq!(fade.progress(Duration::from_millis(400)), 0.0);
        assert!((fade.progress(Duration::from_millis(1000)) - 0.5).abs() < 1e-6);
        assert_eq!(fade.progress(Duration::from_secs(9)), 1.0);
    }

    #[test]
    fn blink_is_dark_mid_period() {
        let p = Duration::from_millis(1000);
        assert_eq!(blink_opacity(Duration::ZERO, p), 1.0);
        assert!(blink_opacity(Duration::from_millis(500), p) < 1e-6);
        assert!((blink_opacity(Duration::from_millis(750), p) - 0.5).abs() < 1e-6);
    }
}
