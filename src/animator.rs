//! Highlight animator: a two-state machine driving the timed transition
//! of the highlight between two geometry boxes.
//!
//! All methods take an explicit `Instant` so the event loop decides the
//! frame clock and tests control time directly. The transition window is
//! generation-counted: every `begin` bumps the generation and resets the
//! start instant, so a switch mid-flight restarts the full window and a
//! stale expiry can never clear a newer transition's state.

use std::time::{Duration, Instant};

use crate::easing::{CubicBezier, SPRING};
use crate::geometry::GeometryBox;

/// Fixed duration of a highlight transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    Idle,
    Transitioning,
}

#[derive(Debug)]
pub struct HighlightAnimator {
    state: AnimState,
    from: GeometryBox,
    to: GeometryBox,
    started_at: Option<Instant>,
    generation: u64,
    curve: CubicBezier,
}

impl Default for HighlightAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightAnimator {
    pub fn new() -> Self {
        Self {
            state: AnimState::Idle,
            from: GeometryBox::default(),
            to: GeometryBox::default(),
            started_at: None,
            generation: 0,
            curve: SPRING,
        }
    }

    /// Starts a transition from `from` to `to` at `now`.
    ///
    /// Calling this while already transitioning restarts the window from
    /// the new boxes; `from` is whatever box the caller measured at the
    /// moment of the switch, not the box mid-flight. The resulting visual
    /// jump is an accepted limitation of the reference behavior.
    pub fn begin(&mut self, from: GeometryBox, to: GeometryBox, now: Instant) {
        self.generation += 1;
        self.from = from;
        self.to = to;
        self.started_at = Some(now);
        self.state = AnimState::Transitioning;
    }

    /// Settles back to `Idle` once the full duration has elapsed since
    /// the most recent `begin`.
    pub fn tick(&mut self, now: Instant) {
        if self.state != AnimState::Transitioning {
            return;
        }
        if let Some(started) = self.started_at {
            if now.duration_since(started) >= TRANSITION_DURATION {
                self.state = AnimState::Idle;
            }
        }
    }

    /// The highlight box at `now`: eased interpolation while
    /// transitioning, the destination box otherwise.
    pub fn sample(&self, now: Instant) -> GeometryBox {
        match (self.state, self.started_at) {
            (AnimState::Transitioning, Some(started)) => {
                let elapsed = now.duration_since(started).as_secs_f64();
                let progress = (elapsed / TRANSITION_DURATION.as_secs_f64()).clamp(0.0, 1.0);
                GeometryBox::between(self.from, self.to, self.curve.eval(progress))
            }
            _ => self.to,
        }
    }

    /// Cancels any in-flight transition without animating.
    pub fn reset(&mut self) {
        self.state = AnimState::Idle;
        self.started_at = None;
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    pub fn is_transitioning(&self) -> bool {
        self.state == AnimState::Transitioning
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes() -> (GeometryBox, GeometryBox) {
        (GeometryBox::new(10.0, 0.0), GeometryBox::new(10.0, 100.0))
    }

    #[test]
    fn test_starts_idle() {
        let animator = HighlightAnimator::new();
        assert_eq!(animator.state(), AnimState::Idle);
        assert_eq!(animator.generation(), 0);
    }

    #[test]
    fn test_begin_enters_transitioning() {
        let (from, to) = boxes();
        let t0 = Instant::now();
        let mut animator = HighlightAnimator::new();

        animator.begin(from, to, t0);
        assert!(animator.is_transitioning());
        assert_eq!(animator.generation(), 1);
    }

    #[test]
    fn test_settles_at_exact_duration_boundary() {
        let (from, to) = boxes();
        let t0 = Instant::now();
        let mut animator = HighlightAnimator::new();
        animator.begin(from, to, t0);

        animator.tick(t0 + Duration::from_millis(299));
        assert!(animator.is_transitioning());

        animator.tick(t0 + Duration::from_millis(300));
        assert_eq!(animator.state(), AnimState::Idle);
    }

    #[test]
    fn test_restart_mid_flight_resets_the_window() {
        let (from, to) = boxes();
        let t0 = Instant::now();
        let mut animator = HighlightAnimator::new();
        animator.begin(from, to, t0);

        // Second switch 200ms in restarts the full 300ms window.
        animator.begin(to, from, t0 + Duration::from_millis(200));
        assert_eq!(animator.generation(), 2);

        // The first window's expiry (t0 + 300ms) must not settle it.
        animator.tick(t0 + Duration::from_millis(310));
        assert!(animator.is_transitioning());

        animator.tick(t0 + Duration::from_millis(500));
        assert_eq!(animator.state(), AnimState::Idle);
    }

    #[test]
    fn test_sample_interpolates_and_overshoots() {
        let (from, to) = boxes();
        let t0 = Instant::now();
        let mut animator = HighlightAnimator::new();
        animator.begin(from, to, t0);

        let at_start = animator.sample(t0);
        assert_eq!(at_start.offset, from.offset);

        let mid = animator.sample(t0 + Duration::from_millis(150));
        assert!(mid.offset > from.offset);
        assert!(mid.offset < to.offset * 1.05);

        // Around 74% of the window the spring curve overshoots the target.
        let late = animator.sample(t0 + Duration::from_millis(222));
        assert!(late.offset > to.offset);

        let done = animator.sample(t0 + Duration::from_millis(300));
        assert_eq!(done.offset, to.offset);
    }

    #[test]
    fn test_sample_after_settle_is_destination() {
        let (from, to) = boxes();
        let t0 = Instant::now();
        let mut animator = HighlightAnimator::new();
        animator.begin(from, to, t0);
        animator.tick(t0 + TRANSITION_DURATION);

        assert_eq!(animator.sample(t0 + Duration::from_millis(999)), to);
    }

    #[test]
    fn test_reset_cancels_without_animating() {
        let (from, to) = boxes();
        let t0 = Instant::now();
        let mut animator = HighlightAnimator::new();
        animator.begin(from, to, t0);

        animator.reset();
        assert_eq!(animator.state(), AnimState::Idle);
        assert_eq!(animator.sample(t0 + Duration::from_millis(10)), to);
    }
}
