#![forbid(unsafe_code)]

//! Enter-animation strategies.
//!
//! Both strategies satisfy the same contract: tick until settled, report a
//! vertical offset from the resting position (negative while above it). The
//! exit phase is not a strategy — dismissal always uses the fixed-duration
//! slide, even when the entry bounced. That asymmetry is intentional.

use std::time::Duration;

use msgbar_core::animation::{Slide, ease_out};

/// Duration of the fixed slide transitions (enter and exit).
pub const SLIDE_DURATION: Duration = Duration::from_millis(250);

/// Downward acceleration for the bounce simulation, points/s².
const GRAVITY: f32 = 2400.0;

/// Velocity retained after a floor impact.
const RESTITUTION: f32 = 0.6;

/// Impact speed below which the bounce is considered settled, points/s.
const REST_SPEED: f32 = 30.0;

/// Physics integration step ceiling. Large host ticks are subdivided so the
/// collision check cannot tunnel through the floor.
const MAX_STEP_SECS: f32 = 1.0 / 120.0;

/// Drives a message view from off-screen to its resting position.
pub trait EnterAnimator {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Vertical offset of the view from its resting position.
    ///
    /// Negative while the view is above the resting position; exactly zero
    /// once settled.
    fn offset(&self) -> f32;

    /// Whether the animation has reached its resting position for good.
    fn is_settled(&self) -> bool;

    /// Whether the dismissal timer arms when this animator attaches, rather
    /// than when it settles.
    ///
    /// Deterministic animators wait for the settle; the physics bounce has
    /// no fixed duration, so its timer starts counting immediately.
    fn arms_timer_on_attach(&self) -> bool {
        false
    }
}

/// Fixed-duration eased slide from above the top edge to rest.
#[derive(Debug, Clone, Copy)]
pub struct SlideEnter {
    slide: Slide,
}

impl SlideEnter {
    /// Slide for a view of the given height (the travel distance).
    pub fn new(height: f32) -> Self {
        Self {
            slide: Slide::new(-height, 0.0, SLIDE_DURATION).easing(ease_out),
        }
    }
}

impl EnterAnimator for SlideEnter {
    fn tick(&mut self, dt: Duration) {
        self.slide.tick(dt);
    }

    fn offset(&self) -> f32 {
        self.slide.position()
    }

    fn is_settled(&self) -> bool {
        self.slide.is_complete()
    }
}

/// Gravity drop with a floor collision at the resting position.
///
/// The view falls from its off-screen start, hits the floor, and rebounds
/// with [`RESTITUTION`] of its impact speed until the impacts drop below
/// [`REST_SPEED`]. Restitution < 1 bounds the settle time.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsBounce {
    position: f32,
    velocity: f32,
    settled: bool,
}

impl PhysicsBounce {
    /// Drop from one view-height above the resting position.
    pub fn new(height: f32) -> Self {
        Self {
            position: -height,
            velocity: 0.0,
            settled: false,
        }
    }
}

impl EnterAnimator for PhysicsBounce {
    fn tick(&mut self, dt: Duration) {
        if self.settled {
            return;
        }
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            remaining -= step;

            self.velocity += GRAVITY * step;
            self.position += self.velocity * step;

            if self.position >= 0.0 {
                self.position = 0.0;
                if self.velocity.abs() <= REST_SPEED {
                    self.velocity = 0.0;
                    self.settled = true;
                    return;
                }
                self.velocity = -self.velocity * RESTITUTION;
            }
        }
    }

    fn offset(&self) -> f32 {
        self.position
    }

    fn is_settled(&self) -> bool {
        self.settled
    }

    fn arms_timer_on_attach(&self) -> bool {
        true
    }
}
