use std::time::Instant;

use super::pose::Pose;
use super::variants::Timing;

/// Interpolation capability used by slide containers.
///
/// Navigation never waits on a driver: `start` may be called again while a
/// previous animation is still running and simply replaces it.
pub trait MotionDriver: Send {
    fn start(&mut self, from: Pose, to: Pose, timing: Timing, now: Instant);

    fn sample(&self, now: Instant) -> Pose;

    fn is_animating(&self, now: Instant) -> bool;
}

pub fn create_motion_driver(enabled: bool) -> Box<dyn MotionDriver> {
    if enabled {
        Box::<Tween>::default()
    } else {
        Box::<InstantMotion>::default()
    }
}

#[derive(Debug, Clone, Copy)]
struct TweenRun {
    from: Pose,
    to: Pose,
    timing: Timing,
    started_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct Tween {
    run: Option<TweenRun>,
}

impl Tween {
    fn progress(run: &TweenRun, now: Instant) -> f32 {
        let total = run.timing.duration.as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(run.started_at).as_secs_f32();
        (elapsed / total).min(1.0)
    }
}

impl MotionDriver for Tween {
    fn start(&mut self, from: Pose, to: Pose, timing: Timing, now: Instant) {
        self.run = Some(TweenRun {
            from,
            to,
            timing,
            started_at: now,
        });
    }

    fn sample(&self, now: Instant) -> Pose {
        let Some(run) = self.run.as_ref() else {
            return Pose::VISIBLE;
        };
        let eased = run.timing.easing.apply(Self::progress(run, now));
        run.from.lerp(run.to, eased)
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.run
            .as_ref()
            .is_some_and(|run| Self::progress(run, now) < 1.0)
    }
}

/// Driver that jumps straight to the target pose.
#[derive(Debug, Clone, Default)]
pub struct InstantMotion {
    target: Option<Pose>,
}

impl MotionDriver for InstantMotion {
    fn start(&mut self, _from: Pose, to: Pose, _timing: Timing, _now: Instant) {
        self.target = Some(to);
    }

    fn sample(&self, _now: Instant) -> Pose {
        self.target.unwrap_or(Pose::VISIBLE)
    }

    fn is_animating(&self, _now: Instant) -> bool {
        false
    }
}
