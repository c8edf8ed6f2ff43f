mod driver;
mod easing;
mod pose;
mod variants;

pub use driver::{InstantMotion, MotionDriver, Tween, create_motion_driver};
pub use easing::Easing;
pub use pose::Pose;
pub use variants::{DEFAULT_TIMING, Timing, TransitionName, Variant, resolve_variant, variant_for};
