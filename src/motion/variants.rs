use std::time::Duration;

use super::easing::Easing;
use super::pose::Pose;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: Duration,
    pub easing: Easing,
}

pub const DEFAULT_TIMING: Timing = Timing {
    duration: Duration::from_millis(450),
    easing: Easing::EaseOut,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionName {
    #[default]
    Fade,
    Slide,
    Up,
    Scale,
}

impl TransitionName {
    pub fn id(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Up => "up",
            Self::Scale => "scale",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fade" => Some(Self::Fade),
            "slide" => Some(Self::Slide),
            "up" => Some(Self::Up),
            "scale" => Some(Self::Scale),
            _ => None,
        }
    }

    /// Lenient lookup used for deck data: anything unknown is a fade.
    pub fn resolve(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub initial: Pose,
    pub animate: Pose,
    pub exit: Pose,
    pub timing: Option<Timing>,
}

impl Variant {
    pub fn timing_or(&self, fallback: Timing) -> Timing {
        self.timing.unwrap_or(fallback)
    }
}

const FADE: Variant = Variant {
    initial: Pose::hidden(),
    animate: Pose::VISIBLE,
    exit: Pose::hidden(),
    timing: None,
};

const SLIDE: Variant = Variant {
    initial: Pose {
        opacity: 0.0,
        offset_x: 8.0,
        offset_y: 0.0,
        scale: 1.0,
    },
    animate: Pose::VISIBLE,
    exit: Pose {
        opacity: 0.0,
        offset_x: -8.0,
        offset_y: 0.0,
        scale: 1.0,
    },
    timing: None,
};

const UP: Variant = Variant {
    initial: Pose {
        opacity: 0.0,
        offset_x: 0.0,
        offset_y: 2.0,
        scale: 1.0,
    },
    animate: Pose::VISIBLE,
    exit: Pose {
        opacity: 0.0,
        offset_x: 0.0,
        offset_y: -2.0,
        scale: 1.0,
    },
    timing: None,
};

const SCALE: Variant = Variant {
    initial: Pose {
        opacity: 0.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 0.9,
    },
    animate: Pose::VISIBLE,
    exit: Pose {
        opacity: 0.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 0.95,
    },
    timing: Some(Timing {
        duration: Duration::from_millis(350),
        easing: Easing::EaseInOut,
    }),
};

pub fn variant_for(name: TransitionName) -> Variant {
    match name {
        TransitionName::Fade => FADE,
        TransitionName::Slide => SLIDE,
        TransitionName::Up => UP,
        TransitionName::Scale => SCALE,
    }
}

/// Looks up a variant by its raw name. Missing or unknown names resolve to
/// the fade variant.
pub fn resolve_variant(name: Option<&str>) -> Variant {
    variant_for(TransitionName::resolve(name))
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_TIMING, TransitionName, resolve_variant, variant_for};
    use crate::motion::Pose;

    #[test]
    fn unknown_name_resolves_to_fade() {
        assert_eq!(resolve_variant(Some("nonexistent")), resolve_variant(Some("fade")));
        assert_eq!(resolve_variant(None), variant_for(TransitionName::Fade));
    }

    #[test]
    fn every_variant_ends_fully_visible() {
        for name in ["fade", "slide", "up", "scale"] {
            let variant = resolve_variant(Some(name));
            assert_eq!(variant.animate, Pose::VISIBLE, "{name}");
            assert_eq!(variant.initial.opacity, 0.0, "{name}");
            assert_eq!(variant.exit.opacity, 0.0, "{name}");
        }
    }

    #[test]
    fn each_variant_moves_a_single_spatial_property() {
        let slide = resolve_variant(Some("slide"));
        assert!(slide.initial.offset_x > 0.0 && slide.exit.offset_x < 0.0);
        assert_eq!(slide.initial.offset_y, 0.0);

        let up = resolve_variant(Some("up"));
        assert!(up.initial.offset_y > 0.0);
        assert_eq!(up.initial.offset_x, 0.0);

        let scale = resolve_variant(Some("scale"));
        assert!(scale.initial.scale < 1.0);
        assert_eq!(scale.initial.offset_x, 0.0);
    }

    #[test]
    fn only_scale_overrides_timing() {
        assert_eq!(resolve_variant(Some("fade")).timing_or(DEFAULT_TIMING), DEFAULT_TIMING);
        assert_ne!(resolve_variant(Some("scale")).timing_or(DEFAULT_TIMING), DEFAULT_TIMING);
    }

    #[test]
    fn names_round_trip_through_ids() {
        for name in [
            TransitionName::Fade,
            TransitionName::Slide,
            TransitionName::Up,
            TransitionName::Scale,
        ] {
            assert_eq!(TransitionName::parse(name.id()), Some(name));
        }
    }
}
