/// Visual state of a slide at one instant of a transition.
///
/// Offsets are measured in terminal cells; `scale` shrinks the stage around
/// its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Pose {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::VISIBLE
        }
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            opacity: lerp(self.opacity, to.opacity, t).clamp(0.0, 1.0),
            offset_x: lerp(self.offset_x, to.offset_x, t),
            offset_y: lerp(self.offset_y, to.offset_y, t),
            scale: lerp(self.scale, to.scale, t).max(0.0),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::VISIBLE
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
