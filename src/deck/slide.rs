use std::time::Instant;

use crate::motion::{MotionDriver, Pose, Timing, TransitionName, Variant, variant_for};

/// The slide currently on stage: its transition, style hint and scroll.
pub struct SlideContainer {
    transition: TransitionName,
    style: Option<String>,
    variant: Variant,
    timing: Timing,
    driver: Box<dyn MotionDriver>,
    scroll: u16,
    max_scroll: u16,
    viewport_rows: u16,
}

impl SlideContainer {
    pub fn new(
        transition: TransitionName,
        style: Option<String>,
        default_timing: Timing,
        driver: Box<dyn MotionDriver>,
    ) -> Self {
        let variant = variant_for(transition);
        Self {
            transition,
            style,
            variant,
            timing: variant.timing_or(default_timing),
            driver,
            scroll: 0,
            max_scroll: 0,
            viewport_rows: 0,
        }
    }

    /// Starts the enter animation and scrolls back to the top.
    pub fn mount(&mut self, now: Instant) {
        self.scroll = 0;
        self.driver
            .start(self.variant.initial, self.variant.animate, self.timing, now);
    }

    pub fn exit(&mut self, now: Instant) {
        self.driver
            .start(self.variant.animate, self.variant.exit, self.timing, now);
    }

    pub fn pose(&self, now: Instant) -> Pose {
        self.driver.sample(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.driver.is_animating(now)
    }

    pub fn transition(&self) -> TransitionName {
        self.transition
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    /// Records how far the content overflows the stage, re-clamping scroll.
    pub fn set_overflow(&mut self, content_rows: u16, viewport_rows: u16) {
        self.viewport_rows = viewport_rows;
        self.max_scroll = content_rows.saturating_sub(viewport_rows);
        self.scroll = self.scroll.min(self.max_scroll);
    }

    /// Rows moved by one page step; keeps one row of context.
    pub fn page_rows(&self) -> u16 {
        self.viewport_rows.saturating_sub(1).max(1)
    }

    /// Returns whether the offset moved.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
        let next = u16::try_from(next).unwrap_or(self.max_scroll);
        if next == self.scroll {
            return false;
        }
        self.scroll = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::SlideContainer;
    use crate::motion::{
        DEFAULT_TIMING, Easing, InstantMotion, Pose, Timing, TransitionName, Tween,
    };

    fn tweened(transition: TransitionName) -> SlideContainer {
        SlideContainer::new(
            transition,
            None,
            DEFAULT_TIMING,
            Box::<Tween>::default(),
        )
    }

    #[test]
    fn mount_starts_from_the_initial_pose() {
        let now = Instant::now();
        let mut slide = tweened(TransitionName::Slide);
        slide.mount(now);

        let start = slide.pose(now);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.offset_x, 8.0);
        assert!(slide.is_animating(now));

        let settled = now + DEFAULT_TIMING.duration;
        assert_eq!(slide.pose(settled), Pose::VISIBLE);
        assert!(!slide.is_animating(settled));
    }

    #[test]
    fn exit_moves_towards_the_exit_pose() {
        let now = Instant::now();
        let mut slide = tweened(TransitionName::Up);
        slide.mount(now);
        let later = now + Duration::from_secs(1);
        slide.exit(later);

        let end = slide.pose(later + DEFAULT_TIMING.duration);
        assert_eq!(end.opacity, 0.0);
        assert_eq!(end.offset_y, -2.0);
    }

    #[test]
    fn scale_uses_its_own_timing() {
        let slide = tweened(TransitionName::Scale);
        assert_eq!(
            slide.timing(),
            Timing {
                duration: Duration::from_millis(350),
                easing: Easing::EaseInOut,
            }
        );
        assert_eq!(tweened(TransitionName::Fade).timing(), DEFAULT_TIMING);
    }

    #[test]
    fn disabled_motion_shows_the_slide_immediately() {
        let now = Instant::now();
        let mut slide = SlideContainer::new(
            TransitionName::Fade,
            Some("center".to_string()),
            DEFAULT_TIMING,
            Box::<InstantMotion>::default(),
        );
        slide.mount(now);
        assert_eq!(slide.pose(now), Pose::VISIBLE);
        assert_eq!(slide.style(), Some("center"));
    }

    #[test]
    fn scroll_is_clamped_to_overflow_and_reset_on_mount() {
        let now = Instant::now();
        let mut slide = tweened(TransitionName::Fade);
        assert!(!slide.scroll_by(3));

        slide.set_overflow(30, 10);
        assert!(slide.scroll_by(5));
        assert!(slide.scroll_by(100));
        assert_eq!(slide.scroll(), 20);
        assert!(slide.scroll_by(-8));
        assert_eq!(slide.scroll(), 12);
        assert!(slide.scroll_by(-100));
        assert_eq!(slide.scroll(), 0);

        slide.scroll_by(7);
        slide.set_overflow(14, 10);
        assert_eq!(slide.scroll(), 4);

        slide.mount(now);
        assert_eq!(slide.scroll(), 0);
    }

    #[test]
    fn page_step_keeps_one_row_of_context() {
        let mut slide = tweened(TransitionName::Fade);
        assert_eq!(slide.page_rows(), 1);
        slide.set_overflow(100, 12);
        assert_eq!(slide.page_rows(), 11);
    }
}
