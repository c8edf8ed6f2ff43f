pub(crate) struct UiActor {
    needs_redraw: bool,
    needs_repaint: bool,
}

impl UiActor {
    pub(crate) fn new() -> Self {
        Self {
            needs_redraw: true,
            needs_repaint: false,
        }
    }

    pub(crate) fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub(crate) fn mark_repaint(&mut self) {
        self.needs_repaint = true;
        self.needs_redraw = true;
    }

    pub(crate) fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    pub(crate) fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    /// A frame is due when something changed or a slide is still moving.
    pub(crate) fn should_draw(&self, animating: bool) -> bool {
        self.needs_redraw || animating
    }
}
