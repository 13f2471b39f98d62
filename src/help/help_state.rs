#[derive(Debug, Default)]
pub struct HelpPopupState {
    pub visible: bool,
    pub offset: u16,
    max_offset: u16,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.offset = 0;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.offset = 0;
    }

    /// Called by the renderer once the viewport is known
    pub fn update_bounds(&mut self, content_lines: u16, viewport_height: u16) {
        self.max_offset = content_lines.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }
}
