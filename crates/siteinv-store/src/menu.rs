//! Menu visibility state. Trivial by design.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    visible: bool,
}

impl Default for MenuState {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}
