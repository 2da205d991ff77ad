/// Clicks the user menu can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on the menu trigger. Toggles, and does not reach the document.
    MenuClick,
    /// Click anywhere else on the page.
    DocumentClick,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownMenu {
    open: bool,
}

impl DropdownMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns whether the menu is open afterwards.
    pub fn handle(&mut self, event: MenuEvent) -> bool {
        match event {
            MenuEvent::MenuClick => self.open = !self.open,
            MenuEvent::DocumentClick => self.open = false,
        }
        self.open
    }
}
