/// Open/closed state of the hamburger menu.
///
/// The toggle button and the link list both carry the `active` class while
/// the menu is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub const ACTIVE_CLASS: &'static str = "active";

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click anywhere on the document. Closes the menu unless the click
    /// landed inside the menu or on the toggle. Returns the new state.
    pub fn on_document_click(&mut self, inside_menu: bool, inside_toggle: bool) -> bool {
        if !inside_menu && !inside_toggle {
            self.close();
        }
        self.open
    }
}
