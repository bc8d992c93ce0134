//! Page behaviours behind named event handlers.
//!
//! [`PageState`] owns all mutable page state (menu, navbar, resize
//! debounce). A host feeds it [`PageEvent`]s and applies the returned
//! [`Effect`]s to the real page, so the behaviour is testable without a
//! browser.

pub mod form;
pub mod menu;
pub mod navbar;
pub mod scroll;
pub mod skills;

pub use form::{ContactForm, Feedback, FeedbackKind, ValidationError};
pub use menu::MenuState;
pub use navbar::{NavbarPosition, NavbarScroll};

use crate::config::PageConfig;
use crate::debounce::{Debouncer, Ticket};

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    HamburgerClick,
    NavLinkClick,
    DocumentClick { inside_menu: bool, inside_toggle: bool },
    Scroll { y: f64 },
    Submit(ContactForm),
    Resize { now_ms: f64 },
    /// A timer armed by [`Effect::ArmRebuildTimer`] fired.
    RebuildTimer(Ticket),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Set or clear the `active` class on the toggle and the link list.
    SetMenuOpen(bool),
    SetNavbar(NavbarPosition),
    ShowFeedback(Feedback),
    ResetForm,
    /// Cancel any pending rebuild timer and arm a new one.
    ArmRebuildTimer { ticket: Ticket, delay_ms: f64 },
    RebuildChart,
}

#[derive(Debug, Clone)]
pub struct PageState {
    menu: MenuState,
    navbar: NavbarScroll,
    resize: Debouncer,
}

impl PageState {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            menu: MenuState::default(),
            navbar: NavbarScroll::new(config.navbar_hide_after),
            resize: Debouncer::new(config.resize_debounce_ms),
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Effect> {
        match event {
            PageEvent::HamburgerClick => self.on_hamburger_click(),
            PageEvent::NavLinkClick => self.on_nav_link_click(),
            PageEvent::DocumentClick {
                inside_menu,
                inside_toggle,
            } => self.on_document_click(inside_menu, inside_toggle),
            PageEvent::Scroll { y } => self.on_scroll(y),
            PageEvent::Submit(form) => Self::on_submit(&form),
            PageEvent::Resize { now_ms } => self.on_resize(now_ms),
            PageEvent::RebuildTimer(ticket) => self.on_rebuild_timer(ticket),
        }
    }

    fn on_hamburger_click(&mut self) -> Vec<Effect> {
        vec![Effect::SetMenuOpen(self.menu.toggle())]
    }

    fn on_nav_link_click(&mut self) -> Vec<Effect> {
        self.menu.close();
        vec![Effect::SetMenuOpen(false)]
    }

    fn on_document_click(&mut self, inside_menu: bool, inside_toggle: bool) -> Vec<Effect> {
        let was_open = self.menu.is_open();
        let open = self.menu.on_document_click(inside_menu, inside_toggle);
        if was_open != open {
            vec![Effect::SetMenuOpen(open)]
        } else {
            Vec::new()
        }
    }

    fn on_scroll(&mut self, y: f64) -> Vec<Effect> {
        vec![Effect::SetNavbar(self.navbar.on_scroll(y))]
    }

    fn on_submit(form: &ContactForm) -> Vec<Effect> {
        let result = form.validate();
        if let Err(e) = result {
            tracing::debug!(rule = ?e, "contact form rejected");
        }
        let reset = result.is_ok();
        let mut effects = vec![Effect::ShowFeedback(Feedback::from(result))];
        if reset {
            effects.push(Effect::ResetForm);
        }
        effects
    }

    fn on_resize(&mut self, now_ms: f64) -> Vec<Effect> {
        let ticket = self.resize.schedule(now_ms);
        vec![Effect::ArmRebuildTimer {
            ticket,
            delay_ms: self.resize.delay_ms(),
        }]
    }

    fn on_rebuild_timer(&mut self, ticket: Ticket) -> Vec<Effect> {
        if self.resize.settle(ticket) {
            vec![Effect::RebuildChart]
        } else {
            Vec::new()
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(&PageConfig::default())
    }
}
