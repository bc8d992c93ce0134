//! Page configuration: element ids and timing constants.
//!
//! Every field has a default matching the portfolio page, so an embedding
//! page only passes the values it wants to change.

use folio_protocol::viewport::COMPACT_BREAKPOINT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::anim::BAR_FILL_DURATION_MS;
use crate::debounce::RESIZE_DEBOUNCE_MS;
use crate::page::navbar::HIDE_AFTER_PX;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ids of the page elements the behaviours attach to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub bar_chart: String,
    pub winter_scene: String,
    pub geometric_art: String,
    pub hamburger: String,
    pub nav_links: String,
    pub contact_form: String,
    pub form_feedback: String,
    pub name_input: String,
    pub email_input: String,
    pub message_input: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            bar_chart: "dataViz".into(),
            winter_scene: "winterScene".into(),
            geometric_art: "creativeArt".into(),
            hamburger: "hamburger".into(),
            nav_links: "navLinks".into(),
            contact_form: "contactForm".into(),
            form_feedback: "formFeedback".into(),
            name_input: "name".into(),
            email_input: "email".into(),
            message_input: "message".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub ids: ElementIds,
    /// Viewport widths at or below this use the compact chart profile.
    pub compact_breakpoint: f64,
    pub resize_debounce_ms: f64,
    pub bar_fill_duration_ms: f64,
    /// Scroll offset past which scrolling down hides the navbar.
    pub navbar_hide_after: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            compact_breakpoint: COMPACT_BREAKPOINT,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            bar_fill_duration_ms: BAR_FILL_DURATION_MS,
            navbar_hide_after: HIDE_AFTER_PX,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
