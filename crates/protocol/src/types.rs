use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One row of the skills bar chart.
///
/// Rows have no identity beyond their position in the list they are
/// composed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDatum {
    pub name: String,
    /// Proficiency in percent, `0..=100`.
    pub value: f64,
    /// Fill color as a CSS color string.
    pub color: String,
}

impl SkillDatum {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
        }
    }
}
