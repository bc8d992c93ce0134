use serde::{Deserialize, Serialize};

use crate::element::Element;

/// How often a native animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repeat {
    Once,
    Infinite,
}

impl Repeat {
    /// Value of the SVG `repeatCount` attribute.
    pub fn repeat_count(self) -> &'static str {
        match self {
            Repeat::Once => "1",
            Repeat::Infinite => "indefinite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformKind {
    Translate,
    Rotate,
    Scale,
}

impl TransformKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransformKind::Translate => "translate",
            TransformKind::Rotate => "rotate",
            TransformKind::Scale => "scale",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationKind {
    /// Interpolates a plain attribute (`<animate>`).
    Animate,
    /// Interpolates the `transform` attribute (`<animateTransform>`).
    AnimateTransform(TransformKind),
}

impl AnimationKind {
    pub fn tag(self) -> &'static str {
        match self {
            AnimationKind::Animate => "animate",
            AnimationKind::AnimateTransform(_) => "animateTransform",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Keyframes {
    /// Ordered keyframes, serialized as `values="a; b; c"`.
    Values(Vec<String>),
    /// Two-point form, serialized as `from`/`to`.
    FromTo { from: String, to: String },
}

impl Keyframes {
    pub fn values(&self) -> Vec<&str> {
        match self {
            Keyframes::Values(v) => v.iter().map(String::as_str).collect(),
            Keyframes::FromTo { from, to } => vec![from.as_str(), to.as_str()],
        }
    }
}

/// A native timed animation attached to exactly one element.
///
/// The application only computes the parameters; playback is left to the
/// display surface's own animation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    pub kind: AnimationKind,
    pub target_attribute: String,
    pub keyframes: Keyframes,
    pub duration_s: f64,
    pub repeat: Repeat,
    pub start_delay_s: f64,
    /// Compose with the element's own value (`additive="sum"`).
    pub additive: bool,
}

impl AnimationDescriptor {
    /// Animate a plain attribute through `values`.
    pub fn attribute(
        target_attribute: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            kind: AnimationKind::Animate,
            target_attribute: target_attribute.into(),
            keyframes: Keyframes::Values(values.into_iter().map(Into::into).collect()),
            duration_s: 1.0,
            repeat: Repeat::Infinite,
            start_delay_s: 0.0,
            additive: false,
        }
    }

    /// Animate the `transform` attribute through `values`.
    pub fn transform(
        kind: TransformKind,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            kind: AnimationKind::AnimateTransform(kind),
            ..Self::attribute("transform", values)
        }
    }

    /// Full turn around `(cx, cy)`.
    pub fn spin(cx: f64, cy: f64) -> Self {
        Self {
            kind: AnimationKind::AnimateTransform(TransformKind::Rotate),
            keyframes: Keyframes::FromTo {
                from: format!("0 {cx} {cy}"),
                to: format!("360 {cx} {cy}"),
            },
            ..Self::attribute("transform", Vec::<String>::new())
        }
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration_s = seconds;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.start_delay_s = seconds;
        self
    }

    pub fn additive(mut self) -> Self {
        self.additive = true;
        self
    }

    /// The SVG element that realizes this animation.
    pub fn to_element(&self) -> Element {
        let mut el = Element::new(self.kind.tag()).attr("attributeName", self.target_attribute.as_str());
        if let AnimationKind::AnimateTransform(kind) = self.kind {
            el.set_attr("type", kind.as_str());
        }
        match &self.keyframes {
            Keyframes::Values(values) => el.set_attr("values", values.join("; ")),
            Keyframes::FromTo { from, to } => {
                el.set_attr("from", from.as_str());
                el.set_attr("to", to.as_str());
            }
        }
        el.set_attr("dur", format!("{}s", self.duration_s));
        el.set_attr("repeatCount", self.repeat.repeat_count());
        if self.start_delay_s > 0.0 {
            el.set_attr("begin", format!("{}s", self.start_delay_s));
        }
        if self.additive {
            el.set_attr("additive", "sum");
        }
        el
    }
}
