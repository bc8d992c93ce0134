pub mod animation;
pub mod element;
pub mod types;
pub mod viewport;

pub use animation::{AnimationDescriptor, AnimationKind, Keyframes, Repeat, TransformKind};
pub use element::{AttrValue, Element};
pub use types::{Point, SkillDatum};
pub use viewport::{FontSizes, Margins, ViewportProfile};
