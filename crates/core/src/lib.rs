pub mod anim;
pub mod builder;
pub mod config;
pub mod debounce;
pub mod geometry;
pub mod page;
pub mod scenes;
pub mod surface;
pub mod svg;

pub use config::PageConfig;
pub use scenes::{BarChartScene, compose_bar_chart, compose_geometric, compose_winter};
pub use surface::{MemorySurface, Surface, SurfaceError, mount};
