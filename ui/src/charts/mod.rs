//! Chart geometry, scene builders and renderers (live SVG + export documents).

pub mod geometry;
pub mod scene;
pub mod svg;

mod view;
pub use view::ChartCanvas;

pub use scene::ChartScene;
