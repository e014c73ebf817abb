pub mod constants;
pub mod drag;
pub mod grid;

pub use drag::NumericDragControl;
pub use grid::{max_distance, shade_css, GridConfig, GridParam};
