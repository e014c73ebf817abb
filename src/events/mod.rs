pub mod drag;
pub mod pointer;

pub use drag::{wire_drag_control, DragBinding, DragControl};
pub use pointer::wire_pointer_tracking;
