/// Presentation constants for the DOM rendering of the widget.
///
/// Geometry ranges live in `core::constants`; everything here only affects
/// how the grid and controls look.
// Host element the `start` entry point mounts into
pub const DEFAULT_ROOT_ID: &str = "lines-grid";

// Container
pub const GRID_PADDING_PX: i32 = 20;
pub const GRID_BACKGROUND: &str = "black";

// Cell transitions (visual smoothing only)
pub const CELL_TRANSITION: &str = "transform 0.1s ease-out, background-color 0.1s ease-out";

// Class names; the host page may style these
pub const PANEL_CLASS: &str = "lines-grid-controls";
pub const CONTROL_CLASS: &str = "lines-grid-control";
pub const LABEL_CLASS: &str = "lines-grid-label";
pub const READOUT_CLASS: &str = "lines-grid-readout";
pub const READOUT_ACTIVE_CLASS: &str = "active";
pub const CONTAINER_CLASS: &str = "lines-grid-container";
pub const CELL_CLASS: &str = "lines-grid-cell";

// Inline fallbacks so the widget is usable without a stylesheet
pub const READOUT_STYLE: &str =
    "display:inline-block;width:3em;text-align:center;cursor:ew-resize;user-select:none;font:12px monospace;color:#6b7280";
pub const READOUT_ACTIVE_COLOR: &str = "#ffffff";
pub const READOUT_IDLE_COLOR: &str = "#6b7280";
pub const LABEL_STYLE: &str = "margin-right:0.5em;font:12px monospace;color:#6b7280";
pub const CONTROL_STYLE: &str = "display:flex;align-items:center;margin:0 1em 0.5em 0";
pub const PANEL_STYLE: &str = "display:flex;flex-wrap:wrap;justify-content:center;padding-top:1.5em";
