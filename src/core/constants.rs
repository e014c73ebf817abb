// Grid parameter ranges and interaction tuning shared by the core logic.

/// Static description of one adjustable grid parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamRange {
    pub label: &'static str,
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl ParamRange {
    #[inline]
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

pub const H_SEPARATION: ParamRange = ParamRange { label: "H-Sep", min: 0, max: 50, default: 20 };
pub const V_SEPARATION: ParamRange = ParamRange { label: "V-Sep", min: 0, max: 50, default: 20 };
pub const LINE_WIDTH: ParamRange = ParamRange { label: "Width", min: 1, max: 50, default: 25 };
pub const LINE_HEIGHT: ParamRange = ParamRange { label: "Height", min: 1, max: 10, default: 2 };
pub const ROWS: ParamRange = ParamRange { label: "Rows", min: 1, max: 20, default: 10 };
pub const COLUMNS: ParamRange = ParamRange { label: "Columns", min: 1, max: 50, default: 20 };

// Drag-to-edit mapping: a full `DRAG_FULL_RANGE_PX` of scaled travel spans max - min
pub const DRAG_SENSITIVITY: f64 = 0.5;
pub const DRAG_FULL_RANGE_PX: f64 = 100.0;

// Shading
pub const SHADE_BASE: f32 = 60.0; // channel value far from the pointer
pub const SHADE_SPAN: f32 = 215.0; // added at full intensity
pub const SHADE_CHANNEL_MAX: f32 = 255.0;
pub const SHADE_FALLOFF: f32 = 0.3; // fraction of the container diagonal where shading reaches zero
pub const FALLBACK_MAX_DISTANCE: f32 = 500.0; // used when the container has no measurable size
