use crate::core::constants::*;
use glam::Vec2;

/// The six geometry parameters a user can adjust, in control-panel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridParam {
    HorizontalSeparation,
    VerticalSeparation,
    LineWidth,
    LineHeight,
    Rows,
    Columns,
}

impl GridParam {
    pub const ALL: [GridParam; 6] = [
        GridParam::HorizontalSeparation,
        GridParam::VerticalSeparation,
        GridParam::LineWidth,
        GridParam::LineHeight,
        GridParam::Rows,
        GridParam::Columns,
    ];

    #[inline]
    pub fn range(self) -> ParamRange {
        match self {
            GridParam::HorizontalSeparation => H_SEPARATION,
            GridParam::VerticalSeparation => V_SEPARATION,
            GridParam::LineWidth => LINE_WIDTH,
            GridParam::LineHeight => LINE_HEIGHT,
            GridParam::Rows => ROWS,
            GridParam::Columns => COLUMNS,
        }
    }

    #[inline]
    pub fn label(self) -> &'static str {
        self.range().label
    }

    /// Whether changing this parameter changes the number of cells.
    #[inline]
    pub fn affects_count(self) -> bool {
        matches!(self, GridParam::Rows | GridParam::Columns)
    }
}

/// Grid geometry in CSS pixels (sizes, gaps) and cell counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub horizontal_separation: i32,
    pub vertical_separation: i32,
    pub line_width: i32,
    pub line_height: i32,
    pub rows: i32,
    pub columns: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            horizontal_separation: H_SEPARATION.default,
            vertical_separation: V_SEPARATION.default,
            line_width: LINE_WIDTH.default,
            line_height: LINE_HEIGHT.default,
            rows: ROWS.default,
            columns: COLUMNS.default,
        }
    }
}

impl GridConfig {
    pub fn get(&self, param: GridParam) -> i32 {
        match param {
            GridParam::HorizontalSeparation => self.horizontal_separation,
            GridParam::VerticalSeparation => self.vertical_separation,
            GridParam::LineWidth => self.line_width,
            GridParam::LineHeight => self.line_height,
            GridParam::Rows => self.rows,
            GridParam::Columns => self.columns,
        }
    }

    /// Store `value` clamped to the parameter's range.
    /// Returns true if the stored value changed.
    pub fn set(&mut self, param: GridParam, value: i32) -> bool {
        let value = param.range().clamp(value);
        let slot = match param {
            GridParam::HorizontalSeparation => &mut self.horizontal_separation,
            GridParam::VerticalSeparation => &mut self.vertical_separation,
            GridParam::LineWidth => &mut self.line_width,
            GridParam::LineHeight => &mut self.line_height,
            GridParam::Rows => &mut self.rows,
            GridParam::Columns => &mut self.columns,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.max(0) as usize
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.max(0) as usize
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Center of cell (row, col) relative to the grid origin.
    #[inline]
    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        let w = self.line_width as f32;
        let h = self.line_height as f32;
        Vec2::new(
            col as f32 * (w + self.horizontal_separation as f32) + w / 2.0,
            row as f32 * (h + self.vertical_separation as f32) + h / 2.0,
        )
    }

    /// Row-major geometry of every cell.
    pub fn cells(&self) -> impl Iterator<Item = CellGeometry> + '_ {
        let columns = self.column_count();
        (0..self.cell_count()).map(move |index| {
            let row = index / columns;
            let col = index % columns;
            CellGeometry {
                row,
                col,
                center: self.cell_center(row, col),
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellGeometry {
    pub row: usize,
    pub col: usize,
    pub center: Vec2,
}

/// What a cell looks like for a given pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellAppearance {
    pub angle_deg: f32,
    pub shade: u8,
}

impl CellGeometry {
    /// Rotation that points the cell's long axis at `pointer`.
    /// Screen y grows downward, so a pointer above the cell gives a negative angle.
    #[inline]
    pub fn angle_deg(&self, pointer: Vec2) -> f32 {
        let d = pointer - self.center;
        d.y.atan2(d.x).to_degrees()
    }

    #[inline]
    pub fn distance(&self, pointer: Vec2) -> f32 {
        self.center.distance(pointer)
    }

    pub fn appearance(&self, pointer: Vec2, max_distance: f32) -> CellAppearance {
        CellAppearance {
            angle_deg: self.angle_deg(pointer),
            shade: shade_channel(shade_intensity(self.distance(pointer), max_distance)),
        }
    }
}

/// Diagonal of a container of the given client size, or the fallback when the
/// container has no usable size.
pub fn max_distance(width: f64, height: f64) -> f32 {
    let diag = (width * width + height * height).sqrt() as f32;
    if diag.is_finite() && diag > 0.0 {
        diag
    } else {
        FALLBACK_MAX_DISTANCE
    }
}

/// Normalized brightness in [0, 1]; 1 at the pointer, 0 beyond the falloff radius.
pub fn shade_intensity(distance: f32, max_distance: f32) -> f32 {
    let max_distance = if max_distance.is_finite() && max_distance > 0.0 {
        max_distance
    } else {
        FALLBACK_MAX_DISTANCE
    };
    let intensity = 1.0 - distance / (max_distance * SHADE_FALLOFF);
    if intensity.is_nan() {
        return 0.0;
    }
    intensity.clamp(0.0, 1.0)
}

/// Grayscale channel for an intensity, always a valid CSS colour component.
#[inline]
pub fn shade_channel(intensity: f32) -> u8 {
    (SHADE_BASE + SHADE_SPAN * intensity)
        .round()
        .clamp(SHADE_BASE, SHADE_CHANNEL_MAX) as u8
}

#[inline]
pub fn shade_css(channel: u8) -> String {
    format!("rgb({channel}, {channel}, {channel})")
}
