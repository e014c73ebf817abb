use crate::constants::*;
use crate::core::{max_distance, shade_css, GridConfig};
use crate::dom::{self, DomError};
use glam::Vec2;
use web_sys as web;

/// DOM side of the grid: one container and a pool of cell elements in row-major order.
pub struct GridView {
    document: web::Document,
    container: web::HtmlElement,
    cells: Vec<web::HtmlElement>,
}

impl GridView {
    pub fn new(document: &web::Document) -> Result<Self, DomError> {
        let container = dom::create_div(document, CONTAINER_CLASS, "")?;
        dom::set_style(&container, "display", "grid");
        dom::set_style(&container, "padding", &format!("{}px", GRID_PADDING_PX));
        dom::set_style(&container, "background-color", GRID_BACKGROUND);
        dom::set_style(&container, "position", "relative");
        Ok(Self {
            document: document.clone(),
            container,
            cells: Vec::new(),
        })
    }

    #[inline]
    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Apply track sizes and gaps, and grow or shrink the cell pool to match.
    pub fn apply_layout(&mut self, config: &GridConfig) -> Result<(), DomError> {
        let c = &self.container;
        dom::set_style(
            c,
            "grid-template-columns",
            &format!("repeat({}, {}px)", config.columns, config.line_width),
        );
        dom::set_style(
            c,
            "grid-template-rows",
            &format!("repeat({}, {}px)", config.rows, config.line_height),
        );
        dom::set_style(
            c,
            "gap",
            &format!("{}px {}px", config.vertical_separation, config.horizontal_separation),
        );

        let wanted = config.cell_count();
        while self.cells.len() > wanted {
            if let Some(cell) = self.cells.pop() {
                cell.remove();
            }
        }
        while self.cells.len() < wanted {
            let cell = dom::create_div(&self.document, CELL_CLASS, "")?;
            dom::set_style(&cell, "transform-origin", "center");
            dom::set_style(&cell, "transition", CELL_TRANSITION);
            self.container.append_child(&cell)?;
            self.cells.push(cell);
        }

        let width = format!("{}px", config.line_width);
        let height = format!("{}px", config.line_height);
        for cell in &self.cells {
            dom::set_style(cell, "width", &width);
            dom::set_style(cell, "height", &height);
        }
        Ok(())
    }

    /// Container diagonal from its client size, or the fallback when unmeasurable.
    #[inline]
    pub fn max_distance(&self) -> f32 {
        max_distance(
            f64::from(self.container.client_width()),
            f64::from(self.container.client_height()),
        )
    }

    /// Recompute and apply every cell's rotation and shade.
    pub fn paint(&self, config: &GridConfig, pointer: Vec2) {
        let max_d = self.max_distance();
        let columns = config.column_count();
        for geom in config.cells() {
            let Some(el) = self.cells.get(geom.row * columns + geom.col) else {
                continue;
            };
            let look = geom.appearance(pointer, max_d);
            dom::set_style(el, "transform", &format!("rotate({}deg)", look.angle_deg));
            dom::set_style(el, "background-color", &shade_css(look.shade));
        }
    }
}
