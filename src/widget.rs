use crate::core::{GridConfig, GridParam, NumericDragControl};
use crate::dom::{self, Listeners};
use crate::events::{self, DragBinding};
use crate::input::PointerPosition;
use crate::render::GridView;
use crate::ui::{self, ControlView};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct GridState {
    config: GridConfig,
    pointer: PointerPosition,
    view: GridView,
}

impl GridState {
    #[inline]
    fn repaint(&self) {
        self.view.paint(&self.config, self.pointer.as_vec2());
    }
}

/// The mounted widget: control panel above the grid, all listeners owned here.
///
/// Dropping it releases every window, document and element listener and
/// removes the widget's DOM from the host element.
pub struct LineGridWidget {
    panel: web::HtmlElement,
    state: Rc<RefCell<GridState>>,
    bindings: Vec<DragBinding>,
    _tracking: Listeners,
}

impl LineGridWidget {
    pub fn mount(root: &web::Element) -> anyhow::Result<Self> {
        let (window, document) = dom::window_document()?;

        let config = GridConfig::default();
        let mut view = GridView::new(&document)?;
        view.apply_layout(&config)?;

        let panel = ui::create_panel(&document)?;
        root.append_child(&panel).map_err(dom::DomError::from)?;
        root.append_child(view.container()).map_err(dom::DomError::from)?;

        let state = Rc::new(RefCell::new(GridState {
            config,
            pointer: PointerPosition::default(),
            view,
        }));

        let mut bindings = Vec::with_capacity(GridParam::ALL.len());
        for param in GridParam::ALL {
            let control = NumericDragControl::with_value(param.range(), config.get(param));
            let view = ControlView::new(&document, param.label(), control.value())?;
            panel.append_child(view.root()).map_err(dom::DomError::from)?;
            let weak = Rc::downgrade(&state);
            bindings.push(events::wire_drag_control(
                &document,
                control,
                view,
                move |value| apply_param(&weak, param, value),
            ));
        }

        let tracking = {
            let weak = Rc::downgrade(&state);
            let container = state.borrow().view.container().clone();
            events::wire_pointer_tracking(&window, &container, move |pos| {
                if let Some(state) = weak.upgrade() {
                    let mut s = state.borrow_mut();
                    s.pointer = pos;
                    s.repaint();
                }
            })
        };

        state.borrow().repaint();
        log::info!(
            "[mount] grid {}x{} ({} cells)",
            config.rows,
            config.columns,
            state.borrow().view.cell_count()
        );

        Ok(Self {
            panel,
            state,
            bindings,
            _tracking: tracking,
        })
    }
}

// Config change from a control: store, re-layout, re-derive every cell.
fn apply_param(state: &Weak<RefCell<GridState>>, param: GridParam, value: i32) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let mut s = state.borrow_mut();
    if !s.config.set(param, value) {
        return;
    }
    let config = s.config;
    if let Err(e) = s.view.apply_layout(&config) {
        log::error!("[grid] layout failed: {}", e);
        return;
    }
    if param.affects_count() {
        log::debug!(
            "[grid] {} = {} -> {} cells",
            param.label(),
            value,
            config.cell_count()
        );
    } else {
        log::debug!("[grid] {} = {}", param.label(), value);
    }
    s.repaint();
}

impl Drop for LineGridWidget {
    fn drop(&mut self) {
        for binding in &self.bindings {
            binding.cancel();
        }
        self.panel.remove();
        self.state.borrow().view.container().remove();
        log::info!("[mount] unmounted");
    }
}
