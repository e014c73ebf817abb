#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod core;
mod dom;
mod events;
mod input;
mod render;
mod ui;
mod widget;

use widget::LineGridWidget;

thread_local! {
    // At most one widget per page; dropping it tears everything down.
    static MOUNTED: RefCell<Option<LineGridWidget>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lines-grid starting");

    // Defer until the module has finished instantiating.
    spawn_local(async move {
        let has_root = dom::window_document()
            .map(|(_, d)| d.get_element_by_id(constants::DEFAULT_ROOT_ID).is_some())
            .unwrap_or(false);
        if !has_root {
            log::info!(
                "[mount] no #{} on the page; waiting for mount()",
                constants::DEFAULT_ROOT_ID
            );
            return;
        }
        if let Err(e) = init(constants::DEFAULT_ROOT_ID) {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init(element_id: &str) -> anyhow::Result<()> {
    // Release the previous widget's listeners before wiring new ones.
    unmount();
    let (_, document) = dom::window_document()?;
    let root = dom::element_by_id(&document, element_id)?;
    let widget = LineGridWidget::mount(&root)?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(widget));
    Ok(())
}

/// Mount the widget into the element with the given id, replacing any mounted one.
#[wasm_bindgen]
pub fn mount(element_id: &str) -> Result<(), JsValue> {
    init(element_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Tear the widget down: remove its DOM and every listener it registered.
#[wasm_bindgen]
pub fn unmount() {
    let previous = MOUNTED.with(|m| m.borrow_mut().take());
    drop(previous);
}
