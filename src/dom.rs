use gloo_events::EventListener;
use smallvec::SmallVec;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

#[inline]
pub fn window_document() -> Result<(web::Window, web::Document), DomError> {
    let window = web::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    Ok((window, document))
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Result<web::Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Create a `<div>` with the given class and inline style.
pub fn create_div(
    document: &web::Document,
    class: &str,
    style: &str,
) -> Result<web::HtmlElement, DomError> {
    let el = document
        .create_element("div")?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| DomError::Js(format!("{:?}", e)))?;
    el.set_class_name(class);
    if !style.is_empty() {
        el.set_attribute("style", style)?;
    }
    Ok(el)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// The handful of listeners one subscription needs. Dropping the set removes them all.
pub type Listeners = SmallVec<[EventListener; 4]>;
