use crate::constants::*;
use crate::dom::{self, DomError};
use web_sys as web;

/// Label + value readout for one numeric control.
pub struct ControlView {
    root: web::HtmlElement,
    readout: web::HtmlElement,
}

impl ControlView {
    pub fn new(document: &web::Document, label: &str, value: i32) -> Result<Self, DomError> {
        let root = dom::create_div(document, CONTROL_CLASS, CONTROL_STYLE)?;
        let label_el = document.create_element("label")?;
        label_el.set_class_name(LABEL_CLASS);
        label_el.set_attribute("style", LABEL_STYLE)?;
        label_el.set_text_content(Some(label));
        let readout = dom::create_div(document, READOUT_CLASS, READOUT_STYLE)?;
        readout.set_text_content(Some(&value.to_string()));
        root.append_child(&label_el)?;
        root.append_child(&readout)?;
        Ok(Self { root, readout })
    }

    #[inline]
    pub fn root(&self) -> &web::HtmlElement {
        &self.root
    }

    #[inline]
    pub fn readout(&self) -> &web::HtmlElement {
        &self.readout
    }

    pub fn set_value(&self, value: i32) {
        self.readout.set_text_content(Some(&value.to_string()));
    }

    /// Highlight the readout while it is being dragged.
    pub fn set_active(&self, active: bool) {
        let cl = self.readout.class_list();
        if active {
            _ = cl.add_1(READOUT_ACTIVE_CLASS);
            dom::set_style(&self.readout, "color", READOUT_ACTIVE_COLOR);
        } else {
            _ = cl.remove_1(READOUT_ACTIVE_CLASS);
            dom::set_style(&self.readout, "color", READOUT_IDLE_COLOR);
        }
    }
}

#[inline]
pub fn create_panel(document: &web::Document) -> Result<web::HtmlElement, DomError> {
    dom::create_div(document, PANEL_CLASS, PANEL_STYLE)
}
