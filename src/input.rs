use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer location in CSS pixels relative to the grid container's top-left corner.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[inline]
pub fn relative_to_rect(client_x: f64, client_y: f64, left: f64, top: f64) -> PointerPosition {
    PointerPosition {
        x: (client_x - left) as f32,
        y: (client_y - top) as f32,
    }
}

// ---------------- Event adapters ----------------
#[inline]
pub fn is_touch_event(ev: &web::Event) -> bool {
    ev.type_().starts_with("touch")
}

/// Client coordinates of a mouse event, or of the first active touch point.
/// Touch events without any touches yield `None`.
pub fn client_point(ev: &web::Event) -> Option<(f64, f64)> {
    if is_touch_event(ev) {
        let touch = ev.unchecked_ref::<web::TouchEvent>().touches().get(0)?;
        Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
    } else {
        let mouse = ev.dyn_ref::<web::MouseEvent>()?;
        Some((f64::from(mouse.client_x()), f64::from(mouse.client_y())))
    }
}

#[inline]
pub fn client_x(ev: &web::Event) -> Option<f64> {
    client_point(ev).map(|(x, _)| x)
}

/// Convert an event's client coordinates into `element`-relative ones using
/// the element's current bounding box.
pub fn pointer_in_element(ev: &web::Event, element: &web::Element) -> Option<PointerPosition> {
    let (cx, cy) = client_point(ev)?;
    let rect = element.get_bounding_client_rect();
    Some(relative_to_rect(cx, cy, rect.left(), rect.top()))
}
