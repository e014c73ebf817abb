use crate::dom::Listeners;
use crate::input::{self, PointerPosition};
use gloo_events::{EventListener, EventListenerOptions};
use smallvec::smallvec;
use std::rc::Rc;
use web_sys as web;

/// Track the pointer anywhere in the window, reported relative to `container`.
///
/// Every mouse or touch move is converted using the container's bounding box
/// at that moment and handed to `on_move`; nothing is coalesced. Touch moves
/// over the container itself are kept from scrolling the page.
pub fn wire_pointer_tracking(
    window: &web::Window,
    container: &web::HtmlElement,
    on_move: impl Fn(PointerPosition) + 'static,
) -> Listeners {
    let on_move: Rc<dyn Fn(PointerPosition)> = Rc::new(on_move);

    let track = |on_move: Rc<dyn Fn(PointerPosition)>| {
        let container = container.clone();
        move |ev: &web::Event| {
            if let Some(pos) = input::pointer_in_element(ev, &container) {
                on_move(pos);
            }
        }
    };

    smallvec![
        EventListener::new(window, "mousemove", track(on_move.clone())),
        EventListener::new(window, "touchmove", track(on_move)),
        EventListener::new_with_options(
            container,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            |ev: &web::Event| ev.prevent_default(),
        ),
    ]
}
