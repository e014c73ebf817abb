use crate::core::NumericDragControl;
use crate::dom::Listeners;
use crate::input;
use crate::ui::ControlView;
use gloo_events::EventListener;
use smallvec::smallvec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// A control whose active drag owns its document-level listeners.
pub type DragControl = NumericDragControl<Listeners>;

/// A control wired to its readout element.
///
/// Dropping the binding drops the control, which ends any drag in progress and
/// removes that drag's document listeners along with the readout's own.
pub struct DragBinding {
    control: Rc<RefCell<DragControl>>,
    view: Rc<ControlView>,
    _start: Listeners,
}

impl DragBinding {
    /// End a drag in progress, if any.
    pub fn cancel(&self) {
        let mut control = self.control.borrow_mut();
        if control.is_dragging() {
            control.end();
            self.view.set_active(false);
        }
    }
}

#[inline]
fn shared(handler: &Rc<dyn Fn(&web::Event)>) -> impl FnMut(&web::Event) + 'static {
    let handler = handler.clone();
    move |ev: &web::Event| handler(ev)
}

/// Wire mouse-down / touch-start on the readout to start drag sessions.
///
/// `on_change` is called with each new value while dragging, after the
/// control's own state has been updated and released.
pub fn wire_drag_control(
    document: &web::Document,
    control: DragControl,
    view: ControlView,
    on_change: impl Fn(i32) + 'static,
) -> DragBinding {
    let control = Rc::new(RefCell::new(control));
    let view = Rc::new(view);
    let on_change: Rc<dyn Fn(i32)> = Rc::new(on_change);

    let start: Rc<dyn Fn(&web::Event)> = {
        let document = document.clone();
        let control = control.clone();
        let view = view.clone();
        Rc::new(move |ev: &web::Event| {
            let Some(x) = input::client_x(ev) else {
                return;
            };
            let listeners = session_listeners(
                &document,
                Rc::downgrade(&control),
                Rc::downgrade(&view),
                on_change.clone(),
            );
            {
                let mut c = control.borrow_mut();
                c.begin(x, listeners);
                log::debug!("[drag] begin {} at x={:.0} value={}", c.label(), x, c.value());
            }
            view.set_active(true);
        })
    };

    let readout = view.readout().clone();
    let start_listeners: Listeners = smallvec![
        EventListener::new(&readout, "mousedown", shared(&start)),
        EventListener::new(&readout, "touchstart", shared(&start)),
    ];

    DragBinding {
        control,
        view,
        _start: start_listeners,
    }
}

// Listeners for one drag session. They hold only weak references so the
// session (which owns them) never keeps its own control alive.
fn session_listeners(
    document: &web::Document,
    control: Weak<RefCell<DragControl>>,
    view: Weak<ControlView>,
    on_change: Rc<dyn Fn(i32)>,
) -> Listeners {
    let on_move: Rc<dyn Fn(&web::Event)> = {
        let control = control.clone();
        let view = view.clone();
        Rc::new(move |ev: &web::Event| {
            let (Some(control), Some(view)) = (control.upgrade(), view.upgrade()) else {
                return;
            };
            let Some(x) = input::client_x(ev) else {
                return;
            };
            let changed = control.borrow_mut().drag_to(x);
            if let Some(value) = changed {
                view.set_value(value);
                on_change(value);
            }
        })
    };

    let on_end: Rc<dyn Fn(&web::Event)> = Rc::new(move |_ev: &web::Event| {
        if let Some(control) = control.upgrade() {
            let mut c = control.borrow_mut();
            if let Some(start) = c.session().map(|s| s.start_value) {
                log::debug!("[drag] end {} {} -> {}", c.label(), start, c.value());
            }
            c.end();
        }
        if let Some(view) = view.upgrade() {
            view.set_active(false);
        }
    });

    smallvec![
        EventListener::new(document, "mousemove", shared(&on_move)),
        EventListener::new(document, "touchmove", shared(&on_move)),
        EventListener::new(document, "mouseup", shared(&on_end)),
        EventListener::new(document, "touchend", shared(&on_end)),
    ]
}
