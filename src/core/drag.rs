use crate::core::constants::{ParamRange, DRAG_FULL_RANGE_PX, DRAG_SENSITIVITY};

/// Anchor of an in-progress drag: where the pointer went down and the value at that moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start_x: f64,
    pub start_value: i32,
}

impl DragSession {
    /// Value for a pointer now at `current_x`, clamped to [min, max].
    #[inline]
    pub fn value_at(&self, current_x: f64, min: i32, max: i32) -> i32 {
        drag_value(self.start_value, self.start_x, current_x, min, max)
    }
}

/// Host-style rounding: halves go toward +inf, so -0.5 rounds to 0 and 0.5 to 1.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Map horizontal pointer travel onto an integer value.
///
/// `DRAG_FULL_RANGE_PX` of sensitivity-scaled travel covers the whole
/// `max - min` span. The start value and the fractional change are summed
/// before rounding. The result never leaves [min, max].
pub fn drag_value(start_value: i32, start_x: f64, current_x: f64, min: i32, max: i32) -> i32 {
    let (lo, hi) = (min.min(max), min.max(max));
    let delta = (current_x - start_x) * DRAG_SENSITIVITY;
    if !delta.is_finite() {
        return start_value.clamp(lo, hi);
    }
    let raw = f64::from(start_value) + delta / DRAG_FULL_RANGE_PX * f64::from(hi - lo);
    round_half_up(raw).clamp(f64::from(lo), f64::from(hi)) as i32
}

struct ActiveDrag<G> {
    session: DragSession,
    // Released together with the session.
    _guard: G,
}

/// A labeled integer that is edited by dragging horizontally.
///
/// While a drag is active the control owns a guard `G` (the input subscription
/// feeding it pointer moves). The guard is dropped exactly when the session
/// ends, is replaced, or the control itself is dropped.
pub struct NumericDragControl<G = ()> {
    range: ParamRange,
    value: i32,
    active: Option<ActiveDrag<G>>,
}

impl<G> NumericDragControl<G> {
    pub fn with_value(range: ParamRange, value: i32) -> Self {
        Self {
            range,
            value: range.clamp(value),
            active: None,
        }
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.range.label
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.active.as_ref().map(|a| &a.session)
    }

    /// Start a drag at pointer x. Any session already running is ended first,
    /// releasing its guard before `guard` takes over.
    pub fn begin(&mut self, start_x: f64, guard: G) {
        self.end();
        self.active = Some(ActiveDrag {
            session: DragSession {
                start_x,
                start_value: self.value,
            },
            _guard: guard,
        });
    }

    /// Track the pointer. Returns the new value when it differs from the displayed one.
    pub fn drag_to(&mut self, current_x: f64) -> Option<i32> {
        let session = self.active.as_ref()?.session;
        let next = session.value_at(current_x, self.range.min, self.range.max);
        if next == self.value {
            return None;
        }
        self.value = next;
        Some(next)
    }

    /// End the session, dropping its guard. Returns false if none was active.
    pub fn end(&mut self) -> bool {
        self.active.take().is_some()
    }
}
