//! Handle visuals as a pure function of value and interaction state.
//!
//! Controllers never touch the surface for styling. The binding watches a
//! controller's value and state streams and re-places the handle whenever
//! either changes.

use std::cell::Cell;
use std::rc::Rc;

use ce_core::{Point, PointRole, Real, VALUE_MAX};
use ce_signals::{Observable, Subscription};

use crate::config::HandleStyle;
use crate::controller::{ControlPointController, InteractionState};
use crate::surface::{HandleVisual, SharedSurface};

/// Visual for the handle of `role` holding `value` in `state`.
///
/// x is fixed by the role's anchor, y is the value itself (the editor's
/// view box is 100 units tall with 0 at the top).
pub fn handle_visual(
    role: PointRole,
    value: Real,
    state: InteractionState,
    style: &HandleStyle,
) -> HandleVisual {
    HandleVisual {
        center: Point::new(role.anchor_fraction() * VALUE_MAX, value),
        radius: style.radius,
        fill: if state.is_active() {
            style.active
        } else {
            style.idle
        },
    }
}

/// Keep the handle of `controller` on `surface` in sync with its streams.
pub fn bind_handle(
    controller: &ControlPointController,
    surface: SharedSurface,
    style: HandleStyle,
) -> Subscription {
    let role = controller.role();
    let latest = Rc::new(Cell::new((controller.value(), controller.state())));
    let place = {
        let latest = Rc::clone(&latest);
        Rc::new(move || {
            let (value, state) = latest.get();
            let visual = handle_visual(role, value, state, &style);
            surface.borrow_mut().place_handle(role, visual);
        })
    };

    let on_value = {
        let (latest, place) = (Rc::clone(&latest), Rc::clone(&place));
        controller.value_stream().subscribe(move |value: &Real| {
            latest.set((*value, latest.get().1));
            place();
        })
    };
    let on_state = controller
        .state_stream()
        .subscribe(move |state: &InteractionState| {
            latest.set((latest.get().0, *state));
            place();
        });

    Subscription::merge(vec![on_value, on_state])
}
