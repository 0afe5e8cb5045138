use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ce_core::{Bounds, Point, PointRole, Real};
use ce_curve::sample_curve;
use ce_editor::{
    CURVE_TAG, Document, EditorConfig, EditorSession, InteractionState, PointerEvent, Rgb, Scene,
};
use ce_signals::{Observable, Subscription};

fn start(link: Option<&str>) -> (EditorSession, Document, Rc<RefCell<Scene>>) {
    let scene = Scene::new(Bounds::new(0.0, 0.0, 100.0, 100.0)).shared();
    let document = Document::new();
    let session = EditorSession::start(
        EditorConfig::default(),
        link,
        scene.clone(),
        document.clone(),
    )
    .expect("default config is valid");
    (session, document, scene)
}

fn at(x: Real, y: Real) -> PointerEvent {
    PointerEvent::new(Point::new(x, y))
}

fn curve_centers(scene: &Rc<RefCell<Scene>>) -> Vec<Point> {
    scene
        .borrow()
        .markers_tagged(CURVE_TAG)
        .map(|m| m.center)
        .collect()
}

#[test]
fn startup_without_link_uses_defaults_and_draws_once() {
    let (session, _, scene) = start(None);

    assert_eq!(session.values(), [75.0, 50.0, 90.0, 25.0]);
    assert_eq!(session.renderer().redraw_count(), 1);
    assert_eq!(
        curve_centers(&scene),
        sample_curve([75.0, 50.0, 90.0, 25.0], &session.config().sampling)
    );

    let scene = scene.borrow();
    for role in PointRole::ALL {
        let handle = scene.handle(role).expect("every handle is placed");
        assert_eq!(handle.center.y, role.default_value());
        assert_eq!(handle.fill, Rgb::BLACK);
    }
}

#[test]
fn startup_link_fills_missing_fields_from_defaults() {
    let (session, _, _) = start(Some("http://localhost/?p0=10&p1=20&p3=40"));
    assert_eq!(session.values(), [10.0, 20.0, 90.0, 40.0]);
}

#[test]
fn startup_link_with_garbage_falls_back() {
    let (session, _, _) = start(Some("?p0=abc&p1=NaN&p2=150"));
    assert_eq!(session.values(), [75.0, 50.0, 100.0, 25.0]);
}

#[test]
fn dragging_one_point_redraws_once_per_move() {
    let (session, document, scene) = start(None);
    let p1 = session.controller(PointRole::P1);

    // Emissions on the other three streams; the replay on subscribe is not counted.
    let others = Rc::new(Cell::new(0));
    let _watch = Subscription::merge(
        [PointRole::P0, PointRole::P2, PointRole::P3]
            .into_iter()
            .map(|role| {
                let others = Rc::clone(&others);
                session
                    .controller(role)
                    .value_stream()
                    .subscribe(move |_: &Real| others.set(others.get() + 1))
            })
            .collect(),
    );
    others.set(0);

    p1.pointer_enter();
    assert_eq!(
        scene.borrow().handle(PointRole::P1).map(|h| h.fill),
        Some(Rgb::RED)
    );

    p1.pointer_down(&at(33.0, 50.0));
    assert_eq!(p1.state(), InteractionState::Dragging);
    assert_eq!(session.renderer().redraw_count(), 1);

    document.dispatch_move(at(40.0, 60.0));
    assert_eq!(session.values(), [75.0, 60.0, 90.0, 25.0]);
    assert_eq!(session.renderer().redraw_count(), 2);
    assert_eq!(
        curve_centers(&scene),
        sample_curve([75.0, 60.0, 90.0, 25.0], &session.config().sampling)
    );

    document.dispatch_up(at(40.0, 60.0));
    assert_eq!(p1.state(), InteractionState::Idle);
    assert_eq!(others.get(), 0);
    assert_eq!(
        scene.borrow().handle(PointRole::P1).map(|h| h.center.y),
        Some(60.0)
    );

    // Moves after release reach nobody
    document.dispatch_move(at(40.0, 10.0));
    assert_eq!(session.values()[1], 60.0);
    assert_eq!(session.renderer().redraw_count(), 2);
}

#[test]
fn drags_are_clamped_to_the_value_domain() {
    let (session, document, _) = start(None);
    let p3 = session.controller(PointRole::P3);

    p3.pointer_down(&at(100.0, 25.0));
    document.dispatch_move(at(100.0, -40.0));
    assert_eq!(p3.value(), 0.0);
    document.dispatch_move(at(100.0, 400.0));
    assert_eq!(p3.value(), 100.0);
    document.dispatch_up(at(100.0, 400.0));
}

#[test]
fn repeated_drags_leave_no_listeners_behind() {
    let (session, document, _) = start(None);

    for role in PointRole::ALL {
        for y in [10.0, 20.0, 30.0] {
            let controller = session.controller(role);
            controller.pointer_down(&at(0.0, 0.0));
            document.dispatch_move(at(0.0, y));
            document.dispatch_up(at(0.0, y));
        }
    }

    assert_eq!(document.total_listeners(), 0);
    assert_eq!(session.values(), [30.0; 4]);
    assert_eq!(session.renderer().redraw_count(), 1 + 12);
}

#[test]
fn resized_surface_changes_mapping_mid_drag() {
    let (session, document, scene) = start(None);
    let p0 = session.controller(PointRole::P0);

    p0.pointer_down(&at(0.0, 75.0));
    document.dispatch_move(at(0.0, 40.0));
    assert_eq!(p0.value(), 40.0);

    scene
        .borrow_mut()
        .set_display_box(Bounds::new(0.0, 0.0, 50.0, 50.0));
    document.dispatch_move(at(0.0, 40.0));
    assert_eq!(p0.value(), 80.0);
    document.dispatch_up(at(0.0, 40.0));
}

#[test]
fn dropping_the_session_stops_redraws() {
    let (session, document, scene) = start(None);
    let p2 = session.controller(PointRole::P2).clone();
    drop(session);

    let before = curve_centers(&scene);
    p2.pointer_down(&at(66.0, 90.0));
    document.dispatch_move(at(66.0, 5.0));
    document.dispatch_up(at(66.0, 5.0));

    assert_eq!(p2.value(), 5.0);
    assert_eq!(curve_centers(&scene), before);
    assert_eq!(
        scene.borrow().handle(PointRole::P2).map(|h| h.center.y),
        Some(90.0)
    );
}
