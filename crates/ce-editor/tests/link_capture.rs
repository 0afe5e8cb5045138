use ce_core::{Bounds, Point, PointRole};
use ce_editor::{Document, EditorConfig, EditorSession, PointerEvent, Scene};

fn session_with(config: EditorConfig, link: Option<&str>) -> (EditorSession, Document) {
    let scene = Scene::new(Bounds::new(0.0, 0.0, 100.0, 100.0)).shared();
    let document = Document::new();
    let session = EditorSession::start(config, link, scene, document.clone())
        .expect("failed to start editor");
    (session, document)
}

#[test]
fn captured_link_carries_current_values() {
    let (session, document) = session_with(EditorConfig::default(), None);
    let p0 = session.controller(PointRole::P0);
    p0.pointer_down(&PointerEvent::new(Point::new(0.0, 75.0)));
    document.dispatch_move(PointerEvent::new(Point::new(0.0, 12.0)));
    document.dispatch_up(PointerEvent::new(Point::new(0.0, 12.0)));

    let url = session.capture_link().expect("capture failed");
    assert_eq!(url.as_str(), "http://localhost/?p0=12&p1=50&p2=90&p3=25");
}

#[test]
fn captured_link_restores_the_same_curve() {
    let (first, _) = session_with(
        EditorConfig::default(),
        Some("?p0=1.25&p1=99&p2=0&p3=33.3"),
    );
    let url = first.capture_link().expect("capture failed");

    let (second, _) = session_with(EditorConfig::default(), Some(url.as_str()));
    assert_eq!(second.values(), first.values());
    assert_eq!(second.values(), [1.25, 99.0, 0.0, 33.3]);
}

#[test]
fn capture_keeps_only_the_origin_of_the_base() {
    let config = EditorConfig {
        base_location: "https://curves.example.org:8443/editor/index.html?p0=1#top".to_string(),
        ..EditorConfig::default()
    };
    let (session, _) = session_with(config, None);
    let url = session.capture_link().expect("capture failed");
    assert_eq!(
        url.as_str(),
        "https://curves.example.org:8443/?p0=75&p1=50&p2=90&p3=25"
    );
}

#[test]
fn invalid_config_is_rejected_at_startup() {
    let mut config = EditorConfig::default();
    config.base_location = "not a url".to_string();
    let scene = Scene::new(Bounds::new(0.0, 0.0, 100.0, 100.0)).shared();
    assert!(EditorSession::start(config, None, scene, Document::new()).is_err());
}
