//! Integration tests for host-owned animation targets
//!
//! These tests verify that:
//! - Weak handles observe host-side mutation and drops
//! - Layout attributes are read from the live frame, not a snapshot

use glint_core::{Constraint, HorizontalPositionAttribute, LayoutAttribute, Rect, View};

#[test]
fn test_weak_view_reads_live_frame() {
    let view = View::new(Rect::new(0.0, 0.0, 100.0, 100.0)).into_handle();
    let weak = view.downgrade();

    let read = || weak.with(|v| LayoutAttribute::CenterX.value_in(&v.frame));
    assert_eq!(read(), Some(50.0));

    // Host moves the view; the weak handle sees the new geometry
    view.borrow_mut().frame = Rect::new(200.0, 0.0, 100.0, 100.0);
    assert_eq!(read(), Some(250.0));

    drop(view);
    assert_eq!(read(), None);
}

#[test]
fn test_constraint_handles_share_state() {
    let content = View::new(Rect::new(0.0, 0.0, 300.0, 100.0)).into_handle();
    let item = View::default().into_handle();
    let constraint = Constraint::new(
        &item,
        HorizontalPositionAttribute::Right,
        &content,
        LayoutAttribute::OriginX,
    )
    .into_handle();
    let alias = constraint.clone();
    let weak = constraint.downgrade();

    weak.with_mut(|c| c.constant = 42.0);

    assert!(alias.ptr_eq(&constraint));
    assert_eq!(alias.borrow().constant, 42.0);
    assert_eq!(alias.borrow().resolve(), Some(42.0));
}

#[cfg(feature = "serde")]
#[test]
fn test_attributes_serialize_by_name() {
    let json = serde_json::to_string(&HorizontalPositionAttribute::CenterX).unwrap();
    assert_eq!(json, "\"CenterX\"");

    let parsed: LayoutAttribute = serde_json::from_str("\"Height\"").unwrap();
    assert_eq!(parsed, LayoutAttribute::Height);
}
