use ggraph::core::PixelPoint;
use ggraph::interaction::{
    Click, GestureClass, InteractionState, Modifiers, PointerButton, PointerEvent,
    SelectionOverlay,
};

#[test]
fn buttons_and_modifiers_pick_the_gesture() {
    use PointerButton::*;
    assert_eq!(
        GestureClass::classify(Primary, Modifiers::NONE),
        Some(GestureClass::Center)
    );
    assert_eq!(
        GestureClass::classify(Secondary, Modifiers::NONE),
        Some(GestureClass::Scroll)
    );
    assert_eq!(
        GestureClass::classify(Tertiary, Modifiers::NONE),
        Some(GestureClass::Zoom)
    );
    assert_eq!(
        GestureClass::classify(Primary, Modifiers::SHIFT),
        Some(GestureClass::Scroll)
    );
    assert_eq!(
        GestureClass::classify(Primary, Modifiers::CONTROL),
        Some(GestureClass::Zoom)
    );
    // Shift wins over Control and over button 3.
    assert_eq!(
        GestureClass::classify(
            Tertiary,
            Modifiers {
                shift: true,
                control: true
            }
        ),
        Some(GestureClass::Scroll)
    );
    assert_eq!(
        GestureClass::classify(WheelDown, Modifiers::NONE),
        Some(GestureClass::Zoom)
    );
    assert_eq!(GestureClass::classify(Other(8), Modifiers::NONE), None);
}

#[test]
fn click_zoom_factor_depends_on_class_and_button() {
    let click = |button, class| Click {
        position: PixelPoint::new(0.0, 0.0),
        button,
        class,
    };
    assert_eq!(
        click(PointerButton::Tertiary, GestureClass::Zoom).zoom_factor(),
        10.0
    );
    assert_eq!(
        click(PointerButton::WheelUp, GestureClass::Zoom).zoom_factor(),
        0.1
    );
    assert_eq!(
        click(PointerButton::WheelDown, GestureClass::Zoom).zoom_factor(),
        10.0
    );
    assert_eq!(
        click(PointerButton::Primary, GestureClass::Center).zoom_factor(),
        1.0
    );
}

#[test]
fn gesture_lifecycle_tracks_press_drag_and_release() {
    let mut state = InteractionState::default();
    assert!(state.is_idle());

    let class = state.on_press(PointerEvent::primary(100.0, 120.0));
    assert_eq!(class, Some(GestureClass::Center));
    assert!(!state.is_idle());
    assert_eq!(state.last_motion(), PixelPoint::new(100.0, 120.0));

    state.mark_moved();
    state.set_last_motion(PixelPoint::new(140.0, 150.0));
    state.set_overlay(Some(SelectionOverlay::GuideLine {
        from: PixelPoint::new(0.0, 0.0),
        to: PixelPoint::new(0.0, 10.0),
    }));
    assert!(state.moved());

    let click = state.finish().expect("open gesture");
    assert_eq!(click.position, PixelPoint::new(100.0, 120.0));
    assert!(state.is_idle());
    assert!(!state.moved());
    assert_eq!(state.overlay(), None);
}

#[test]
fn unclassified_press_leaves_state_idle() {
    let mut state = InteractionState::default();
    let event = PointerEvent::new(
        PixelPoint::new(1.0, 1.0),
        PointerButton::Other(9),
        Modifiers::NONE,
    );
    assert_eq!(state.on_press(event), None);
    assert!(state.is_idle());
}

#[test]
fn pointer_tracking_follows_enter_and_leave() {
    let mut state = InteractionState::default();
    assert!(!state.pointer_inside());
    state.on_pointer_move(PixelPoint::new(5.0, 6.0));
    assert!(state.pointer_inside());
    assert_eq!(state.pointer(), Some(PixelPoint::new(5.0, 6.0)));
    state.on_pointer_leave();
    assert!(!state.pointer_inside());
    state.on_pointer_enter();
    assert!(state.pointer_inside());
}

#[test]
fn new_press_clears_the_small_move_flag() {
    let mut state = InteractionState::default();
    state.set_small_move(true);
    state.on_press(PointerEvent::primary(1.0, 1.0));
    assert!(!state.small_move());
}
