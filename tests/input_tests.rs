//! Input resolution integration tests.
//!
//! Pointer events go through the hit tester and the input resolver; these
//! tests check engagement bookkeeping and the presenter calls it produces.

mod common;

use common::*;
use monster_echo::core::{EntityId, PlayerId};
use monster_echo::entities::Lifecycle;
use monster_echo::events::{EventKind, GameEvent};
use monster_echo::input::{InputOutcome, PointerEvent};

/// Switching from A to B without a release disengages A exactly once, and
/// before B is engaged. Only B is announced.
#[test]
fn test_switch_disengages_old_first() {
    let mut game = game();
    let events = record_events(&mut game);

    game.press(A);
    events.borrow_mut().clear();
    game.presenter_mut().calls.clear();

    game.press(B);

    let p = game.presenter();
    assert_eq!(p.count(&Call::StopFeedback(A)), 1);
    assert_eq!(p.count(&Call::Lower(A)), 1);

    let lower_a = p.position(&Call::Lower(A)).unwrap();
    let raise_b = p.position(&Call::Raise(B)).unwrap();
    assert!(lower_a < raise_b);

    assert_eq!(
        *events.borrow(),
        vec![
            GameEvent::EntitySelected(B),
            // Sequence is [A], so B is a wrong replay
            GameEvent::GameOver(PlayerId::TWO),
        ]
    );
    assert_eq!(count(&events.borrow(), EventKind::EntitySelected), 1);
    assert_eq!(game.input().engaged(), Some(B));
    assert_eq!(game.pool().lifecycle(A), Some(Lifecycle::Idle));
}

#[test]
fn test_engage_calls_raise_then_feedback() {
    let mut game = game();
    game.press(C);

    let p = game.presenter();
    assert_eq!(p.calls[0], Call::Raise(C));
    assert_eq!(p.calls[1], Call::StartFeedback(C));
}

#[test]
fn test_release_twice_is_silent() {
    let mut game = game();
    game.press(A);

    assert_eq!(game.release(), InputOutcome::Released(A));
    let after_first = game.presenter().calls.len();

    assert_eq!(game.release(), InputOutcome::Ignored);
    assert_eq!(game.presenter().calls.len(), after_first);
    assert_eq!(game.presenter().count(&Call::StopFeedback(A)), 1);
    assert_eq!(game.presenter().count(&Call::Lower(A)), 1);
}

#[test]
fn test_press_held_entity_is_noop() {
    let mut game = game();
    let events = record_events(&mut game);

    game.press(A);
    let calls = game.presenter().calls.len();

    assert_eq!(game.press(A), InputOutcome::AlreadyEngaged(A));
    assert_eq!(game.presenter().calls.len(), calls);
    assert_eq!(count(&events.borrow(), EventKind::EntitySelected), 1);
    assert_eq!(game.machine().sequence(), &[A]);
}

#[test]
fn test_pointer_hit_test() {
    let mut game = game();

    let outcome = game.pointer(PointerEvent::down(1.5, 4.0));
    assert!(matches!(outcome, InputOutcome::Selected { entity, .. } if entity == B));
    assert_eq!(game.input().engaged(), Some(B));

    assert_eq!(game.pointer(PointerEvent::up(1.5, 4.0)), InputOutcome::Released(B));
    assert_eq!(game.input().engaged(), None);
}

#[test]
fn test_pointer_miss_keeps_engagement() {
    let mut game = game();

    game.pointer(PointerEvent::down(0.5, 0.0));
    assert_eq!(game.pointer(PointerEvent::down(10.0, 0.0)), InputOutcome::Missed);
    assert_eq!(game.input().engaged(), Some(A));
    assert_eq!(game.pool().engaged_count(), 1);
}

#[test]
fn test_unknown_entity_ignored() {
    let mut game = game();
    let events = record_events(&mut game);

    assert_eq!(game.press(EntityId(77)), InputOutcome::Ignored);
    assert!(events.borrow().is_empty());
    assert!(game.presenter().calls.is_empty());
}

#[test]
fn test_at_most_one_engaged() {
    let mut game = game();

    for entity in [A, B, C, A, C] {
        game.press(entity);
        assert_eq!(game.pool().engaged_count(), 1);
        assert_eq!(game.pool().lifecycle(entity), Some(Lifecycle::Engaged));
    }
}
