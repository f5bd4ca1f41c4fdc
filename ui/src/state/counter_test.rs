use super::*;

#[test]
fn counter_starts_at_zero() {
    assert_eq!(CounterState::default().count, 0);
}

#[test]
fn increment_and_decrement_step_by_one() {
    let mut state = CounterState::default();
    state.increment();
    state.increment();
    state.decrement();
    assert_eq!(state.count, 1);
}

#[test]
fn decrement_can_go_negative() {
    let mut state = CounterState::default();
    state.decrement();
    assert_eq!(state.count, -1);
}

#[test]
fn reset_returns_to_zero() {
    let mut state = CounterState { count: 42 };
    state.reset();
    assert_eq!(state, CounterState::default());
}

#[test]
fn counter_saturates_at_bounds() {
    let mut state = CounterState { count: i64::MAX };
    state.increment();
    assert_eq!(state.count, i64::MAX);
}
