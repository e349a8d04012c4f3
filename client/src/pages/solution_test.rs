use super::*;

#[test]
fn carousel_step_moves_within_bounds() {
    assert_eq!(carousel_step(0, 5, 1), 1);
    assert_eq!(carousel_step(3, 5, -1), 2);
}

#[test]
fn carousel_step_clamps_at_both_ends() {
    assert_eq!(carousel_step(0, 5, -1), 0);
    assert_eq!(carousel_step(4, 5, 1), 4);
    assert_eq!(carousel_step(2, 5, 10), 4);
}

#[test]
fn carousel_step_on_empty_stays_at_zero() {
    assert_eq!(carousel_step(0, 0, 1), 0);
    assert_eq!(carousel_step(3, 0, -1), 0);
}
