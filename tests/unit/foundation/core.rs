use super::*;

#[test]
fn rising_edges_only_report_new_presses() {
    let prev = ButtonSet::from_buttons([0, 3]);
    let now = ButtonSet::from_buttons([0, 4, 7]);
    let edges = now.rising_edges(prev);
    assert_eq!(edges.iter().collect::<Vec<_>>(), vec![4, 7]);
    assert!(now.rising_edges(now).is_empty());
}

#[test]
fn out_of_panel_indices_are_ignored() {
    let set = ButtonSet::from_buttons([1, BUTTON_COUNT, 31]);
    assert_eq!(set.len(), 1);
    assert!(set.contains(1));
    assert!(!set.contains(BUTTON_COUNT));
}

#[test]
fn collects_from_iterator() {
    let set: ButtonSet = [2usize, 2, 11].into_iter().collect();
    assert_eq!(set.bits(), (1 << 2) | (1 << 11));
    assert_eq!(set.union(ButtonSet::from_buttons([0])).len(), 3);
}

#[test]
fn micros_convert_to_fractional_millis() {
    assert_eq!(micros_to_millis(0), 0.0);
    assert_eq!(micros_to_millis(1_500), 1.5);
}

#[test]
fn button_zero_is_left_at_two_one_and_a_half() {
    assert_eq!(BUTTON_COORDS[0], Point::new(2.0, 1.5));
    assert_eq!(BUTTON_COORDS[BUTTON_COUNT - 1], Point::new(5.0, 3.5));
}
