use routeboard::{
    schedule::{Selection, Side, summarize},
    store::{TextOrNumber, Trip},
};

fn trip(driver: &str, calendar: &str, order_value: &str, punctuality: Option<i64>) -> Trip {
    Trip {
        driver: Some(driver.into()),
        calendar_name: Some(calendar.into()),
        order_value: Some(order_value.into()),
        punctuality: punctuality.map(TextOrNumber::from),
        start: Some("Shift 08:00".into()),
        end: Some("2024-01-01 10:00".into()),
        ..Trip::new(driver)
    }
}

#[test]
fn drag_selects_contiguous_run() {
    let mut selection = Selection::new();
    selection.pointer_down(2);
    selection.pointer_over(3);
    selection.pointer_over(5);
    selection.pointer_up();
    assert_eq!(selection.indices().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
}

#[test]
fn drag_upwards() {
    let mut selection = Selection::new();
    selection.pointer_down(4);
    selection.pointer_over(1);
    assert_eq!(selection.indices().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn revisiting_a_row_keeps_it_selected() {
    let mut selection = Selection::new();
    selection.pointer_down(0);
    selection.pointer_over(2);
    selection.pointer_over(1);
    selection.pointer_over(2);
    assert!(selection.contains(1));
    assert!(selection.contains(2));
    assert_eq!(selection.len(), 3);
}

#[test]
fn hover_without_press_does_nothing() {
    let mut selection = Selection::new();
    selection.pointer_over(3);
    assert!(selection.is_empty());

    selection.pointer_down(1);
    selection.pointer_up();
    selection.pointer_over(4);
    assert_eq!(selection.indices().collect::<Vec<_>>(), vec![1]);
    assert!(!selection.is_dragging());
}

#[test]
fn new_press_replaces_selection() {
    let mut selection = Selection::new();
    selection.pointer_down(0);
    selection.pointer_over(3);
    selection.pointer_up();
    selection.pointer_down(7);
    assert_eq!(selection.indices().collect::<Vec<_>>(), vec![7]);
    selection.clear();
    assert!(selection.is_empty());
}

#[test]
fn summary_needs_more_than_one_row() {
    let trips = vec![trip("Ann", "A-1: WD (3)", "100", Some(5))];
    assert!(summarize(&trips, [0], Side::Right).is_none());
    assert!(summarize(&trips, [0, 9], Side::Right).is_none());
}

#[test]
fn repeated_rows_count_once() {
    let trips = vec![
        trip("Ann", "A-1: WD (3)", "100", Some(5)),
        trip("Bob", "A-1: WD (4)", "300", None),
    ];
    assert!(summarize(&trips, [0, 0], Side::Right).is_none());

    let summary = summarize(&trips, [1, 0, 1, 0], Side::Right).unwrap();
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.order_value.sum, 400.0);
    assert_eq!(summary.order_value.count, 2);
    assert_eq!(summary.tasks.sum, 7.0);
}

#[test]
fn averages_skip_unparseable_values() {
    let trips = vec![
        trip("Ann", "A-1: WD (3)", "100", Some(10)),
        trip("Bob", "A-1: WD (x)", "", None),
        trip("Ann", "A-1: WD (5)", "200", Some(20)),
    ];
    let summary = summarize(&trips, [0, 1, 2], Side::Right).unwrap();
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.drivers, 2);
    assert_eq!(summary.order_value.count, 2);
    assert_eq!(summary.order_value.sum, 300.0);
    assert_eq!(summary.order_value.average(), Some(150.0));
    assert_eq!(summary.tasks.average(), Some(4.0));
    assert_eq!(summary.punctuality.average(), Some(15.0));
    assert_eq!(summary.duration.count, 3);
    assert_eq!(summary.duration.average(), Some(120.0));
}

#[test]
fn left_side_durations_use_punctuality() {
    let trips = vec![
        trip("Ann", "A-1: WD (3)", "100", Some(-10)),
        trip("Bob", "A-1: WD (3)", "100", Some(30)),
    ];
    let summary = summarize(&trips, [0, 1], Side::Left).unwrap();
    assert_eq!(summary.duration.sum, 110.0 + 150.0);
}

#[test]
fn blank_drivers_are_not_counted() {
    let mut trips = vec![
        trip("Ann", "A-1: WD (3)", "100", None),
        trip("Bob", "A-1: WD (3)", "100", None),
    ];
    trips[1].driver = Some("  ".into());
    let summary = summarize(&trips, [0, 1], Side::Right).unwrap();
    assert_eq!(summary.drivers, 1);
    assert_eq!(summary.punctuality.average(), None);
}
