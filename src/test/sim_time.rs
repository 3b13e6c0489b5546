use crate::sim::{DAY_MINUTES, Horizon, SimClock, closed_on_time};

#[test]
fn clock_starts_on_day_one_at_zero() {
    let clock = SimClock::default();
    assert_eq!(clock.day, 1);
    assert_eq!(clock.now, 0.0);
    assert_eq!(clock.absolute(), 0.0);
}

#[test]
fn start_next_day_accumulates_completed_minutes() {
    let mut clock = SimClock::default();
    clock.advance_to(512.5);
    assert_eq!(clock.start_next_day(), 512.5);
    assert_eq!(clock.day, 2);
    assert_eq!(clock.now, 0.0);

    clock.advance_to(10.0);
    assert_eq!(clock.absolute(), 522.5);
}

#[test]
fn horizon_minutes_by_unit() {
    assert_eq!(Horizon::Hours(8).minutes(), 480.0);
    assert_eq!(Horizon::Days(3).minutes(), 3.0 * DAY_MINUTES);
    assert!(Horizon::Hours(0).is_empty());
    assert!(Horizon::Days(0).is_empty());
    assert!(!Horizon::Days(1).is_empty());
}

#[test]
fn hours_horizon_cuts_events_at_or_after_the_end() {
    let h = Horizon::Hours(1);
    let clock = SimClock::default();
    assert!(!h.cuts(&clock, 59.9));
    assert!(!h.cuts(&clock, 60.0));
    assert!(h.cuts(&clock, 60.001));

    let mut late = clock;
    late.advance_to(60.5);
    assert!(h.exhausted(&late));
}

#[test]
fn days_horizon_is_exhausted_once_day_index_passes_it() {
    let h = Horizon::Days(1);
    let mut clock = SimClock::default();
    clock.advance_to(600.0);
    assert!(!h.exhausted(&clock));
    assert!(!h.cuts(&clock, 650.0));

    clock.start_next_day();
    assert!(h.exhausted(&clock));
}

#[test]
fn closed_on_time_tolerates_rounding_only() {
    assert!(closed_on_time(480.0));
    assert!(closed_on_time(480.0 + 1e-4));
    assert!(!closed_on_time(480.1));
    assert!(!closed_on_time(475.0));
}
