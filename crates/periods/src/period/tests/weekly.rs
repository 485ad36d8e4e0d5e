use chrono::{Duration, NaiveDateTime, Weekday};

use super::at;
use crate::edge::DayTimeEdge;
use crate::error::PeriodError;
use crate::period::{PeriodLabel, WeeklyPeriod, Window};

fn weekly(from: (Weekday, &str), to: (Weekday, &str)) -> WeeklyPeriod {
    WeeklyPeriod::new(
        PeriodLabel::new("weekly", "test window"),
        DayTimeEdge::new(from.0, from.1),
        DayTimeEdge::new(to.0, to.1),
    )
}

/// Monday 09:00 to Friday 17:00.
fn work_week() -> WeeklyPeriod {
    weekly((Weekday::Mon, "09:00"), (Weekday::Fri, "17:00"))
}

/// Saturday 23:00 to Sunday 07:00, across the week rollover.
fn maintenance() -> WeeklyPeriod {
    weekly((Weekday::Sat, "23:00"), (Weekday::Sun, "07:00"))
}

/// Monday 18:00 to Monday 08:00: same weekday, wraps the whole week.
fn long_week() -> WeeklyPeriod {
    weekly((Weekday::Mon, "18:00"), (Weekday::Mon, "08:00"))
}

// -- contains -----------------------------------------------------------

#[test]
fn internal_window_contains_inclusive_bounds() {
    let p = work_week();
    assert!(!p.wraps());

    assert!(p.contains(at(18, 9, 0)));
    assert!(p.contains(at(20, 12, 0)));
    assert!(p.contains(at(22, 17, 0)));

    assert!(!p.contains(at(18, 8, 59)));
    assert!(!p.contains(at(22, 17, 1)));
    assert!(!p.contains(at(23, 12, 0)));
    assert!(!p.contains(at(17, 12, 0)));
}

#[test]
fn wrapping_window_crosses_week_rollover() {
    let p = maintenance();
    assert!(p.wraps());

    assert!(p.contains(at(23, 23, 0)));
    assert!(p.contains(at(23, 23, 30)));
    assert!(p.contains(at(24, 3, 0)));
    assert!(p.contains(at(24, 7, 0)));

    assert!(!p.contains(at(23, 22, 59)));
    assert!(!p.contains(at(24, 7, 1)));
    assert!(!p.contains(at(20, 12, 0)));
}

#[test]
fn same_weekday_later_from_wraps_whole_week() {
    let p = long_week();
    assert!(p.wraps());

    assert!(p.contains(at(18, 18, 0)));
    assert!(p.contains(at(18, 20, 0)));
    assert!(p.contains(at(20, 12, 0)));
    assert!(p.contains(at(24, 12, 0)));
    assert!(p.contains(at(18, 7, 0)));
    assert!(p.contains(at(18, 8, 0)));

    assert!(!p.contains(at(18, 8, 1)));
    assert!(!p.contains(at(18, 12, 0)));
    assert!(!p.contains(at(18, 17, 59)));
}

#[test]
fn degenerate_window_contains_only_exact_weekly_minute() {
    let p = weekly((Weekday::Wed, "12:00"), (Weekday::Wed, "12:00"));
    assert!(p.contains(at(20, 12, 0)));
    assert!(p.contains(at(27, 12, 0)));

    assert!(!p.contains(at(20, 11, 59)));
    assert!(!p.contains(at(20, 12, 1)));
    assert!(!p.contains(at(21, 12, 0)));
}

#[test]
fn swapping_edges_complements_except_at_boundaries() {
    let internal = work_week();
    let external = weekly((Weekday::Fri, "17:00"), (Weekday::Mon, "09:00"));

    for t in super::week_minutes() {
        if t == at(18, 9, 0) || t == at(22, 17, 0) {
            assert!(internal.contains(t) && external.contains(t), "boundary {t}");
        } else {
            assert_ne!(internal.contains(t), external.contains(t), "instant {t}");
        }
    }
}

// -- current ------------------------------------------------------------

#[test]
fn current_bounds_of_internal_window() {
    let p = work_week();
    let now = at(20, 12, 0);
    assert_eq!(p.current_start_at(now).unwrap(), at(18, 9, 0));
    assert_eq!(p.current_end_at(now).unwrap(), at(22, 17, 0));
}

#[test]
fn current_bounds_on_edge_days() {
    let p = work_week();
    assert_eq!(p.current_start_at(at(18, 9, 0)).unwrap(), at(18, 9, 0));
    assert_eq!(p.current_end_at(at(18, 9, 0)).unwrap(), at(22, 17, 0));
    assert_eq!(p.current_start_at(at(22, 17, 0)).unwrap(), at(18, 9, 0));
    assert_eq!(p.current_end_at(at(22, 17, 0)).unwrap(), at(22, 17, 0));
}

#[test]
fn current_bounds_of_wrapping_window() {
    let p = maintenance();

    let saturday_night = at(23, 23, 30);
    assert_eq!(p.current_start_at(saturday_night).unwrap(), at(23, 23, 0));
    assert_eq!(p.current_end_at(saturday_night).unwrap(), at(24, 7, 0));

    let sunday_morning = at(24, 3, 0);
    assert_eq!(p.current_start_at(sunday_morning).unwrap(), at(23, 23, 0));
    assert_eq!(p.current_end_at(sunday_morning).unwrap(), at(24, 7, 0));
}

#[test]
fn current_bounds_of_same_weekday_wrap() {
    let p = long_week();

    let evening = at(18, 20, 0);
    assert_eq!(p.current_start_at(evening).unwrap(), at(18, 18, 0));
    assert_eq!(p.current_end_at(evening).unwrap(), at(25, 8, 0));

    let morning = at(18, 7, 0);
    assert_eq!(p.current_start_at(morning).unwrap(), at(11, 18, 0));
    assert_eq!(p.current_end_at(morning).unwrap(), at(18, 8, 0));
}

#[test]
fn current_bounds_fail_when_inactive() {
    let p = maintenance();
    let now = at(20, 12, 0);
    assert_eq!(p.current_start_at(now), Err(PeriodError::NotActive));
    assert_eq!(p.current_end_at(now), Err(PeriodError::NotActive));
}

// -- next / previous ----------------------------------------------------

#[test]
fn next_and_previous_skip_active_occurrence() {
    for (p, now) in [
        (work_week(), at(20, 12, 0)),
        (work_week(), at(18, 9, 0)),
        (maintenance(), at(23, 23, 30)),
        (maintenance(), at(24, 3, 0)),
        (long_week(), at(18, 20, 0)),
        (long_week(), at(18, 7, 0)),
    ] {
        let start = p.current_start_at(now).unwrap();
        let end = p.current_end_at(now).unwrap();

        assert_eq!(p.next_start_at(now).unwrap(), start + Duration::days(7));
        assert_eq!(p.next_end_at(now).unwrap(), end + Duration::days(7));
        assert_eq!(p.previous_start_at(now).unwrap(), start - Duration::days(7));
        assert_eq!(p.previous_end_at(now).unwrap(), end - Duration::days(7));

        assert_ne!(p.next_end_at(now).unwrap(), end);
        assert_ne!(p.previous_start_at(now).unwrap(), start);
    }
}

#[test]
fn inactive_work_week_on_saturday() {
    let p = work_week();
    let now = at(23, 12, 0);
    assert_eq!(p.next_start_at(now).unwrap(), at(25, 9, 0));
    assert_eq!(p.next_end_at(now).unwrap(), at(29, 17, 0));
    assert_eq!(p.previous_start_at(now).unwrap(), at(18, 9, 0));
    assert_eq!(p.previous_end_at(now).unwrap(), at(22, 17, 0));
}

#[test]
fn inactive_work_week_on_monday_morning() {
    let p = work_week();
    let now = at(18, 8, 0);
    assert_eq!(p.next_start_at(now).unwrap(), at(18, 9, 0));
    assert_eq!(p.next_end_at(now).unwrap(), at(22, 17, 0));
    assert_eq!(p.previous_start_at(now).unwrap(), at(11, 9, 0));
    assert_eq!(p.previous_end_at(now).unwrap(), at(15, 17, 0));
}

#[test]
fn inactive_maintenance_midweek() {
    let p = maintenance();
    let now = at(20, 12, 0);
    assert_eq!(p.next_start_at(now).unwrap(), at(23, 23, 0));
    assert_eq!(p.next_end_at(now).unwrap(), at(24, 7, 0));
    assert_eq!(p.previous_start_at(now).unwrap(), at(16, 23, 0));
    assert_eq!(p.previous_end_at(now).unwrap(), at(17, 7, 0));
}

#[test]
fn inactive_same_weekday_wrap() {
    let p = long_week();
    let now = at(18, 12, 0);
    assert_eq!(p.next_start_at(now).unwrap(), at(18, 18, 0));
    assert_eq!(p.next_end_at(now).unwrap(), at(25, 8, 0));
    assert_eq!(p.previous_start_at(now).unwrap(), at(11, 18, 0));
    assert_eq!(p.previous_end_at(now).unwrap(), at(18, 8, 0));
}

#[test]
fn occurrences_land_on_edge_weekday() {
    let p = maintenance();
    for now in super::week_minutes().step_by(53) {
        for start in [p.next_start_at(now), p.previous_start_at(now)] {
            assert_eq!(chrono::Datelike::weekday(&start.unwrap()), Weekday::Sat);
        }
        for end in [p.next_end_at(now), p.previous_end_at(now)] {
            assert_eq!(chrono::Datelike::weekday(&end.unwrap()), Weekday::Sun);
        }
    }
}

#[test]
fn malformed_hour_fails_occurrence_queries() {
    let p = weekly((Weekday::Mon, "morning"), (Weekday::Fri, "17:00"));
    let now = at(17, 12, 0);
    assert!(!p.contains(now));
    assert!(matches!(p.next_start_at(now), Err(PeriodError::Format(_))));
    assert_eq!(p.next_end_at(now).unwrap(), at(22, 17, 0));
}

#[test]
fn inactive_seconds_after_end_roll_to_next_week() {
    let p = work_week();
    let now = at(22, 17, 0) + Duration::seconds(30);
    assert!(!p.contains(now));

    let next_end = p.next_end_at(now).unwrap();
    assert!(next_end > now);
    assert_eq!(next_end, at(29, 17, 0));
    assert_eq!(p.next_start_at(now).unwrap(), at(25, 9, 0));
    assert_eq!(p.previous_end_at(now).unwrap(), at(22, 17, 0));
    assert_eq!(p.previous_start_at(now).unwrap(), at(18, 9, 0));
}

#[test]
fn occurrences_past_calendar_limits_fail() {
    let max = NaiveDateTime::MAX;
    let min = NaiveDateTime::MIN;

    for p in [work_week(), maintenance(), long_week()] {
        assert_eq!(p.next_start_at(max), Err(PeriodError::OutOfRange));
        assert_eq!(p.next_end_at(max), Err(PeriodError::OutOfRange));
        assert_eq!(p.previous_start_at(min), Err(PeriodError::OutOfRange));
        assert_eq!(p.previous_end_at(min), Err(PeriodError::OutOfRange));
    }
}
