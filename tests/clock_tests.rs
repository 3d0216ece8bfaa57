//! The injected clock and its serial composition.

use xlserial::{
    date_to_serial, day_of, hour_of, minute_of, month_of, now, second_of, today, year_of, Clock,
    LocalTime,
};

struct FixedClock(LocalTime);

impl Clock for FixedClock {
    fn local_time(&self) -> LocalTime {
        self.0
    }
}

#[test]
fn test_now_round_trips_through_the_accessors() {
    let clock = FixedClock(LocalTime {
        year: 2024,
        month: 7,
        day: 4,
        hour: 9,
        minute: 30,
        second: 15,
    });
    let value = now(&clock);
    assert_eq!(year_of(value), 2024);
    assert_eq!(month_of(value), 7);
    assert_eq!(day_of(value), 4);
    assert_eq!(hour_of(value), 9);
    assert_eq!(minute_of(value), 30);
    assert_eq!(second_of(value), 15);
    assert_eq!(today(&clock), date_to_serial(2024, 7, 4));
}

#[test]
fn test_clock_components_are_folded_like_any_input() {
    // A clock reporting 24:00 lands on the next day's midnight fraction.
    let clock = FixedClock(LocalTime {
        year: 2024,
        month: 1,
        day: 1,
        hour: 24,
        minute: 0,
        second: 0,
    });
    // The date part stays Jan 1; the wrapped time contributes zero.
    assert_eq!(now(&clock), date_to_serial(2024, 1, 1) as f64);
}

#[cfg(feature = "chrono")]
#[test]
fn test_system_clock_is_in_a_plausible_range() {
    use xlserial::SystemClock;

    let serial = today(&SystemClock);
    // Somewhere between 2020 and 2100, which catches an epoch mix-up
    // without depending on the wall clock.
    assert!(serial > date_to_serial(2020, 1, 1));
    assert!(serial < date_to_serial(2100, 1, 1));
    let value = now(&SystemClock);
    assert!(value >= serial as f64 && value < serial as f64 + 2.0);
}
