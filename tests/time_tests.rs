//! Time-of-day conversion: exhaustive reconstruction and rounding.

use xlserial::{hour_of, minute_of, second_of, serial_to_time, time_to_serial};

#[test]
fn every_second_of_the_day_reconstructs() {
    for total in 0..86_400i64 {
        let hour = total / 3_600;
        let minute = (total % 3_600) / 60;
        let second = total % 60;
        let serial = time_to_serial(hour, minute, second);
        assert!((0.0..1.0).contains(&serial), "fraction out of range at {}", total);
        assert_eq!(
            serial_to_time(serial),
            (hour, minute, second),
            "failed at {:02}:{:02}:{:02}",
            hour,
            minute,
            second
        );
    }
}

#[test]
fn test_known_fractions() {
    assert_eq!(time_to_serial(0, 0, 0), 0.0);
    assert_eq!(time_to_serial(6, 0, 0), 0.25);
    assert_eq!(time_to_serial(12, 0, 0), 0.5);
    assert_eq!(time_to_serial(18, 0, 0), 0.75);
    assert_eq!(hour_of(0.5), 12);
    assert_eq!(minute_of(0.5), 0);
    assert_eq!(second_of(0.5), 0);
}

#[test]
fn test_components_fold_and_wrap() {
    assert_eq!(time_to_serial(23, 120, 0), time_to_serial(1, 0, 0));
    assert_eq!(time_to_serial(0, 0, 86_401), time_to_serial(0, 0, 1));
    assert_eq!(time_to_serial(-6, 0, 0), time_to_serial(18, 0, 0));
    assert_eq!(time_to_serial(0, 0, -1), time_to_serial(23, 59, 59));
}

#[test]
fn test_half_second_ties_round_to_even() {
    // 1/256 of a day is exactly 337.5 seconds, 3/256 exactly 1012.5;
    // the dyadic fractions keep the tie exact in binary floating point.
    assert_eq!(serial_to_time(1.0 / 256.0), (0, 5, 38));
    assert_eq!(serial_to_time(3.0 / 256.0), (0, 16, 52));
    assert_eq!(serial_to_time(0.5 + 1.0 / 256.0), (12, 5, 38));
}

#[test]
fn test_time_of_day_ignores_the_date() {
    assert_eq!(serial_to_time(45_292.25), (6, 0, 0));
    assert_eq!(serial_to_time(-100.25), (18, 0, 0));
    assert_eq!(hour_of(-0.25), 18);
}
