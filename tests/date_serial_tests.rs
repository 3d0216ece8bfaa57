//! Known serial numbers and the Excel compatibility boundary.

use xlserial::{date_to_serial, day_of, is_leap_year, month_of, serial_to_date, year_of};

#[test]
fn test_epoch_anchors() {
    assert_eq!(date_to_serial(1899, 12, 31), 1);
    assert_eq!(date_to_serial(1900, 1, 1), 2);
    assert_eq!(serial_to_date(0), (1899, 12, 30));
    assert_eq!(serial_to_date(-1), (1899, 12, 29));
}

#[test]
fn test_excel_identical_from_march_1900() {
    // Excel's DATE(1900,3,1) is 61; agreement is exact from here on.
    assert_eq!(date_to_serial(1900, 3, 1), 61);
    assert_eq!(date_to_serial(1900, 12, 31), 366);
    assert_eq!(date_to_serial(1950, 1, 1), 18_264);
    assert_eq!(date_to_serial(2000, 1, 1), 36_526);
    assert_eq!(date_to_serial(2001, 1, 1), 36_892);
    assert_eq!(date_to_serial(2024, 1, 1), 45_292);
    assert_eq!(date_to_serial(2026, 1, 9), 46_031);
}

#[test]
fn test_pre_bug_region_is_one_day_off_excel() {
    // Excel says DATE(1900,1,1) = 1 and DATE(1900,2,28) = 59 because it
    // counts the phantom 1900-02-29 as serial 60. On the real calendar
    // those dates sit one serial later, and 60 is simply 1900-02-28.
    assert_eq!(date_to_serial(1900, 1, 1), 2);
    assert_eq!(date_to_serial(1900, 2, 28), 60);
    assert_eq!(serial_to_date(60), (1900, 2, 28));
    // 1900 is not a leap year; day 29 rolls into March.
    assert_eq!(date_to_serial(1900, 2, 29), date_to_serial(1900, 3, 1));
}

#[test]
fn test_pre_epoch_dates() {
    assert_eq!(date_to_serial(1601, 1, 1), -109_205);
    assert_eq!(serial_to_date(-109_205), (1601, 1, 1));
    assert_eq!(serial_to_date(-109_206), (1600, 12, 31));
    assert_eq!(date_to_serial(1601, 1, 1) - date_to_serial(1201, 1, 1), 146_097);
}

#[test]
fn test_leap_year_rule() {
    for year in 1400..2500 {
        let expected = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        assert_eq!(is_leap_year(year), expected, "year {}", year);
        assert_eq!(
            date_to_serial(year, 3, 1) - date_to_serial(year, 2, 1),
            if expected { 29 } else { 28 },
            "February length in {}",
            year
        );
    }
}

#[test]
fn test_component_accessors_floor_the_serial() {
    let serial = date_to_serial(2024, 7, 4) as f64;
    assert_eq!(year_of(serial + 0.99), 2024);
    assert_eq!(month_of(serial + 0.5), 7);
    assert_eq!(day_of(serial + 0.25), 4);
    // -0.5 floors to serial -1, which is 1899-12-29.
    assert_eq!(day_of(-0.5), 29);
    assert_eq!(month_of(-0.5), 12);
    assert_eq!(year_of(-0.5), 1899);
}
