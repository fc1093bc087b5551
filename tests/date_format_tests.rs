use chrono::NaiveDate;
use dashchart_rs::{TemporalValue, format_axis_date, format_tooltip_date};

fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> TemporalValue {
    let dt = NaiveDate::from_ymd_opt(y, mo, d)
        .expect("valid date")
        .and_hms_opt(h, mi, s)
        .expect("valid time");
    TemporalValue::from(dt)
}

#[test]
fn axis_label_omits_time_for_midnight_instants() {
    assert_eq!(format_axis_date(&instant(2024, 1, 15, 0, 0, 0)), "Jan 15");
    assert_eq!(format_axis_date(&instant(2024, 12, 3, 0, 0, 0)), "Dec 03");
}

#[test]
fn axis_label_appends_time_for_intraday_instants() {
    assert_eq!(
        format_axis_date(&instant(2024, 1, 15, 10, 30, 0)),
        "Jan 15 10:30"
    );
    // A bare nonzero second is enough to mark the tick as intraday.
    assert_eq!(
        format_axis_date(&instant(2024, 1, 15, 0, 0, 1)),
        "Jan 15 00:00"
    );
}

#[test]
fn tooltip_label_always_renders_full_date_without_time() {
    assert_eq!(
        format_tooltip_date(&instant(2024, 1, 15, 0, 0, 0)),
        "Jan 15, 2024"
    );
    assert_eq!(
        format_tooltip_date(&instant(2024, 1, 15, 10, 30, 45)),
        "Jan 15, 2024"
    );
}

#[test]
fn date_strings_coerce_in_both_modes() {
    let value = TemporalValue::from("2024-01-15");
    assert_eq!(format_axis_date(&value), "Jan 15");
    assert_eq!(format_tooltip_date(&value), "Jan 15, 2024");

    let with_time = TemporalValue::from("2024-01-15T10:30:00");
    assert_eq!(format_axis_date(&with_time), "Jan 15 10:30");
    assert_eq!(format_tooltip_date(&with_time), "Jan 15, 2024");
}

#[test]
fn epoch_millis_coerce_as_utc_wall_clock() {
    // 2024-01-15T00:00:00Z
    let midnight = TemporalValue::from(1_705_276_800_000_i64);
    assert_eq!(format_axis_date(&midnight), "Jan 15");

    // 2024-01-15T10:30:00Z
    let intraday = TemporalValue::from(1_705_314_600_000_i64);
    assert_eq!(format_axis_date(&intraday), "Jan 15 10:30");
    assert_eq!(format_tooltip_date(&intraday), "Jan 15, 2024");
}

#[test]
fn unparseable_text_falls_back_unchanged() {
    let value = TemporalValue::from("not-a-date");
    assert_eq!(format_axis_date(&value), "not-a-date");
    assert_eq!(format_tooltip_date(&value), "not-a-date");
}

#[test]
fn out_of_range_epoch_falls_back_to_number_text() {
    let value = TemporalValue::EpochMillis(i64::MAX);
    assert_eq!(format_axis_date(&value), i64::MAX.to_string());
}

#[test]
fn non_finite_float_input_falls_back_to_number_text() {
    let value = TemporalValue::from(f64::NAN);
    assert_eq!(format_axis_date(&value), "NaN");
}

#[test]
fn slash_separated_dates_coerce() {
    assert_eq!(format_axis_date(&TemporalValue::from("2024/01/15")), "Jan 15");
}
