use chrono::NaiveDate;
use dashchart_rs::{
    NumericValue, TooltipParams, TooltipPoint, TooltipValue, render_tooltip,
};

fn midnight(y: i32, mo: u32, d: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

#[test]
fn single_point_renders_date_and_rounded_value() {
    let params = TooltipParams::Single(TooltipPoint::new(
        midnight(2024, 1, 15),
        TooltipValue::Scalar(NumericValue::from(42.567)),
    ));

    let markup = render_tooltip(&params);
    assert!(markup.contains("Jan 15, 2024"), "markup: {markup}");
    assert!(markup.contains("42.57"), "markup: {markup}");
}

#[test]
fn layout_is_two_columns_with_bold_value() {
    let params = TooltipParams::Single(TooltipPoint::new(
        midnight(2024, 1, 15),
        TooltipValue::Scalar(NumericValue::from(42.0)),
    ));

    let markup = render_tooltip(&params);
    assert!(markup.contains("justify-content:space-between"));
    assert!(markup.contains("font-weight:600"));
    // Date column precedes the value column.
    let date_at = markup.find("Jan 15, 2024").expect("date column");
    let value_at = markup.find("font-weight:600").expect("value column");
    assert!(date_at < value_at);
}

#[test]
fn empty_payload_renders_empty_string() {
    let params = TooltipParams::series([]);
    assert_eq!(render_tooltip(&params), "");
}

#[test]
fn multi_series_payload_uses_first_entry() {
    let params = TooltipParams::series([
        TooltipPoint::new(
            midnight(2024, 3, 1),
            TooltipValue::Scalar(NumericValue::from(10.0)),
        ),
        TooltipPoint::new(
            midnight(2024, 3, 2),
            TooltipValue::Scalar(NumericValue::from(99.0)),
        ),
    ]);

    let markup = render_tooltip(&params);
    assert!(markup.contains("Mar 01, 2024"));
    assert!(markup.contains(">10<"));
    assert!(!markup.contains(">99<"));
}

#[test]
fn pair_value_formats_second_element_not_the_timestamp() {
    let params = TooltipParams::series([TooltipPoint::new(
        midnight(2024, 1, 15),
        TooltipValue::Pair(1_705_276_800_000.0, NumericValue::from(17.0)),
    )]);

    let markup = render_tooltip(&params);
    assert!(markup.contains(">17<"), "markup: {markup}");
    assert!(!markup.contains("1,705"), "markup: {markup}");
}

#[test]
fn name_is_the_fallback_date_label() {
    let params = TooltipParams::Single(TooltipPoint::named(
        "2024-01-15",
        TooltipValue::Scalar(NumericValue::from(5.0)),
    ));
    assert!(render_tooltip(&params).contains("Jan 15, 2024"));

    // A non-date name falls back to its raw text, like any axis value.
    let params = TooltipParams::Single(TooltipPoint::named(
        "Revenue",
        TooltipValue::Scalar(NumericValue::from(5.0)),
    ));
    assert!(render_tooltip(&params).contains("Revenue"));
}

#[test]
fn text_valued_entry_renders_verbatim() {
    let params = TooltipParams::Single(TooltipPoint::new(
        midnight(2024, 1, 15),
        TooltipValue::Scalar(NumericValue::from("n/a")),
    ));
    assert!(render_tooltip(&params).contains("n/a"));
}
