use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};

/// Temporal axis value as supplied by a data pipeline.
///
/// Category-axis values arrive in several shapes: already-constructed
/// instants, epoch-millisecond numbers, or date strings. The variants keep
/// the original shape so a failed coercion can fall back to the raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum TemporalValue {
    Instant(NaiveDateTime),
    EpochMillis(i64),
    Text(String),
}

impl TemporalValue {
    /// Attempts coercion to a wall-clock instant.
    ///
    /// Timezone offsets in the input are deliberately dropped: caller-facing
    /// labels are wall-clock, not zone-qualified.
    #[must_use]
    pub fn as_instant(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Instant(instant) => Some(*instant),
            Self::EpochMillis(millis) => {
                DateTime::<Utc>::from_timestamp_millis(*millis).map(|dt| dt.naive_utc())
            }
            Self::Text(text) => parse_instant_text(text),
        }
    }

    /// String form of the original value, used when coercion fails.
    #[must_use]
    pub fn fallback_text(&self) -> String {
        match self {
            Self::Instant(instant) => instant.to_string(),
            Self::EpochMillis(millis) => millis.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<DateTime<Utc>> for TemporalValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value.naive_utc())
    }
}

impl From<NaiveDateTime> for TemporalValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Instant(value)
    }
}

impl From<NaiveDate> for TemporalValue {
    fn from(value: NaiveDate) -> Self {
        Self::Instant(value.and_hms_opt(0, 0, 0).expect("midnight is a valid time"))
    }
}

impl From<i64> for TemporalValue {
    fn from(value: i64) -> Self {
        Self::EpochMillis(value)
    }
}

impl From<f64> for TemporalValue {
    fn from(value: f64) -> Self {
        if value.is_finite() && value.abs() < (i64::MAX as f64) {
            Self::EpochMillis(value.round() as i64)
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl From<&str> for TemporalValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for TemporalValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

fn parse_instant_text(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        // Keep the wall-clock fields as written; offsets are not applied.
        return Some(dt.naive_local());
    }

    const DATE_TIME_LAYOUTS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for layout in DATE_TIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Some(dt);
        }
    }

    const DATE_LAYOUTS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, layout) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

fn has_time_of_day(instant: NaiveDateTime) -> bool {
    instant.hour() != 0 || instant.minute() != 0 || instant.second() != 0
}

/// Formats a category-axis tick label.
///
/// Midnight instants render as `Mon DD`; instants with a time-of-day append
/// `HH:MM`. The heterogeneity is intentional so one axis serves both daily
/// and intraday series. Unparseable values fall back to their raw text.
#[must_use]
pub fn format_axis_date(value: &TemporalValue) -> String {
    let Some(instant) = value.as_instant() else {
        return value.fallback_text();
    };

    if has_time_of_day(instant) {
        instant.format("%b %d %H:%M").to_string()
    } else {
        instant.format("%b %d").to_string()
    }
}

/// Formats a tooltip date label as `Mon DD, YYYY`.
///
/// Never renders a time-of-day or timezone suffix, regardless of how the
/// axis label rendered the same instant. Unparseable values fall back to
/// their raw text.
#[must_use]
pub fn format_tooltip_date(value: &TemporalValue) -> String {
    let Some(instant) = value.as_instant() else {
        return value.fallback_text();
    };

    instant.format("%b %d, %Y").to_string()
}
