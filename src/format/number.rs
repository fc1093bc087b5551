/// Numeric magnitude value as supplied by a data pipeline.
///
/// Value-axis ticks and tooltip magnitudes arrive as numbers, as
/// numeric-looking strings (some rendering pipelines serialize ticks as
/// strings), or missing entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    Number(f64),
    Text(String),
    Null,
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for NumericValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<Option<f64>> for NumericValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(number) => Self::Number(number),
            None => Self::Null,
        }
    }
}

impl From<&str> for NumericValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for NumericValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Formats a tooltip magnitude: grouped en-US digits, at most two fraction
/// digits, trailing zeros trimmed.
///
/// Text passes through unparsed, missing values render empty, and non-finite
/// numbers render their plain string form. Never panics.
#[must_use]
pub fn format_number(value: &NumericValue) -> String {
    match value {
        NumericValue::Number(number) => format_finite_or_fallback(*number),
        NumericValue::Text(text) => text.clone(),
        NumericValue::Null => String::new(),
    }
}

/// Formats a value-axis tick label.
///
/// Same rules as [`format_number`], except numeric-looking text is parsed
/// and formatted; text that does not parse falls back unchanged.
#[must_use]
pub fn format_axis_number(value: &NumericValue) -> String {
    match value {
        NumericValue::Text(text) => match text.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => format_grouped(number),
            _ => text.clone(),
        },
        other => format_number(other),
    }
}

fn format_finite_or_fallback(number: f64) -> String {
    if number.is_finite() {
        format_grouped(number)
    } else {
        number.to_string()
    }
}

fn format_grouped(number: f64) -> String {
    let text = trim_fraction(format!("{number:.2}"));
    group_integer_digits(&text)
}

fn trim_fraction(mut text: String) -> String {
    if let Some(index) = text.find('.') {
        let mut end = text.len();
        for (idx, ch) in text.char_indices().rev() {
            if idx <= index {
                break;
            }
            if ch != '0' {
                break;
            }
            end = idx;
        }
        if end < text.len() {
            text.truncate(end);
        }
        if text.ends_with('.') {
            text.pop();
        }
    }

    if text == "-0" { "0".to_owned() } else { text }
}

fn group_integer_digits(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (offset, digit) in integer.chars().enumerate() {
        if offset > 0 && (integer.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
