/*
[INPUT]:  Raw (name, value) pairs from a submitted form, in document order
[OUTPUT]: FormPayload ready to be sent as a JSON request body
[POS]:    Data layer - form serialization and numeric coercion
[UPDATE]: When the coercion rule or payload encoding changes
*/

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Largest integer magnitude that an f64 holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A single form value after numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Apply the numeric-coercion rule: keep the parsed number when the raw
    /// string has a numeric prefix, otherwise keep the string verbatim.
    pub fn coerce(raw: &str) -> Self {
        match parse_float(raw) {
            Some(number) => FieldValue::Number(number),
            None => FieldValue::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) => Some(*number),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Number(_) => None,
            FieldValue::Text(text) => Some(text),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(text) => serializer.serialize_str(text),
            FieldValue::Number(number) if !number.is_finite() => serializer.serialize_none(),
            FieldValue::Number(number)
                if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER =>
            {
                serializer.serialize_i64(*number as i64)
            }
            FieldValue::Number(number) => serializer.serialize_f64(*number),
        }
    }
}

/// Ordered field-name to value mapping produced by one form submission.
///
/// Names are unique: inserting an existing name replaces the value but keeps
/// the position where the name was first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<(String, FieldValue)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for FormPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Build a payload from form fields in document order.
pub fn serialize_form<I, K, V>(fields: I) -> FormPayload
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    let mut payload = FormPayload::new();
    for (name, raw) in fields {
        payload.insert(name, FieldValue::coerce(raw.as_ref()));
    }
    payload
}

/// Parse the longest numeric prefix of `raw` as a float.
///
/// Returns `None` when there is no numeric prefix at all.
pub fn parse_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start_matches(is_js_whitespace);
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().ok()
}

/// Whitespace and line terminators skipped before a number: TAB, VT, FF,
/// SP, NBSP, BOM, the other `Zs` space separators, LF, CR, LS and PS.
/// Unlike [`char::is_whitespace`], NEL (U+0085) is not included.
fn is_js_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\u{0b}'
            | '\u{0c}'
            | ' '
            | '\u{a0}'
            | '\u{feff}'
            | '\n'
            | '\r'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("42", Some(42.0))]
    #[case("  3.5", Some(3.5))]
    #[case("12abc", Some(12.0))]
    #[case("007", Some(7.0))]
    #[case("1e3", Some(1000.0))]
    #[case("2.5E-1", Some(0.25))]
    #[case("1e", Some(1.0))]
    #[case(".5", Some(0.5))]
    #[case("5.", Some(5.0))]
    #[case("-8", Some(-8.0))]
    #[case("+8", Some(8.0))]
    #[case("0x10", Some(0.0))]
    #[case("", None)]
    #[case("   ", None)]
    #[case("abc", None)]
    #[case(".", None)]
    #[case("-", None)]
    #[case("inf", None)]
    #[case("NaN", None)]
    #[case("\u{85}12", None)]
    #[case("\u{200b}12", None)]
    #[case("\u{a0}\u{3000}\u{feff}12", Some(12.0))]
    #[case("\u{2028}\t\u{0b}-4.5", Some(-4.5))]
    fn parse_float_takes_numeric_prefix(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_float(raw), expected);
    }

    #[test]
    fn parse_float_accepts_infinity_literal() {
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float("-Infinityx"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float("infinity"), None);
    }

    #[test]
    fn coerce_keeps_empty_string_as_text() {
        assert_eq!(FieldValue::coerce(""), FieldValue::Text(String::new()));
    }

    #[test]
    fn coerce_keeps_text_led_by_next_line_verbatim() {
        assert_eq!(
            FieldValue::coerce("\u{85}12"),
            FieldValue::Text("\u{85}12".to_string())
        );
    }

    #[test]
    fn coerce_keeps_non_numeric_text_verbatim() {
        assert_eq!(
            FieldValue::coerce("  Asha "),
            FieldValue::Text("  Asha ".to_string())
        );
    }

    #[test]
    fn duplicate_names_keep_last_value_in_first_position() {
        let payload = serialize_form([("age", "30"), ("first_name", "Asha"), ("age", "31")]);
        assert_eq!(payload.len(), 2);
        let names: Vec<&str> = payload.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["age", "first_name"]);
        assert_eq!(payload.get("age"), Some(&FieldValue::Number(31.0)));
    }

    #[test]
    fn payload_encodes_in_field_order() {
        let payload = serialize_form([
            ("first_name", "Asha"),
            ("last_name", "Rao"),
            ("age", "29"),
            ("monthly_income", "85000"),
            ("phone_number", "9876543210"),
        ]);
        let encoded = serde_json::to_string(&payload).expect("encode payload");
        assert_eq!(
            encoded,
            r#"{"first_name":"Asha","last_name":"Rao","age":29,"monthly_income":85000,"phone_number":9876543210}"#
        );
    }

    #[test]
    fn payload_encodes_fractions_and_non_finite_numbers() {
        let payload = serialize_form([("rate", "8.5"), ("limit", "Infinity"), ("note", "")]);
        let value = serde_json::to_value(&payload).expect("encode payload");
        assert_eq!(value, json!({ "rate": 8.5, "limit": null, "note": "" }));
    }
}
