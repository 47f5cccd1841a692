/// Coerce a text input to a number the way an HTML numeric field does on
/// submit: surrounding whitespace is ignored, an empty value is `0`, and
/// anything that is not a number becomes `NaN`.
pub fn parse_form_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}
