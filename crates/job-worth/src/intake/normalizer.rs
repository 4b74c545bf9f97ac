use super::fields::{FieldKind, FormField};
use super::IntakeError;

const GROUP_SEPARATORS: [char; 2] = [',', '_'];

/// Coerce a raw form value to a number. Blank means 0, as an empty numeric
/// input does in the form; anything else must parse as a finite number.
pub(crate) fn parse_form_number(field: FormField, raw: &str) -> Result<f64, IntakeError> {
    let cleaned = raw.replace(['\u{feff}', '\u{200b}'], "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let invalid = || IntakeError::InvalidNumber {
        field: field.name(),
        value: raw.to_string(),
    };

    let digits = if trimmed.contains(GROUP_SEPARATORS) {
        if field.kind() != FieldKind::Currency {
            return Err(invalid());
        }
        strip_group_separators(trimmed).ok_or_else(invalid)?
    } else {
        trimmed.to_string()
    };

    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}

/// `15,000.50` -> `15000.50`. Separators are only valid between groups of
/// three digits in the integer part; `3,5` or `1,2,3` yield `None`.
fn strip_group_separators(value: &str) -> Option<String> {
    let unsigned = value.trim_start_matches(['+', '-']);
    let sign = &value[..value.len() - unsigned.len()];
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    if fraction.is_some_and(|fraction| fraction.contains(GROUP_SEPARATORS)) {
        return None;
    }

    let is_digits = |group: &str| group.bytes().all(|byte| byte.is_ascii_digit());
    let mut groups = integer.split(GROUP_SEPARATORS);
    let leading = groups.next()?;
    if !(1..=3).contains(&leading.len()) || !is_digits(leading) {
        return None;
    }
    if !groups.all(|group| group.len() == 3 && is_digits(group)) {
        return None;
    }

    let mut stripped = String::with_capacity(value.len());
    stripped.push_str(sign);
    stripped.push_str(&integer.replace(GROUP_SEPARATORS, ""));
    if let Some(fraction) = fraction {
        stripped.push('.');
        stripped.push_str(fraction);
    }
    Some(stripped)
}

pub(crate) fn normalize_header(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}
