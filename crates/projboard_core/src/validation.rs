//! Declarative field validation.
//!
//! # Responsibility
//! - Evaluate one raw field value against a rule set.
//!
//! # Invariants
//! - The result is a single boolean; no partial results are produced.
//! - Length rules only apply to text, bound rules only apply to numbers.
//! - Absent rules are trivially satisfied.

/// Runtime kind of a field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    fn is_blank(&self) -> bool {
        match self {
            Self::Text(value) => value.trim().is_empty(),
            // Numbers always stringify to at least one character.
            Self::Number(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Constraints declared for one field.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RuleSet {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, value: usize) -> Self {
        self.min_length = Some(value);
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.max_length = Some(value);
        self
    }

    pub fn min(mut self, value: f64) -> Self {
        self.min = Some(value);
        self
    }

    pub fn max(mut self, value: f64) -> Self {
        self.max = Some(value);
        self
    }
}

/// Returns whether `value` satisfies every applicable rule in `rules`.
pub fn validate(value: &FieldValue, rules: &RuleSet) -> bool {
    if rules.required && value.is_blank() {
        return false;
    }

    match value {
        FieldValue::Text(text) => {
            let length = text.chars().count();
            rules.min_length.map_or(true, |min| length >= min)
                && rules.max_length.map_or(true, |max| length <= max)
        }
        FieldValue::Number(number) => {
            rules.min.map_or(true, |min| *number >= min)
                && rules.max.map_or(true, |max| *number <= max)
        }
    }
}

/// Converts raw input text to a number the way a form field coerces it.
///
/// Surrounding whitespace is ignored and blank text becomes `0.0`.
/// Unsigned `0x`/`0o`/`0b` literals are read in their radix.
/// Anything unparseable becomes NaN, which fails every bound comparison.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }
    // Rust accepts `inf`/`nan` spellings that a form field would not.
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Reads `0x1F`, `0o17`, `0b101` style literals; NaN when the digits are bad.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let prefix = text.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    let value = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit));
    Some(value)
}
