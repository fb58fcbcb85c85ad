//! Field descriptions for the entry forms and the parse step that turns the
//! raw strings a form hands back into typed values.

use crate::error::FormError;

/// What kind of value a form field holds. The terminal form uses this to
/// filter keystrokes, the parse helpers use it to pick a conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
}

/// One labeled input of a modal form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(label: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(label: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            kind,
            required: false,
        }
    }
}

/// Raw form values paired with the specs that produced them.
pub struct FormValues<'a> {
    specs: &'a [FieldSpec],
    values: &'a [String],
}

impl<'a> FormValues<'a> {
    pub fn new(specs: &'a [FieldSpec], values: &'a [String]) -> Result<Self, FormError> {
        if specs.len() != values.len() {
            return Err(FormError::FieldCount {
                expected: specs.len(),
                actual: values.len(),
            });
        }
        Ok(Self { specs, values })
    }

    /// Check every required field before any conversion happens, so a blank
    /// field is reported even when an earlier numeric field is malformed.
    pub fn check_required(&self) -> Result<(), FormError> {
        for (spec, value) in self.specs.iter().zip(self.values) {
            if spec.required && value.trim().is_empty() {
                return Err(FormError::Missing {
                    field: spec.label.to_string(),
                });
            }
        }
        Ok(())
    }

    fn raw(&self, idx: usize) -> (&'static str, Option<&'a str>) {
        let label = self.specs[idx].label;
        let trimmed = self.values[idx].trim();
        if trimmed.is_empty() {
            (label, None)
        } else {
            (label, Some(trimmed))
        }
    }

    fn missing(label: &str) -> FormError {
        FormError::Missing {
            field: label.to_string(),
        }
    }

    pub fn text(&self, idx: usize) -> Result<String, FormError> {
        let (label, raw) = self.raw(idx);
        raw.map(str::to_string).ok_or_else(|| Self::missing(label))
    }

    pub fn optional_text(&self, idx: usize) -> Option<String> {
        self.raw(idx).1.map(str::to_string)
    }

    pub fn integer(&self, idx: usize) -> Result<i64, FormError> {
        let (label, raw) = self.raw(idx);
        parse_integer(label, raw.ok_or_else(|| Self::missing(label))?)
    }

    pub fn optional_integer(&self, idx: usize) -> Result<Option<i64>, FormError> {
        let (label, raw) = self.raw(idx);
        raw.map(|value| parse_integer(label, value)).transpose()
    }

    pub fn decimal(&self, idx: usize) -> Result<f64, FormError> {
        let (label, raw) = self.raw(idx);
        parse_decimal(label, raw.ok_or_else(|| Self::missing(label))?)
    }
}

fn parse_integer(label: &str, value: &str) -> Result<i64, FormError> {
    value.parse::<i64>().map_err(|_| FormError::Malformed {
        field: label.to_string(),
        value: value.to_string(),
        expected: "a whole number",
    })
}

fn parse_decimal(label: &str, value: &str) -> Result<f64, FormError> {
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(FormError::Malformed {
            field: label.to_string(),
            value: value.to_string(),
            expected: "a number",
        }),
    }
}

/// Whether `ch` may be typed into a field of `kind` that currently holds
/// `current`. Malformed values can still be assembled (a lone "-"), the parse
/// step catches those.
pub fn accepts_char(kind: FieldKind, current: &str, ch: char) -> bool {
    match kind {
        FieldKind::Text => !ch.is_control(),
        FieldKind::Integer => ch.is_ascii_digit() || (ch == '-' && current.is_empty()),
        FieldKind::Decimal => {
            ch.is_ascii_digit()
                || (ch == '-' && current.is_empty())
                || (ch == '.' && !current.contains('.'))
        }
    }
}
