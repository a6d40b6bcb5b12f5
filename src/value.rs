use crate::tabs::TabStop;

/// A loosely typed value as it arrives in a style map.
///
/// Field setters on [`ParagraphStyle`](crate::ParagraphStyle) are strongly
/// typed; conversion from `StyleValue` happens once, at the point where a
/// style map entry is dispatched to its field.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Tabs(Vec<TabStop>),
}

impl StyleValue {
    /// Only a real boolean counts; `1`, `"true"` etc. do not.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Int(i) => Some(*i as f64),
            StyleValue::Float(f) if f.is_finite() => Some(*f),
            StyleValue::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            StyleValue::Text(s) => Some(s.clone()),
            StyleValue::Int(i) => Some(i.to_string()),
            StyleValue::Float(f) => Some(f.to_string()),
            StyleValue::Bool(_) | StyleValue::Tabs(_) => None,
        }
    }

    /// Infers a value from a command-line token.
    pub fn parse_cli(token: &str) -> StyleValue {
        match token {
            "true" => StyleValue::Bool(true),
            "false" => StyleValue::Bool(false),
            _ => {
                if let Ok(i) = token.parse::<i64>() {
                    StyleValue::Int(i)
                } else if let Ok(f) = token.parse::<f64>() {
                    StyleValue::Float(f)
                } else {
                    StyleValue::Text(token.to_string())
                }
            }
        }
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for StyleValue {
            fn from(i: $t) -> Self {
                StyleValue::Int(i as i64)
            }
        })*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for StyleValue {
    fn from(f: f32) -> Self {
        StyleValue::Float(f as f64)
    }
}

impl From<f64> for StyleValue {
    fn from(f: f64) -> Self {
        StyleValue::Float(f)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<Vec<TabStop>> for StyleValue {
    fn from(stops: Vec<TabStop>) -> Self {
        StyleValue::Tabs(stops)
    }
}
