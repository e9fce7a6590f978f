//! Split options and their validation
//!
//! Options arrive loosely typed (a JavaScript object, or a JSON string on the
//! native side) as [`RawOptions`]. [`validate`] applies the defaults and checks
//! them in a fixed order (type, tag, word delimiter), producing the immutable
//! [`SplitConfig`] the splitter runs with.

use crate::error::{SplitTextError, SplitTextResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default word delimiter
pub const DEFAULT_WORD_DELIMITER: &str = " ";

/// Unit kind requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    Chars,
    Words,
}

impl SplitType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "chars" => Some(SplitType::Chars),
            "words" => Some(SplitType::Words),
            _ => None,
        }
    }
}

/// Element kind used to wrap each unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapperTag {
    #[default]
    Div,
    Span,
}

impl WrapperTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            WrapperTag::Div => "div",
            WrapperTag::Span => "span",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "div" => Some(WrapperTag::Div),
            "span" => Some(WrapperTag::Span),
            _ => None,
        }
    }
}

/// Options exactly as supplied by the caller, before validation
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawOptions {
    #[serde(default, rename = "type")]
    pub split_type: Option<Value>,

    #[serde(default)]
    pub tag: Option<Value>,

    #[serde(default)]
    pub word_delimiter: Option<Value>,

    #[serde(default)]
    pub words_class: Option<Value>,

    #[serde(default)]
    pub chars_class: Option<Value>,
}

impl RawOptions {
    /// Parse options from a JSON object string
    pub fn from_json(json: &str) -> SplitTextResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Validated, immutable split configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SplitConfig {
    /// Requested unit kinds, de-duplicated, never empty
    pub types: Vec<SplitType>,
    pub tag: WrapperTag,
    pub word_delimiter: String,
    pub words_class: Option<String>,
    pub chars_class: Option<String>,
}

impl SplitConfig {
    pub fn splits(&self, kind: SplitType) -> bool {
        self.types.contains(&kind)
    }

    pub fn splits_chars(&self) -> bool {
        self.splits(SplitType::Chars)
    }

    pub fn splits_words(&self) -> bool {
        self.splits(SplitType::Words)
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            types: vec![SplitType::Chars, SplitType::Words],
            tag: WrapperTag::Div,
            word_delimiter: DEFAULT_WORD_DELIMITER.to_string(),
            words_class: None,
            chars_class: None,
        }
    }
}

/// Apply defaults and validate raw options
///
/// Checks run in order type, tag, word delimiter; the first failure is
/// returned. A value that is absent or falsy in the JavaScript sense
/// (`null`, `false`, `0`, `""`) falls back to its default.
pub fn validate(raw: &RawOptions) -> SplitTextResult<SplitConfig> {
    let types = check_type(provided(raw.split_type.as_ref()))?;
    let tag = check_tag(provided(raw.tag.as_ref()))?;
    let word_delimiter = check_word_delimiter(provided(raw.word_delimiter.as_ref()))?;

    Ok(SplitConfig {
        types,
        tag,
        word_delimiter,
        words_class: class_option(raw.words_class.as_ref()),
        chars_class: class_option(raw.chars_class.as_ref()),
    })
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn provided(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !is_falsy(v))
}

fn check_type(value: Option<&Value>) -> SplitTextResult<Vec<SplitType>> {
    let Some(value) = value else {
        return Ok(SplitConfig::default().types);
    };

    let entries = value.as_array().ok_or(SplitTextError::TypeNotArray)?;

    if entries.is_empty() {
        return Err(SplitTextError::TypeEmpty);
    }

    if entries.len() > 2 {
        return Err(SplitTextError::TypeTooLong);
    }

    let mut types = Vec::with_capacity(2);
    for kind in entries.iter().filter_map(Value::as_str).filter_map(SplitType::from_name) {
        if !types.contains(&kind) {
            types.push(kind);
        }
    }

    if types.is_empty() {
        return Err(SplitTextError::TypeUnrecognized);
    }

    Ok(types)
}

fn check_tag(value: Option<&Value>) -> SplitTextResult<WrapperTag> {
    let Some(value) = value else {
        return Ok(WrapperTag::default());
    };

    let name = value.as_str().ok_or(SplitTextError::TagNotString)?;
    WrapperTag::from_name(name).ok_or(SplitTextError::TagUnrecognized)
}

fn check_word_delimiter(value: Option<&Value>) -> SplitTextResult<String> {
    match value {
        None => Ok(DEFAULT_WORD_DELIMITER.to_string()),
        Some(Value::String(delimiter)) => Ok(delimiter.clone()),
        Some(_) => Err(SplitTextError::DelimiterNotString),
    }
}

// Non-string class values are ignored rather than rejected
fn class_option(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}
