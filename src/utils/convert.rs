//! Generic value conversion.
//!
//! Three entry points cover the ways a value reaches us: a typed value
//! converted through [`TryFrom`], text parsed through [`FromStr`], and an
//! untyped [`serde_json::Value`] deserialized into the requested type.
//! None of them coerce silently; every failure is a [`ConvertError`].
//! Floating-point targets reject results that overflow to infinity unless
//! the input itself names an infinity.

use std::any::type_name;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Conversion failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The source value has no representation in the target type.
    #[error("Cannot convert {from} to {to}: {reason}")]
    Incompatible {
        /// Source type or JSON kind.
        from: String,
        /// Target type name.
        to: String,
        /// Underlying conversion error.
        reason: String,
    },

    /// Text could not be parsed as the target type.
    #[error("Cannot parse {input:?} as {to}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// Target type name.
        to: String,
        /// Underlying parse error.
        reason: String,
    },

    /// The requested target type is not one we know how to produce.
    #[error("Unsupported target type: {0}")]
    UnsupportedTarget(String),
}

/// Returns the name of `T` with module paths removed.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn type_label<T: ?Sized>() -> String {
    fn last_segment(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }

    let full = type_name::<T>();
    let mut label = String::with_capacity(full.len());
    let mut path = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            path.push(c);
        } else {
            label.push_str(last_segment(&path));
            path.clear();
            label.push(c);
        }
    }
    label.push_str(last_segment(&path));

    label
}

/// Converts `value` into `T` using `T`'s [`TryFrom`] implementation.
pub fn convert<T, U>(value: U) -> Result<T, ConvertError>
where
    T: TryFrom<U>,
    T::Error: fmt::Display,
{
    T::try_from(value).map_err(|err| ConvertError::Incompatible {
        from: type_label::<U>(),
        to: type_label::<T>(),
        reason: err.to_string(),
    })
}

/// Parses `input` into `T`. Surrounding whitespace is ignored.
pub fn parse<T>(input: &str) -> Result<T, ConvertError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    input.trim().parse::<T>().map_err(|err| ConvertError::Parse {
        input: input.to_string(),
        to: type_label::<T>(),
        reason: err.to_string(),
    })
}

/// Converts an untyped JSON value into `T`.
///
/// Direct deserialization is tried first. If that fails, strings are
/// re-read with JSON grammar (`"42"` becomes `42`, but `"0042"` and `"+5"`
/// are rejected) and numbers or booleans are offered as their text (`42`
/// becomes `"42"`). Fractional numbers are never rounded into integers.
/// Use [`convert_value_or_parse`] to read strings with `T`'s own
/// [`FromStr`] rules instead.
pub fn convert_value<T: DeserializeOwned>(value: Value) -> Result<T, ConvertError> {
    let direct_error = match serde_json::from_value::<T>(value.clone()) {
        Ok(converted) => return Ok(converted),
        Err(err) => err,
    };

    debug!(
        from = value_kind(&value),
        to = %type_label::<T>(),
        error = %direct_error,
        "Direct conversion failed, retrying through textual form"
    );

    let fallback = match &value {
        Value::String(text) => serde_json::from_str::<T>(text.trim()).ok(),
        Value::Number(_) | Value::Bool(_) => {
            serde_json::from_value::<T>(Value::String(value.to_string())).ok()
        }
        _ => None,
    };

    fallback.ok_or_else(|| ConvertError::Incompatible {
        from: value_kind(&value).to_string(),
        to: type_label::<T>(),
        reason: direct_error.to_string(),
    })
}

/// Converts an untyped JSON value into `T`, parsing strings with [`FromStr`].
///
/// A string that deserializes directly (a `String` target, a one-character
/// `char`) is returned untouched. Any other string goes through [`parse`],
/// so `"0042"` and `"+5"` become integers. Non-string values follow
/// [`convert_value`].
pub fn convert_value_or_parse<T>(value: Value) -> Result<T, ConvertError>
where
    T: DeserializeOwned + FromStr,
    T::Err: fmt::Display,
{
    match value {
        Value::String(text) => match serde_json::from_value::<T>(Value::String(text.clone())) {
            Ok(converted) => Ok(converted),
            Err(_) => parse::<T>(&text),
        },
        other => convert_value::<T>(other),
    }
}

/// Returns the JSON kind of a value, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Named primitive types a value can be converted into at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetType {
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// Boolean.
    Bool,
    /// Single character.
    Char,
    /// UTF-8 string.
    String,
}

impl TargetType {
    /// Converts `value` into this type and renders the result as text.
    pub fn convert(self, value: Value) -> Result<String, ConvertError> {
        match self {
            TargetType::I8 => render::<i8>(value),
            TargetType::I16 => render::<i16>(value),
            TargetType::I32 => render::<i32>(value),
            TargetType::I64 => render::<i64>(value),
            TargetType::U8 => render::<u8>(value),
            TargetType::U16 => render::<u16>(value),
            TargetType::U32 => render::<u32>(value),
            TargetType::U64 => render::<u64>(value),
            TargetType::F32 => render_float::<f32>(value),
            TargetType::F64 => render_float::<f64>(value),
            TargetType::Bool => render::<bool>(value),
            TargetType::Char => render::<char>(value),
            TargetType::String => render::<String>(value),
        }
    }
}

fn render<T>(value: Value) -> Result<String, ConvertError>
where
    T: DeserializeOwned + FromStr + ToString,
    T::Err: fmt::Display,
{
    convert_value_or_parse::<T>(value).map(|converted| converted.to_string())
}

fn render_float<T>(value: Value) -> Result<String, ConvertError>
where
    T: DeserializeOwned + FromStr + ToString + Into<f64> + Copy,
    T::Err: fmt::Display,
{
    let from = value_kind(&value);
    let names_infinity = matches!(&value, Value::String(text) if is_infinity_literal(text));

    let converted = convert_value_or_parse::<T>(value)?;
    let magnitude: f64 = converted.into();
    if magnitude.is_infinite() && !names_infinity {
        return Err(ConvertError::Incompatible {
            from: from.to_string(),
            to: type_label::<T>(),
            reason: "value is out of range".to_string(),
        });
    }

    Ok(converted.to_string())
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.trim().trim_start_matches(|c: char| c == '+' || c == '-');
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl FromStr for TargetType {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <TargetType as ValueEnum>::from_str(s, true)
            .map_err(|_| ConvertError::UnsupportedTarget(s.to_string()))
    }
}
