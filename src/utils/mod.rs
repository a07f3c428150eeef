//! Utility functions and helpers.

pub mod convert;
pub mod general;
pub mod settings;

// Re-export commonly used items from general
pub use convert::{
    convert, convert_value, convert_value_or_parse, parse, type_label, ConvertError, TargetType,
};
pub use general::*;
pub use settings::{Defaults, Settings};
