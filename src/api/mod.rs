//! Split Text WASM API
//!
//! This module provides the JavaScript-facing API for splitting text.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, options conversion and error mapping
//! - `core`: the `SplitText` class and the `splitMarkup` function

pub mod helpers;
pub mod core;

pub use self::core::{split_markup, SplitText};
