//! Split Text WASM Module
//!
//! Splits an element's text into per-character and per-word wrapper
//! elements so animation libraries can animate each unit on its own.
//! The splitting core runs on any [`DomTree`]: the live browser DOM or an
//! in-memory [`Fragment`].

pub mod api;
pub mod classes;
pub mod error;
pub mod markup;
pub mod options;
pub mod split;
pub mod tree;

// Re-export commonly used types
pub use error::{SplitTextError, SplitTextResult};
pub use markup::{split_markup, MarkupSplit};
pub use options::{validate, RawOptions, SplitConfig, SplitType, WrapperTag};
pub use split::{split_text, split_with_config, SplitResult, Target};
pub use tree::{DomTree, Fragment, NodeId, WebTree};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only when a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Split Text WASM module initialized");
}
