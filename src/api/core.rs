//! JavaScript-facing split API
//!
//! ```javascript
//! import init, { SplitText } from 'split-text-wasm';
//!
//! await init();
//! const { chars } = new SplitText('#title');
//! gsap.fromTo(chars, { yPercent: 110 }, { yPercent: 0, stagger: 0.02 });
//! ```

use super::helpers::{options_from_js, serialize, split_error};
use crate::error::SplitTextError;
use crate::markup::split_markup as split_static_markup;
use crate::split::{resolve_target, split_text, Target};
use crate::tree::WebTree;
use crate::{wasm_info, wasm_log};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Node;

/// The units produced by splitting one element
#[wasm_bindgen]
pub struct SplitText {
    chars: Vec<Node>,
    words: Vec<Node>,
}

#[wasm_bindgen]
impl SplitText {
    /// Split `target` (an element or a selector string) with optional `options`
    ///
    /// Throws the validation message when the target is missing or the
    /// options are invalid; the document is left untouched in that case.
    #[wasm_bindgen(constructor)]
    pub fn new(target: JsValue, options: JsValue) -> Result<SplitText, JsValue> {
        wasm_info!("SplitText called");

        let mut tree = WebTree::from_window()
            .ok_or_else(|| JsValue::from_str("No document available"))?;
        let root = resolve_js_target(&tree, target).map_err(split_error)?;
        let raw = options_from_js(options).map_err(split_error)?;

        let result = split_text(&mut tree, Target::Element(root), &raw).map_err(split_error)?;

        let (chars, words) = result.into_parts();
        wasm_info!("  Split into {} chars, {} words", chars.len(), words.len());

        Ok(SplitText { chars, words })
    }

    /// Character units in document order
    #[wasm_bindgen(getter)]
    pub fn chars(&self) -> js_sys::Array {
        self.chars.iter().collect()
    }

    /// Word units in document order
    #[wasm_bindgen(getter)]
    pub fn words(&self) -> js_sys::Array {
        self.words.iter().collect()
    }
}

/// Resolve a JavaScript target: a selector string or a DOM node
fn resolve_js_target(tree: &WebTree, target: JsValue) -> Result<Node, SplitTextError> {
    if let Some(selector) = target.as_string() {
        wasm_log!("  Resolving selector '{}'", selector);
        return resolve_target(tree, Target::Selector(&selector));
    }

    target
        .dyn_into::<Node>()
        .map_err(|_| SplitTextError::TargetNotFound)
}

/// Split a static markup string
///
/// # Parameters
/// - `markup`: HTML fragment, parsed as a browser would
/// - `selector`: optional selector of the element to split; the whole
///   fragment when omitted
/// - `options`: same options object as `new SplitText`
///
/// # Returns
/// `{ markup, chars, words }` with the rebuilt markup and each unit's text
#[wasm_bindgen(js_name = splitMarkup)]
pub fn split_markup(
    markup: &str,
    selector: Option<String>,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    wasm_info!("splitMarkup called: {} bytes", markup.len());

    let raw = options_from_js(options).map_err(split_error)?;
    let split = split_static_markup(markup, selector.as_deref(), &raw).map_err(split_error)?;

    serialize(&split, "Serialization error")
}
