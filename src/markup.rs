//! Splitting static markup
//!
//! Runs the splitter over a parsed [`Fragment`] and reports the rebuilt
//! markup together with the text of every produced unit. Useful for
//! pre-rendering split content and for environments without a live DOM.

use crate::error::SplitTextResult;
use crate::options::RawOptions;
use crate::split::{split_text, Target};
use crate::tree::{DomTree, Fragment};
use serde::{Deserialize, Serialize};

/// Outcome of splitting a markup string
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MarkupSplit {
    /// The whole fragment after splitting
    pub markup: String,

    /// Text of each character unit, in document order
    pub chars: Vec<String>,

    /// Text of each word unit, in document order
    pub words: Vec<String>,
}

/// Split `markup`, either the element matching `selector` or the whole fragment
pub fn split_markup(
    markup: &str,
    selector: Option<&str>,
    options: &RawOptions,
) -> SplitTextResult<MarkupSplit> {
    let mut fragment = Fragment::parse(markup);

    let target = match selector {
        Some(selector) => Target::Selector(selector),
        None => Target::Element(fragment.root()),
    };

    let result = split_text(&mut fragment, target, options)?;

    Ok(MarkupSplit {
        markup: fragment.to_markup(),
        chars: result.chars().iter().map(|id| fragment.text_content(id)).collect(),
        words: result.words().iter().map(|id| fragment.text_content(id)).collect(),
    })
}
