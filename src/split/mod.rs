//! Text splitting
//!
//! [`split_text`] is the entry point: it resolves the target, validates the
//! options, rebuilds the target's subtree with one wrapper per word and/or
//! character, and returns the produced units as an immutable [`SplitResult`].
//!
//! # Module Structure
//!
//! - `nodes`: unit construction and content replacement
//! - `segmenter`: splitting one text run into units
//! - `walker`: recursive reconstruction of a subtree

pub mod nodes;
pub mod segmenter;
pub mod walker;

pub use nodes::{create_unit, replace_content_of};
pub use segmenter::{segment, split_words, Collected, Piece};
pub use walker::walk;

use crate::error::{SplitTextError, SplitTextResult};
use crate::options::{validate, RawOptions, SplitConfig};
use crate::tree::DomTree;

/// Element to split
#[derive(Debug, Clone)]
pub enum Target<'a, N> {
    /// A node handle of the tree backend
    Element(N),
    /// A selector resolved once against the tree
    Selector(&'a str),
}

/// Units produced by a split, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult<N> {
    chars: Vec<N>,
    words: Vec<N>,
}

impl<N> SplitResult<N> {
    fn from_collected(collected: Collected<N>) -> Self {
        Self {
            chars: units(collected.chars),
            words: units(collected.words),
        }
    }

    pub fn chars(&self) -> &[N] {
        &self.chars
    }

    pub fn words(&self) -> &[N] {
        &self.words
    }

    pub fn into_parts(self) -> (Vec<N>, Vec<N>) {
        (self.chars, self.words)
    }
}

fn units<N>(pieces: Vec<Piece<N>>) -> Vec<N> {
    pieces
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Unit(node) => Some(node),
            Piece::Delimiter => None,
        })
        .collect()
}

/// Resolve a target to a node of the tree
pub fn resolve_target<T: DomTree>(tree: &T, target: Target<'_, T::Node>) -> SplitTextResult<T::Node> {
    match target {
        Target::Element(node) => Ok(node),
        Target::Selector(selector) => tree
            .query_selector(selector)
            .ok_or(SplitTextError::TargetNotFound),
    }
}

/// Split the target's text into word and/or character units
///
/// Fails before touching the tree when the target cannot be resolved or the
/// options are invalid.
pub fn split_text<T: DomTree>(
    tree: &mut T,
    target: Target<'_, T::Node>,
    options: &RawOptions,
) -> SplitTextResult<SplitResult<T::Node>> {
    let root = resolve_target(tree, target)?;
    let config = validate(options)?;
    Ok(split_with_config(tree, &root, &config))
}

/// Split an already-resolved root with an already-validated configuration
pub fn split_with_config<T: DomTree>(
    tree: &mut T,
    root: &T::Node,
    config: &SplitConfig,
) -> SplitResult<T::Node> {
    let mut collected = Collected::default();

    let elements = walk(tree, root, config, &mut collected);
    replace_content_of(tree, root, &elements);

    let result = SplitResult::from_collected(collected);
    log::debug!(
        "Split into {} chars and {} words",
        result.chars.len(),
        result.words.len()
    );
    result
}
