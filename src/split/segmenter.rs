//! Text run segmentation into word and character units

use super::nodes::{create_unit, replace_content_of};
use crate::options::SplitConfig;
use crate::tree::DomTree;

/// One entry of an output sequence while splitting is in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<N> {
    Unit(N),
    /// Inter-word spacing, filtered out of the final outputs
    Delimiter,
}

/// Running `chars` and `words` outputs across every text run of a split
#[derive(Debug, Clone)]
pub struct Collected<N> {
    pub chars: Vec<Piece<N>>,
    pub words: Vec<Piece<N>>,
}

impl<N> Default for Collected<N> {
    fn default() -> Self {
        Self {
            chars: Vec::new(),
            words: Vec::new(),
        }
    }
}

/// Split text into word strings the way `String.prototype.split` does
///
/// The delimiter itself is dropped. Consecutive delimiters yield empty words.
/// An empty delimiter splits into single characters.
pub fn split_words(text: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return text.chars().map(String::from).collect();
    }
    text.split(delimiter).map(str::to_string).collect()
}

/// Segment one text run
///
/// Units are appended to `collected`; the returned pieces are the ones that
/// replace the text run in the tree: word units when words are requested,
/// otherwise character units, with a [`Piece::Delimiter`] between words.
pub fn segment<T: DomTree>(
    tree: &mut T,
    text: &str,
    config: &SplitConfig,
    collected: &mut Collected<T::Node>,
) -> Vec<Piece<T::Node>> {
    let whole_words = split_words(text, &config.word_delimiter);
    let splits_chars = config.splits_chars();
    let splits_words = config.splits_words();

    let mut run = Vec::new();

    for (i, whole_word) in whole_words.iter().enumerate() {
        let word_node = create_unit(tree, config.tag, whole_word, config.words_class.as_deref());

        if splits_chars {
            let char_nodes: Vec<T::Node> = whole_word
                .chars()
                .filter(|c| *c != ' ')
                .map(|c| {
                    create_unit(tree, config.tag, &c.to_string(), config.chars_class.as_deref())
                })
                .collect();

            collected.chars.extend(char_nodes.iter().cloned().map(Piece::Unit));

            if splits_words {
                replace_content_of(tree, &word_node, &char_nodes);
            } else {
                run.extend(char_nodes.into_iter().map(Piece::Unit));
            }
        }

        if splits_words {
            collected.words.push(Piece::Unit(word_node.clone()));
            run.push(Piece::Unit(word_node));
        }

        if i + 1 < whole_words.len() {
            if splits_words {
                collected.words.push(Piece::Delimiter);
            } else {
                collected.chars.push(Piece::Delimiter);
            }
            run.push(Piece::Delimiter);
        }
    }

    run
}
