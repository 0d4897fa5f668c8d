//! Keyword vocabulary construction
//!
//! Maps free-text keywords to dense integer ids. Ids are assigned in
//! first-seen order while walking nodes in document order, so rebuilding from
//! the same document always yields the same vocabulary.

use crate::features::{classify, AttrClass};
use citeforge_common::errors::{ConvertError, Result};
use citeforge_common::graph::RawNode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Bidirectional keyword <-> id mapping plus per-node keyword id lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordVocabulary {
    forward: HashMap<String, usize>,
    reverse: Vec<String>,
    node_keywords: IndexMap<String, Vec<usize>>,
}

impl KeywordVocabulary {
    /// Scan every node's keyword list and build the vocabulary.
    ///
    /// Nodes without the keyword attribute, or with an empty list, get no
    /// per-node entry. A keyword attribute that is not a sequence of strings
    /// fails the run.
    pub fn build(nodes: &IndexMap<String, RawNode>, keyword_attribute: &str) -> Result<Self> {
        let mut vocab = Self::default();

        for (node_id, node) in nodes {
            let Some(value) = node.attributes.get(keyword_attribute) else {
                continue;
            };

            let words = match classify(node_id, keyword_attribute, value, keyword_attribute)? {
                AttrClass::Keywords(words) => words,
                _ => {
                    return Err(ConvertError::MalformedAttribute {
                        node_id: node_id.clone(),
                        attribute: keyword_attribute.to_string(),
                        expected: "a sequence of strings",
                    })
                }
            };

            for word in words {
                let id = match vocab.forward.get(&word) {
                    Some(&id) => id,
                    None => {
                        let id = vocab.reverse.len();
                        vocab.forward.insert(word.clone(), id);
                        vocab.reverse.push(word);
                        id
                    }
                };
                vocab
                    .node_keywords
                    .entry(node_id.clone())
                    .or_default()
                    .push(id);
            }
        }

        debug!(
            keywords = vocab.reverse.len(),
            nodes_with_keywords = vocab.node_keywords.len(),
            "Keyword vocabulary built"
        );

        Ok(vocab)
    }

    /// Resolve a keyword to its id
    pub fn id(&self, keyword: &str) -> Option<usize> {
        self.forward.get(keyword).copied()
    }

    /// Resolve an id back to its keyword
    pub fn keyword(&self, id: usize) -> Option<&str> {
        self.reverse.get(id).map(String::as_str)
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    /// Keyword ids for one node, in the order they appear on the node
    pub fn node_keyword_ids(&self, node_id: &str) -> Option<&[usize]> {
        self.node_keywords.get(node_id).map(Vec::as_slice)
    }

    /// Number of nodes that carry at least one keyword
    pub fn node_count(&self) -> usize {
        self.node_keywords.len()
    }
}
