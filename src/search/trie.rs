//! Prefix tree for autocomplete over a field's vocabulary.
//!
//! Nodes live in a single arena (`Vec<Node>`) and refer to their children by
//! index. Each node can mark the end of a whole inserted string and can carry
//! "parent" strings: longer phrases that contain the word ending at this node.
//! A completion for `"pi"` therefore surfaces `"apple pie"` once `"pie"` has been
//! registered as a sub-token of that phrase.

use super::tokenize::{first_word, split_words};

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Default, Clone)]
struct Node {
    /// Outgoing edges in insertion order; traversal follows this order.
    children: Vec<(char, NodeId)>,
    /// A whole inserted string ends here.
    complete: bool,
    /// Phrases for which the word ending here is a constituent.
    parents: Vec<String>,
}

/// Case-insensitive prefix tree.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie holding each of `words` as a whole string.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word);
        }
        trie
    }

    /// Inserts `word` (lowercased) as a whole string. Empty input is ignored.
    pub fn insert(&mut self, word: &str) {
        let word = word.to_lowercase();
        if word.is_empty() {
            return;
        }
        let node = self.descend_or_create(&word);
        self.nodes[node].complete = true;
    }

    /// Registers the significant words of `word` as belonging to `parent`.
    ///
    /// Words are split like indexed free text. The leading word is skipped when
    /// `parent` itself starts with it, since inserting `parent` verbatim already
    /// makes it reachable by that prefix. Short words dropped by the split still
    /// count as the start of `parent`, so in "de la crème" the word "crème" is
    /// registered. A word equal to the whole
    /// parent is skipped too. The sub-word nodes get `parent` in their parent
    /// list; they are not marked complete.
    pub fn insert_as_subtoken_of(&mut self, word: &str, parent: &str) {
        let parent = parent.to_lowercase();
        let head = first_word(&parent);

        for (position, token) in split_words(word).into_iter().enumerate() {
            if token == parent || (position == 0 && head.as_deref() == Some(token.as_str())) {
                continue;
            }
            let node = self.descend_or_create(&token);
            let parents = &mut self.nodes[node].parents;
            if !parents.contains(&parent) {
                parents.push(parent.clone());
            }
        }
    }

    /// Inserts `phrase` verbatim and registers its other words as sub-tokens of it.
    pub fn insert_phrase(&mut self, phrase: &str) {
        self.insert(phrase);
        self.insert_as_subtoken_of(phrase, phrase);
    }

    /// Returns every string reachable under `prefix`, depth first.
    ///
    /// Whole strings are reported by their path; parent phrases are reported
    /// as stored. Results are neither sorted nor deduplicated. An unknown
    /// prefix yields an empty list, and an empty prefix yields everything.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let mut node = ROOT;
        for c in prefix.chars() {
            match self.child(node, c) {
                Some(next) => node = next,
                None => return Vec::new(),
            }
        }

        let mut results = Vec::new();
        let mut path = prefix;
        self.collect(node, &mut path, &mut results);
        results
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn collect(&self, node: NodeId, path: &mut String, results: &mut Vec<String>) {
        let current = &self.nodes[node];
        if current.complete {
            results.push(path.clone());
        }
        results.extend(current.parents.iter().cloned());

        for &(c, child) in &current.children {
            path.push(c);
            self.collect(child, path, results);
            path.pop();
        }
    }

    fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes[node]
            .children
            .iter()
            .find(|(edge, _)| *edge == c)
            .map(|&(_, child)| child)
    }

    fn descend_or_create(&mut self, word: &str) -> NodeId {
        let mut node = ROOT;
        for c in word.chars() {
            node = match self.child(node, c) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.push((c, next));
                    next
                }
            };
        }
        node
    }
}
