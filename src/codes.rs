use std::collections::BTreeMap;
use std::fmt;

use crate::tree::{HuffmanTree, Node, NodeId};

/// A variable-length binary code, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True when `self` is a proper prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len() < other.len() && other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Character to code mapping derived from a [`HuffmanTree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Code>,
}

impl CodeTable {
    /// Walk the tree depth first, appending `0` on the way left and `1` on the way right.
    ///
    /// A tree that is a single leaf gets the code `"0"`; no tree gives an empty table.
    pub fn generate(tree: Option<&HuffmanTree>) -> Self {
        let mut codes = BTreeMap::new();
        if let Some(tree) = tree {
            if let Node::Leaf { ch, .. } = *tree.node(tree.root()) {
                codes.insert(ch, Code { bits: vec![false] });
            } else {
                let mut prefix = Vec::new();
                assign(tree, tree.root(), &mut prefix, &mut codes);
            }
        }
        CodeTable { codes }
    }

    pub fn get(&self, ch: char) -> Option<&Code> {
        self.codes.get(&ch)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> + '_ {
        self.codes.iter().map(|(&ch, code)| (ch, code))
    }

    /// True when no code is a proper prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }
}

fn assign(tree: &HuffmanTree, id: NodeId, prefix: &mut Vec<bool>, codes: &mut BTreeMap<char, Code>) {
    match *tree.node(id) {
        Node::Leaf { ch, .. } => {
            codes.insert(ch, Code { bits: prefix.clone() });
        }
        Node::Internal { left, right, .. } => {
            prefix.push(false);
            assign(tree, left, prefix, codes);
            prefix.pop();

            prefix.push(true);
            assign(tree, right, prefix, codes);
            prefix.pop();
        }
    }
}
