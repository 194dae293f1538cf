use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::frequency::FrequencyTable;

/// Index of a node inside a [`HuffmanTree`] arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf {
        ch: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Huffman tree stored as an arena: leaves first, in character order, then
/// internal nodes in the order they were merged. The root is always the last node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
}

// Priority queue entry. `BinaryHeap` is a max-heap, so `Ord` is reversed:
// the greatest entry is the lightest node, merged nodes win weight ties
// against leaves, and the earliest created node wins any remaining tie.
#[derive(Debug, PartialEq, Eq)]
struct Pending {
    weight: u64,
    leaf: bool,
    id: NodeId,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.leaf, other.id).cmp(&(self.weight, self.leaf, self.id))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two lightest nodes.
    ///
    /// Returns `None` for an empty table. A single-entry table yields a lone
    /// leaf with no merge step. The first node popped becomes the left child.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        if frequencies.is_empty() {
            return None;
        }

        let mut nodes = Vec::with_capacity(2 * frequencies.len() - 1);
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        for (ch, weight) in frequencies.iter() {
            heap.push(Pending {
                weight,
                leaf: true,
                id: nodes.len(),
            });
            nodes.push(Node::Leaf { ch, weight });
        }

        while let (Some(left), Some(right)) = (heap.pop(), heap.pop()) {
            // saturates instead of wrapping on tables whose total exceeds u64
            let weight = left.weight.saturating_add(right.weight);
            heap.push(Pending {
                weight,
                leaf: false,
                id: nodes.len(),
            });
            nodes.push(Node::Internal {
                weight,
                left: left.id,
                right: right.id,
            });
        }

        Some(HuffmanTree { nodes })
    }

    pub fn root(&self) -> NodeId {
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// True when the text had a single distinct character.
    pub fn is_single_leaf(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }

    /// Follow one bit down from `id`: `false` goes left, `true` goes right.
    /// Returns `None` when `id` is a leaf.
    pub fn child(&self, id: NodeId, bit: bool) -> Option<NodeId> {
        match self.nodes[id] {
            Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
            Node::Leaf { .. } => None,
        }
    }
}
