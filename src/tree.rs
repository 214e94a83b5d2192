use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::trace;

#[derive(Debug, PartialEq, Eq)]
pub enum HuffmanTree {
    Node(usize, Box<HuffmanTree>, Box<HuffmanTree>),
    Leaf(usize, char),
}

impl HuffmanTree {
    /// Builds the tree for frequencies ordered as `count_frequencies` returns them.
    ///
    /// Equal weights are removed from the heap in insertion order: leaves in the
    /// order given, merged nodes after everything already present. The first of
    /// the two removed nodes becomes the left child. Returns `None` when there
    /// is nothing to encode.
    pub fn create(counts: &[(char, usize)]) -> Option<HuffmanTree> {
        let mut heap: BinaryHeap<HeapEntry> = counts
            .iter()
            .enumerate()
            .map(|(seq, &(symbol, count))| HeapEntry {
                seq,
                tree: HuffmanTree::Leaf(count, symbol),
            })
            .collect();
        let mut next_seq = counts.len();

        while heap.len() > 1 {
            let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
                break;
            };
            let weight = left.tree.value() + right.tree.value();
            trace!(
                left = left.tree.value(),
                right = right.tree.value(),
                weight,
                "merging nodes"
            );
            heap.push(HeapEntry {
                seq: next_seq,
                tree: HuffmanTree::Node(weight, Box::new(left.tree), Box::new(right.tree)),
            });
            next_seq += 1;
        }
        heap.pop().map(|entry| entry.tree)
    }

    pub fn value(&self) -> usize {
        match self {
            HuffmanTree::Leaf(count, _) => *count,
            HuffmanTree::Node(count, _, _) => *count,
        }
    }
}

/// Min-heap slot: lowest weight first, then lowest insertion sequence.
struct HeapEntry {
    seq: usize,
    tree: HuffmanTree,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both keys are reversed
        other
            .tree
            .value()
            .cmp(&self.tree.value())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

#[cfg(test)]
mod tests {
    use super::HuffmanTree::{self, Leaf, Node};
    use crate::count_frequencies;

    fn create(text: &str) -> Option<HuffmanTree> {
        HuffmanTree::create(&count_frequencies(text))
    }

    #[test]
    fn test_create_huffman_tree() {
        assert_eq!(
            create("abacba"),
            Some(Node(
                6,
                Box::new(Leaf(3, 'a')),
                Box::new(Node(3, Box::new(Leaf(1, 'c')), Box::new(Leaf(2, 'b'))))
            ))
        );
    }

    #[test]
    fn test_lower_weight_goes_left() {
        assert_eq!(
            create("aabbbcccc"),
            Some(Node(
                9,
                Box::new(Leaf(4, 'c')),
                Box::new(Node(5, Box::new(Leaf(2, 'a')), Box::new(Leaf(3, 'b'))))
            ))
        );
    }

    #[test]
    fn test_equal_weights_keep_insertion_order() {
        assert_eq!(
            create("ba"),
            Some(Node(2, Box::new(Leaf(1, 'a')), Box::new(Leaf(1, 'b'))))
        );

        // The merged (a,b) node ties with c and d but was inserted after them
        assert_eq!(
            create("abccdd"),
            Some(Node(
                6,
                Box::new(Node(2, Box::new(Leaf(1, 'a')), Box::new(Leaf(1, 'b')))),
                Box::new(Node(4, Box::new(Leaf(2, 'c')), Box::new(Leaf(2, 'd'))))
            ))
        );
    }

    #[test]
    fn test_single_symbol_is_a_leaf() {
        assert_eq!(create("aaaa"), Some(Leaf(4, 'a')));
    }

    #[test]
    fn test_empty_input_has_no_tree() {
        assert_eq!(create(""), None);
    }
}
