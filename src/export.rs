//! Graphviz rendering of a built tree.
//!
//! Nodes are numbered in pre-order starting from the root. Each node is
//! labelled with its weight and, for leaves, the symbol; edges carry the bit
//! they add to the code.

use std::{fmt::Write as _, fs, path::Path};

use tracing::debug;

use crate::{error::HuffmanError, tree::HuffmanTree};

pub fn to_dot(tree: &HuffmanTree) -> String {
    let mut dot = String::from("digraph huffman {\n");
    let mut next_id = 0;
    add_nodes(tree, None, &mut next_id, &mut dot);
    dot.push_str("}\n");
    dot
}

pub fn write_dot(tree: &HuffmanTree, path: &Path) -> Result<(), HuffmanError> {
    fs::write(path, to_dot(tree)).map_err(|e| HuffmanError::Export {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "wrote tree export");
    Ok(())
}

fn add_nodes(
    tree: &HuffmanTree,
    parent: Option<(usize, char)>,
    next_id: &mut usize,
    dot: &mut String,
) {
    let id = *next_id;
    *next_id += 1;

    let symbol = match tree {
        HuffmanTree::Leaf(_, symbol) => escape(*symbol),
        HuffmanTree::Node(_, _, _) => String::new(),
    };
    // Writing into a String cannot fail
    let _ = writeln!(dot, "  n{} [label=\"{}\\n{}\"];", id, tree.value(), symbol);
    if let Some((parent_id, bit)) = parent {
        let _ = writeln!(dot, "  n{} -> n{} [label=\"{}\"];", parent_id, id, bit);
    }

    if let HuffmanTree::Node(_, left, right) = tree {
        add_nodes(left, Some((id, '0')), next_id, dot);
        add_nodes(right, Some((id, '1')), next_id, dot);
    }
}

fn escape(symbol: char) -> String {
    match symbol {
        '"' => String::from("\\\""),
        '\\' => String::from("\\\\"),
        '\n' => String::from("\\\\n"),
        '\r' => String::from("\\\\r"),
        '\t' => String::from("\\\\t"),
        c => c.to_string(),
    }
}
