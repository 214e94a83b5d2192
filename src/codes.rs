use std::collections::{btree_map, BTreeMap};

use serde_derive::Serialize;

use crate::tree::HuffmanTree;

/// Symbol to bit-string mapping derived from the leaf paths of a tree.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Walks the tree depth first, '0' to the left and '1' to the right.
    /// A tree made of a single leaf gives that symbol the code "0".
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        match tree {
            HuffmanTree::Leaf(_, symbol) => {
                codes.insert(*symbol, String::from("0"));
            }
            HuffmanTree::Node(_, _, _) => collect_codes(tree, &mut String::new(), &mut codes),
        }
        Self { codes }
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, char, String> {
        self.codes.iter()
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = (&'a char, &'a String);
    type IntoIter = btree_map::Iter<'a, char, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn collect_codes(tree: &HuffmanTree, path: &mut String, codes: &mut BTreeMap<char, String>) {
    match tree {
        HuffmanTree::Leaf(_, symbol) => {
            codes.insert(*symbol, path.clone());
        }
        HuffmanTree::Node(_, left, right) => {
            path.push('0');
            collect_codes(left, path, codes);
            path.pop();

            path.push('1');
            collect_codes(right, path, codes);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CodeTable;
    use crate::{count_frequencies, tree::HuffmanTree};

    fn table(text: &str) -> CodeTable {
        HuffmanTree::create(&count_frequencies(text))
            .map(|tree| CodeTable::from_tree(&tree))
            .unwrap_or_default()
    }

    #[test]
    fn test_codes_follow_tree_paths() {
        let codes = table("abacba");
        assert_eq!(codes.get('a'), Some("0"));
        assert_eq!(codes.get('c'), Some("10"));
        assert_eq!(codes.get('b'), Some("11"));
        assert_eq!(codes.get('z'), None);
    }

    #[test]
    fn test_shortest_code_for_most_frequent() {
        let codes = table("aabbbcccc");
        assert_eq!(codes.get('c'), Some("0"));
        assert_eq!(codes.get('a'), Some("10"));
        assert_eq!(codes.get('b'), Some("11"));
    }

    #[test]
    fn test_single_leaf_gets_zero() {
        let codes = table("aaaa");
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get('a'), Some("0"));
    }

    #[test]
    fn test_tables_do_not_leak_between_calls() {
        let first = table("xyz");
        let second = table("ab");
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 2);
        assert_eq!(second.get('x'), None);
    }

    #[test]
    fn test_empty_table() {
        assert!(table("").is_empty());
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let json = serde_json::to_string(&table("ab")).unwrap();
        assert_eq!(json, r#"{"a":"0","b":"1"}"#);
    }
}
