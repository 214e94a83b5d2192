use std::collections::HashMap;

use rhuff::{CodeTable, Header, HuffmanTree};

/// Rebuilds the text from codes joined without separator, by prefix scan.
pub fn decode_concatenated(bits: &str, codes: &CodeTable) -> String {
    let reverse: HashMap<&str, char> = codes
        .iter()
        .map(|(symbol, code)| (code.as_str(), *symbol))
        .collect();

    let mut decoded = String::new();
    let mut start = 0;
    for end in 1..=bits.len() {
        if let Some(symbol) = reverse.get(&bits[start..end]) {
            decoded.push(*symbol);
            start = end;
        }
    }
    assert_eq!(start, bits.len(), "trailing bits do not form a code");
    decoded
}

/// Rebuilds the text from the packed format.
pub fn decode_packed(bytes: &[u8]) -> String {
    let mut reader = bytes;
    let header = Header::read(&mut reader).unwrap();
    let Some(tree) = HuffmanTree::create(&header.counts) else {
        assert_eq!(header.bit_len, 0);
        return String::new();
    };

    let bits = (0..header.bit_len).map(|i| (reader[i / 8] >> (i % 8)) & 0x01);
    let mut decoded = String::new();
    let mut current = &tree;
    for bit in bits {
        if let HuffmanTree::Node(_, left, right) = current {
            current = if bit == 0 { left } else { right };
        }
        if let HuffmanTree::Leaf(_, symbol) = current {
            decoded.push(*symbol);
            current = &tree;
        }
    }
    decoded
}
