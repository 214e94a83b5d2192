use itertools::Itertools;

/// Counts every symbol of `text` and orders the result ascending by count,
/// ties broken by the symbol value.
pub fn count_frequencies(text: &str) -> Vec<(char, usize)> {
    text.chars()
        .counts()
        .into_iter()
        .sorted_by_key(|&(symbol, count)| (count, symbol))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::count_frequencies;

    #[test]
    fn test_count_frequencies() {
        assert_eq!(count_frequencies("aa"), vec![('a', 2)]);
        assert_eq!(
            count_frequencies("hello, I'm testing"),
            vec![
                ('\'', 1),
                (',', 1),
                ('I', 1),
                ('g', 1),
                ('h', 1),
                ('i', 1),
                ('m', 1),
                ('n', 1),
                ('o', 1),
                ('s', 1),
                (' ', 2),
                ('e', 2),
                ('l', 2),
                ('t', 2),
            ]
        );
    }

    #[test]
    fn test_ties_are_ordered_by_symbol() {
        assert_eq!(
            count_frequencies("cbacba"),
            vec![('a', 2), ('b', 2), ('c', 2)]
        );
        assert_eq!(
            count_frequencies("aabbbcccc"),
            vec![('a', 2), ('b', 3), ('c', 4)]
        );
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(count_frequencies("ééa"), vec![('a', 1), ('é', 2)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(count_frequencies("").is_empty());
    }
}
