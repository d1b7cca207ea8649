/// Unordered list block type: every non-blank line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn matches(block: &str) -> bool {
        non_blank_lines(block).all(|line| line.starts_with(Self::MARKER))
    }

    /// The text of each item, in order. Blank lines are skipped.
    pub fn items(block: &str) -> Vec<&str> {
        non_blank_lines(block)
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
            .collect()
    }
}

/// Ordered list block type: line `i` starts with `"{i + 1}. "`.
///
/// Numbering must start at 1 and increase by exactly one per line; any gap
/// or repeat makes the block something else.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    fn marker(index: usize) -> String {
        format!("{}{}", index + 1, Self::SEPARATOR)
    }

    pub fn matches(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i)))
    }

    /// The text of each item with its number stripped, in order.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .lines()
            .enumerate()
            .map(|(i, line)| line.strip_prefix(&Self::marker(i)).unwrap_or(line))
            .collect()
    }
}

fn non_blank_lines(block: &str) -> impl Iterator<Item = &str> {
    block.lines().filter(|line| !line.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn unordered_items() {
        let block = "- This is a list\n- oh look, another item";
        assert!(UnorderedList::matches(block));
        assert_eq!(
            UnorderedList::items(block),
            vec!["This is a list", "oh look, another item"]
        );
    }

    #[test]
    fn unordered_requires_space_after_dash() {
        assert!(!UnorderedList::matches("- a\n-b"));
    }

    #[rstest]
    #[case("1. a\n2. b", true)]
    #[case("1. a\n2. b\n3. c\n4. d\n5. e\n6. f\n7. g\n8. h\n9. i\n10. j", true)]
    #[case("1. a\n2. b\n4. c", false)]
    #[case("2. a\n3. b", false)]
    #[case("1. a\n1. b", false)]
    #[case("1. This is a list\n2 .oh look, another item", false)]
    fn ordered_sequence(#[case] block: &str, #[case] expected: bool) {
        assert_eq!(OrderedList::matches(block), expected);
    }

    #[test]
    fn ordered_items_strip_multi_digit_numbers() {
        let block = "1. a\n2. b\n3. c\n4. d\n5. e\n6. f\n7. g\n8. h\n9. i\n10. tenth";
        let items = OrderedList::items(block);
        assert_eq!(items.len(), 10);
        assert_eq!(items[9], "tenth");
    }
}
