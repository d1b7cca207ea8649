use super::{
    kinds::{CodeBlock, Heading, OrderedList, Quote, UnorderedList},
    types::{Block, BlockType},
};

/// Classifies a single block. The first matching rule wins:
/// heading, code, quote, unordered list, ordered list, paragraph.
pub fn classify(block: &str) -> BlockType {
    if let Some((level, _)) = Heading::parse(block) {
        return BlockType::Heading { level };
    }
    if CodeBlock::matches(block) {
        return BlockType::Code;
    }
    if Quote::matches(block) {
        return BlockType::Quote;
    }
    if UnorderedList::matches(block) {
        return BlockType::UnorderedList;
    }
    if OrderedList::matches(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

impl<'a> Block<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            block_type: classify(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("This is a **bolded** paragraph", BlockType::Paragraph)]
    #[case("- This is a list\n- oh look, another item", BlockType::UnorderedList)]
    #[case("1. This is a list\n2. oh look, another item", BlockType::OrderedList)]
    #[case("1. a\n2. b\n4. c", BlockType::Paragraph)]
    #[case(
        "```\nlet x = 1\nlet y = ref 0\n(* ocaml is kinda cool *)\n```",
        BlockType::Code
    )]
    #[case("``````", BlockType::Code)]
    #[case(
        "> this is a quote\n> that has multiple lines\n> which are all part of a single quote block",
        BlockType::Quote
    )]
    #[case("# Title", BlockType::Heading { level: 1 })]
    #[case("#### h4", BlockType::Heading { level: 4 })]
    #[case("###### h6", BlockType::Heading { level: 6 })]
    #[case("####### nope", BlockType::Paragraph)]
    fn classify_block(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn heading_wins_over_other_rules() {
        assert_eq!(
            classify("# ```\n```"),
            BlockType::Heading { level: 1 }
        );
    }

    #[test]
    fn code_wins_over_quote() {
        assert_eq!(classify("```\n> quoted\n```"), BlockType::Code);
    }

    #[test]
    fn block_carries_its_type() {
        let block = Block::new("> quote");
        assert_eq!(block.text, "> quote");
        assert_eq!(block.block_type, BlockType::Quote);
    }
}
