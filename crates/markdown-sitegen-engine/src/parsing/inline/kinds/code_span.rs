/// Code span inline type with owned delimiter constant.
///
/// The code pass runs after the emphasis passes, so emphasis delimiters
/// inside backticks have already been consumed by then.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const DELIMITER: &'static str = "`";
}
