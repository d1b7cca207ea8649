/// Italic emphasis, `_like this_`.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "_";
}

/// Strong emphasis, `**like this**`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}
