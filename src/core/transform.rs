//! Content transformation.
//!
//! A fixed list of literal substitutions is applied in order, each rule
//! once across the whole text, then a header carrying the resulting
//! character count is prepended.
//!
//! Substitution is literal, left to right and non-overlapping, exactly
//! like [`str::replace`]. A rule is never re-applied to its own output, so
//! a run of four spaces becomes two, not one.

/// A literal substring substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    /// Text to search for.
    pub pattern: &'static str,
    /// Text to put in its place.
    pub replacement: &'static str,
}

impl Replacement {
    /// Creates a replacement rule.
    #[must_use]
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern,
            replacement,
        }
    }

    /// Applies the rule to every non-overlapping occurrence in `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        text.replace(self.pattern, self.replacement)
    }
}

/// Substitutions applied by [`transform`], in order.
pub const REPLACEMENTS: [Replacement; 2] = [
    // double space
    Replacement::new("  ", " "),
    // triple newline
    Replacement::new("\n\n\n", "\n\n"),
];

/// Number of characters (Unicode scalar values) in `text`.
///
/// # Examples
///
/// ```
/// use file_processor::core::char_count;
///
/// assert_eq!(char_count("héllo"), 5);
/// ```
#[must_use]
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Applies [`REPLACEMENTS`] in order without adding the header.
#[must_use]
pub fn apply_replacements(content: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(content.to_string(), |text, rule| rule.apply(&text))
}

/// Builds the header line for a body of `chars` characters.
///
/// The header is followed by a blank line.
#[must_use]
pub fn header(chars: usize) -> String {
    format!("/* Processed by File Processor - {chars} characters */\n\n")
}

/// Transforms file content into its processed form.
///
/// # Examples
///
/// ```
/// use file_processor::core::transform;
///
/// let out = transform("x  y\n\n\nz");
/// assert_eq!(out, "/* Processed by File Processor - 6 characters */\n\nx y\n\nz");
/// ```
#[must_use]
pub fn transform(content: &str) -> String {
    let body = apply_replacements(content);
    let mut out = header(char_count(&body));
    out.push_str(&body);
    out
}
