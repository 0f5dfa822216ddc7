use std::borrow::Cow;

/// Escapes text for insertion between XML tags.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their predefined entities.
/// Returns `Cow::Borrowed` when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use feedwright::util::escape_text;
///
/// assert_eq!(escape_text("<p>summary</p>"), "&lt;p&gt;summary&lt;/p&gt;");
/// assert_eq!(escape_text("plain"), "plain");
/// ```
pub fn escape_text(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}
