//! Output sanitization for user-supplied text.

/// Neutralize embedded markup before text is returned to a client.
///
/// `<`, `>` and `&` are HTML-escaped, so stored markup is rendered as text
/// rather than interpreted by the browser.
///
/// ```
/// use noteful_core::sanitize::sanitize;
/// assert_eq!(
///     sanitize("<script>alert(1)</script>"),
///     "&lt;script&gt;alert(1)&lt;/script&gt;"
/// );
/// assert_eq!(sanitize("Groceries"), "Groceries");
/// ```
pub fn sanitize(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}
