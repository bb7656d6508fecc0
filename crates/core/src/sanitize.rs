//! Output sanitization for user-supplied text.
//!
//! Every text field is passed through [`sanitize`] when a record is shaped
//! into its JSON view. Nothing is sanitized on write; the store keeps the
//! text exactly as the client sent it.

/// Neutralize embedded markup by escaping angle brackets.
///
/// `<` becomes `&lt;` and `>` becomes `&gt;`; every other character is
/// preserved, so plain text passes through unchanged. The output never
/// contains an angle bracket, which makes the function idempotent.
pub fn sanitize(text: &str) -> String {
    if !text.contains(['<', '>']) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
