//! Placeholder substitution over fixed script scaffolds.
//!
//! A scaffold is opaque text carrying a small declared set of placeholder
//! tokens. Rendering replaces every occurrence of each declared token with
//! caller-supplied text and leaves every other byte untouched. Substituted
//! content is embedded verbatim; callers pre-format values into
//! scaffold-legal text.

use crate::error::ScriptError;

/// Replaces each declared placeholder in `scaffold` with its value.
///
/// Placeholder presence is validated: a declared token that does not occur
/// in the scaffold is treated as scaffold/generator drift and fails hard
/// rather than silently dropping the value.
///
/// # Errors
///
/// Returns [`ScriptError::Template`] naming the first missing placeholder.
pub fn render(
    scaffold: &str,
    substitutions: &[(&str, String)],
) -> Result<String, ScriptError> {
    let mut output = scaffold.to_string();
    for (placeholder, value) in substitutions {
        if !output.contains(placeholder) {
            return Err(ScriptError::Template {
                placeholder: (*placeholder).to_string(),
            });
        }
        output = output.replace(placeholder, value);
    }
    Ok(output)
}
