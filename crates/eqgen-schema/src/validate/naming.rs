use crate::{MAX_IDENT_LEN, validate::reserved::is_reserved_word};

/// Ensure an identifier is non-empty, within length, well-formed and not a
/// reserved keyword.
pub fn validate_ident(ident: &str) -> Result<(), String> {
    if ident.is_empty() {
        return Err("ident is empty".to_string());
    }
    if ident.len() > MAX_IDENT_LEN {
        return Err(format!("ident '{ident}' exceeds max length {MAX_IDENT_LEN}"));
    }

    let mut chars = ident.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    if !starts_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Err(format!("ident '{ident}' is not a valid identifier"));
    }

    if is_reserved_word(ident) {
        return Err(format!("the word '{ident}' is reserved"));
    }

    Ok(())
}
