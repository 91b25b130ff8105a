//! Field rules shared by all three catalog entities.

use crate::errors::ModelError;

pub const TITLE_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 1024;

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("title required".into()));
    }
    if title.contains('\0') {
        return Err(ModelError::Validation("title must not contain NUL characters".into()));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(ModelError::Validation(format!("title longer than {TITLE_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), ModelError> {
    // Postgres text columns cannot store U+0000
    if description.contains('\0') {
        return Err(ModelError::Validation("description must not contain NUL characters".into()));
    }
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(ModelError::Validation(format!(
            "description longer than {DESCRIPTION_MAX_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_rejected() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title("Lunch").is_ok());
    }

    #[test]
    fn overlong_fields_rejected() {
        assert!(validate_title(&"a".repeat(TITLE_MAX_LEN)).is_ok());
        assert!(validate_title(&"a".repeat(TITLE_MAX_LEN + 1)).is_err());
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"d".repeat(DESCRIPTION_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn nul_characters_rejected() {
        assert!(matches!(validate_title("a\u{0}b"), Err(ModelError::Validation(_))));
        assert!(matches!(validate_description("x\u{0}"), Err(ModelError::Validation(_))));
        assert!(validate_description("tab\tand newline\n are fine").is_ok());
    }
}
