use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Project name cannot be empty")]
    EmptyName,
    #[error("Project name must be {0} characters or less")]
    TooLong(usize),
    #[error("Project name '{0}' contains invalid characters. Use only alphanumeric, hyphens, and underscores")]
    InvalidCharacters(String),
}

const MAX_PROJECT_NAME_LENGTH: usize = 64;

/// The name becomes a directory name and is substituted into generated text,
/// so it must be non-empty and free of path separators and other
/// filesystem-illegal characters.
pub fn validate_project_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if name.len() > MAX_PROJECT_NAME_LENGTH {
        return Err(ValidationError::TooLong(MAX_PROJECT_NAME_LENGTH));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidCharacters(name.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_project_name() {
        assert!(validate_project_name("Quantitative-Portfolio-Strategy").is_ok());
        assert!(validate_project_name("my_project").is_ok());
        assert!(validate_project_name("project123").is_ok());
        assert!(validate_project_name("a").is_ok());
    }

    #[test]
    fn test_empty_project_name() {
        assert_eq!(validate_project_name(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_project_name_with_path_separators() {
        assert!(matches!(
            validate_project_name("my/project"),
            Err(ValidationError::InvalidCharacters(_))
        ));
        assert!(matches!(
            validate_project_name("my\\project"),
            Err(ValidationError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn test_project_name_with_special_characters() {
        assert!(matches!(
            validate_project_name("my project"),
            Err(ValidationError::InvalidCharacters(_))
        ));
        assert!(matches!(
            validate_project_name("my.project"),
            Err(ValidationError::InvalidCharacters(_))
        ));
        assert!(matches!(
            validate_project_name("my:project"),
            Err(ValidationError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn test_project_name_too_long() {
        let long_name = "a".repeat(65);
        assert_eq!(
            validate_project_name(&long_name),
            Err(ValidationError::TooLong(64))
        );
    }

    #[test]
    fn test_project_name_max_length_ok() {
        let name = "a".repeat(64);
        assert!(validate_project_name(&name).is_ok());
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Project name cannot be empty"
        );
        assert_eq!(
            ValidationError::TooLong(64).to_string(),
            "Project name must be 64 characters or less"
        );
    }
}
