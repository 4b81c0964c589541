use crate::utils::error::{PrepError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_existing_dir(field_name: &str, path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(PrepError::InvalidConfig {
            field: field_name.to_string(),
            reason: format!("Directory {} does not exist", path.display()),
        });
    }
    Ok(())
}

pub fn validate_existing_file(field_name: &str, path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(PrepError::InvalidConfig {
            field: field_name.to_string(),
            reason: format!("File {} does not exist", path.display()),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(PrepError::InvalidConfig {
            field: field_name.to_string(),
            reason: "At least one value is required".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(PrepError::InvalidConfig {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_existing_dir("install_root", dir.path()).is_ok());
        assert!(validate_existing_dir("install_root", &dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("inputs", &["a"]).is_ok());
        assert!(validate_non_empty_list::<String>("inputs", &[]).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", &PathBuf::from("out.jar")).is_ok());
        assert!(validate_path("output", &PathBuf::new()).is_err());
    }
}
