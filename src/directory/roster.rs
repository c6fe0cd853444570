//! Seed roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type for populating a
//! [`Directory`] from a YAML roster file at startup.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::store::Directory;

/// The on-disk shape of a roster file.
#[derive(Debug, Deserialize)]
struct RosterFile {
    employees: Vec<Employee>,
}

/// Loads a seed roster into a directory.
///
/// The loader reads `roster.yaml` from a configuration directory and
/// inserts every employee through [`Directory::create`], so seed data is
/// held to the same uniqueness invariants as records created over the
/// API.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── roster.yaml   # Seed employee records
/// ```
///
/// # Example
///
/// ```no_run
/// use staffing_engine::directory::RosterLoader;
///
/// let directory = RosterLoader::load("./config").unwrap();
/// println!("Loaded {} employees", directory.len());
/// ```
pub struct RosterLoader;

impl RosterLoader {
    /// Loads the roster from the specified configuration directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a populated `Directory` on success, or an error if:
    /// - the roster file is missing
    /// - the file contains invalid YAML
    /// - any seed record violates a directory invariant
    ///
    /// # Example
    ///
    /// ```no_run
    /// use staffing_engine::directory::RosterLoader;
    ///
    /// let directory = RosterLoader::load("./config")?;
    /// # Ok::<(), staffing_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Directory> {
        let roster_path = path.as_ref().join("roster.yaml");
        let roster = Self::load_yaml::<RosterFile>(&roster_path)?;

        let mut directory = Directory::new();
        for employee in roster.employees {
            directory.create(employee)?;
        }

        Ok(directory)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::RosterNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::RosterParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;

    fn config_path() -> &'static str {
        "./config"
    }

    #[test]
    fn test_load_valid_roster() {
        let result = RosterLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load roster: {:?}", result.err());

        let directory = result.unwrap();
        assert!(!directory.is_empty());
    }

    #[test]
    fn test_roster_covers_every_department() {
        let directory = RosterLoader::load(config_path()).unwrap();

        for dept in Department::ALL {
            assert!(
                directory.all().iter().any(|e| e.dept == dept),
                "No seed employee in department {}",
                dept
            );
        }
    }

    #[test]
    fn test_roster_preserves_file_order() {
        let directory = RosterLoader::load(config_path()).unwrap();

        let ids: Vec<u32> = directory.all().iter().map(|e| e.employee_id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();

        // The seed file lists employees by ascending identifier.
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = RosterLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::RosterNotFound { path }) => {
                assert!(path.contains("roster.yaml"));
            }
            other => panic!("Expected RosterNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join("staffing_engine_bad_roster");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("roster.yaml"), "employees: [not, a, record]").unwrap();

        let result = RosterLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::RosterParseError { .. })));
    }

    #[test]
    fn test_duplicate_seed_records_are_rejected() {
        let dir = std::env::temp_dir().join("staffing_engine_dup_roster");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("roster.yaml"),
            r#"
employees:
  - employee_id: 1
    name: First
    dept: AI
    role: Engineer
    email: first@example.com
    experience: 2
  - employee_id: 1
    name: Second
    dept: CS
    role: Engineer
    email: second@example.com
    experience: 4
"#,
        )
        .unwrap();

        let result = RosterLoader::load(&dir);
        assert!(matches!(
            result,
            Err(EngineError::DuplicateEmployee { employee_id: 1 })
        ));
    }
}
