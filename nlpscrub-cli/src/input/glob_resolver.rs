//! File pattern resolution using glob

use std::path::PathBuf;

use glob::glob;

use crate::error::CliError;

/// Resolve file patterns to existing files, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path = path_result.map_err(|e| {
                let path = e.path().to_path_buf();
                CliError::read(path, e.into())
            })?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::InvalidPattern(format!(
            "no files found matching {}",
            patterns.join(", ")
        )));
    }

    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_glob_and_literal_paths() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.log"] {
            fs::write(temp_dir.path().join(name), "x").unwrap();
        }
        let dir = temp_dir.path().display();

        let files = resolve_patterns(&[
            format!("{dir}/*.txt"),
            format!("{dir}/a.txt"),
        ])
        .unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_no_matches() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.missing", temp_dir.path().display());

        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(err.to_string().contains("no files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::InvalidPattern(_)));
    }
}
