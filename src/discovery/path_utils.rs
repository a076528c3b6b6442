use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, UrlExtractError};

/// Expand input paths into the list of files to scan.
///
/// Files are kept in argument order. Directories are walked with the
/// `ignore` crate (honouring `.gitignore`) when `recursive` is set and
/// rejected otherwise. `file_types` restricts both to the given extensions;
/// an empty string in the set selects files without an extension.
pub fn expand_paths(
    input_paths: Vec<&Path>,
    recursive: bool,
    file_types: Option<&HashSet<String>>,
) -> Result<Vec<PathBuf>> {
    let mut result_paths = Vec::new();

    for path in input_paths {
        if path.is_file() {
            if has_wanted_extension(path, file_types) {
                result_paths.push(path.to_path_buf());
            }
        } else if path.is_dir() {
            if !recursive {
                return Err(UrlExtractError::PathExpansion(format!(
                    "'{}' is a directory. Use --recursive to process directories.",
                    path.display()
                )));
            }

            let mut builder = ignore::WalkBuilder::new(path);
            builder.hidden(false);

            let mut walked = Vec::new();
            for entry in builder.build() {
                let entry = entry?;
                let entry_path = entry.path();
                if entry_path.is_file() && has_wanted_extension(entry_path, file_types) {
                    walked.push(entry_path.to_path_buf());
                }
            }
            // Walk order depends on the file system
            walked.sort();
            result_paths.extend(walked);
        } else {
            return Err(UrlExtractError::FileNotFound(path.display().to_string()));
        }
    }

    Ok(result_paths)
}

fn has_wanted_extension(path: &Path, file_types: Option<&HashSet<String>>) -> bool {
    let Some(extensions) = file_types else {
        return true;
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => extensions.contains(ext),
        None => extensions.contains(""),
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn create_test_structure() -> std::result::Result<TempDir, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();

        fs::create_dir_all(base.join("subdir/nested"))?;

        fs::write(base.join("README.md"), "# Test\nhttps://example.com")?;
        fs::write(base.join("file.txt"), "Some text with https://test.com")?;
        fs::write(base.join("no_extension"), "https://noext.com")?;
        fs::write(
            base.join("subdir/nested/deep.md"),
            "Deep file https://deep.com",
        )?;

        Ok(temp_dir)
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_expand_paths__single_file() -> TestResult {
        let temp_dir = create_test_structure()?;
        let readme_path = temp_dir.path().join("README.md");

        let result = expand_paths(vec![&readme_path], false, None)?;

        assert_eq!(result, vec![readme_path]);
        Ok(())
    }

    #[test]
    fn test_expand_paths__keeps_argument_order() -> TestResult {
        let temp_dir = create_test_structure()?;
        let txt_path = temp_dir.path().join("file.txt");
        let readme_path = temp_dir.path().join("README.md");

        let result = expand_paths(vec![&txt_path, &readme_path], false, None)?;

        assert_eq!(result, vec![txt_path, readme_path]);
        Ok(())
    }

    #[test]
    fn test_expand_paths__file_with_extension_filter() -> TestResult {
        let temp_dir = create_test_structure()?;
        let readme_path = temp_dir.path().join("README.md");
        let txt_path = temp_dir.path().join("file.txt");

        let extensions: HashSet<String> = ["md".to_string()].into_iter().collect();

        let result = expand_paths(vec![&readme_path], false, Some(&extensions))?;
        assert_eq!(result.len(), 1);

        let result = expand_paths(vec![&txt_path], false, Some(&extensions))?;
        assert!(result.is_empty());

        Ok(())
    }

    #[test]
    fn test_expand_paths__directory_without_recursive_fails() -> TestResult {
        let temp_dir = create_test_structure()?;

        let result = expand_paths(vec![temp_dir.path()], false, None);

        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("is a directory. Use --recursive")
        );
        Ok(())
    }

    #[test]
    fn test_expand_paths__missing_path_fails() {
        let result = expand_paths(vec![Path::new("/definitely/not/here.md")], false, None);
        assert!(matches!(result, Err(UrlExtractError::FileNotFound(_))));
    }

    #[test]
    fn test_expand_paths__recursive_all_files() -> TestResult {
        let temp_dir = create_test_structure()?;

        let result = expand_paths(vec![temp_dir.path()], true, None)?;
        let names = file_names(&result);

        assert!(names.contains(&"README.md".to_string()));
        assert!(names.contains(&"file.txt".to_string()));
        assert!(names.contains(&"no_extension".to_string()));
        assert!(names.contains(&"deep.md".to_string()));

        let mut sorted = result.clone();
        sorted.sort();
        assert_eq!(result, sorted);
        Ok(())
    }

    #[test]
    fn test_expand_paths__recursive_with_file_type_filter() -> TestResult {
        let temp_dir = create_test_structure()?;
        let extensions: HashSet<String> = ["md".to_string()].into_iter().collect();

        let result = expand_paths(vec![temp_dir.path()], true, Some(&extensions))?;
        let names = file_names(&result);

        assert_eq!(names.len(), 2);
        assert!(names.contains(&"README.md".to_string()));
        assert!(names.contains(&"deep.md".to_string()));
        Ok(())
    }

    #[test]
    fn test_expand_paths__files_without_extension() -> TestResult {
        let temp_dir = create_test_structure()?;
        let extensions: HashSet<String> = ["".to_string()].into_iter().collect();

        let result = expand_paths(vec![temp_dir.path()], true, Some(&extensions))?;

        assert_eq!(file_names(&result), vec!["no_extension".to_string()]);
        Ok(())
    }
}
