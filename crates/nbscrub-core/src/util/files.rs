//! Notebook file discovery.
//!
//! Discovery is flat: only the immediate children of the search directory
//! are considered, matched by extension the way a shell `*.ipynb` glob
//! would match them.

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Information about a discovered notebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// Path relative to the search base.
    pub relative_path: PathBuf,
}

impl NotebookFile {
    fn new(base_path: &Path, path: PathBuf) -> Self {
        let relative_path = path.strip_prefix(base_path).unwrap_or(&path).to_path_buf();
        Self {
            path,
            relative_path,
        }
    }
}

/// Find all notebooks with the given extension directly inside `base_path`.
///
/// Hidden files are skipped, as are directories whose names happen to end
/// in the extension. Results are sorted by path.
///
/// # Example
///
/// ```no_run
/// # use nbscrub_core::util::files::find_notebooks;
/// # use std::path::Path;
/// # fn example() -> nbscrub_core::Result<()> {
/// for nb in find_notebooks(Path::new("."), "ipynb")? {
///     println!("{}", nb.relative_path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub fn find_notebooks(base_path: &Path, extension: &str) -> Result<Vec<NotebookFile>> {
    let pattern = notebook_pattern(base_path, extension)?;
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut notebooks = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        let path = entry?;
        if !path.is_file() {
            log::debug!("skipping non-file match {}", path.display());
            continue;
        }
        notebooks.push(NotebookFile::new(base_path, path));
    }

    notebooks.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(notebooks)
}

/// Build the escaped, non-recursive glob pattern for a directory.
fn notebook_pattern(base_path: &Path, extension: &str) -> Result<String> {
    let base = base_path.to_str().ok_or_else(|| {
        Error::invalid_data(format!(
            "directory path is not valid UTF-8: {}",
            base_path.display()
        ))
    })?;
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        return Err(Error::invalid_data("notebook extension cannot be empty"));
    }

    let file_glob = format!("*.{}", Pattern::escape(extension));
    if base.is_empty() {
        return Ok(file_glob);
    }
    let dir = Pattern::escape(base);
    let sep = if dir.ends_with(std::path::MAIN_SEPARATOR) || dir.ends_with('/') {
        ""
    } else {
        "/"
    };
    Ok(format!("{dir}{sep}{file_glob}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_notebooks_matches_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("one.ipynb"), "{}").unwrap();
        fs::write(temp.path().join("two.ipynb"), "{}").unwrap();
        fs::write(temp.path().join("notes.md"), "# skip").unwrap();
        fs::write(temp.path().join("data.json"), "{}").unwrap();

        let found = find_notebooks(temp.path(), "ipynb").unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].relative_path, PathBuf::from("one.ipynb"));
        assert_eq!(found[1].relative_path, PathBuf::from("two.ipynb"));
        assert_eq!(found[0].path, temp.path().join("one.ipynb"));
    }

    #[test]
    fn test_find_notebooks_empty_dir() {
        let temp = TempDir::new().unwrap();
        let found = find_notebooks(temp.path(), "ipynb").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_find_notebooks_does_not_recurse() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("top.ipynb"), "{}").unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.ipynb"), "{}").unwrap();

        let found = find_notebooks(temp.path(), "ipynb").unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].relative_path, PathBuf::from("top.ipynb"));
    }

    #[test]
    fn test_find_notebooks_skips_directories_and_hidden() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("folder.ipynb")).unwrap();
        fs::write(temp.path().join(".hidden.ipynb"), "{}").unwrap();
        fs::write(temp.path().join("visible.ipynb"), "{}").unwrap();

        let found = find_notebooks(temp.path(), "ipynb").unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].relative_path, PathBuf::from("visible.ipynb"));
    }

    #[test]
    fn test_find_notebooks_sorted() {
        let temp = TempDir::new().unwrap();
        for name in ["c.ipynb", "a.ipynb", "b.ipynb"] {
            fs::write(temp.path().join(name), "{}").unwrap();
        }

        let names: Vec<_> = find_notebooks(temp.path(), "ipynb")
            .unwrap()
            .into_iter()
            .map(|nb| nb.relative_path)
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("a.ipynb"),
                PathBuf::from("b.ipynb"),
                PathBuf::from("c.ipynb"),
            ]
        );
    }

    #[test]
    fn test_find_notebooks_dir_with_glob_metacharacters() {
        let temp = TempDir::new().unwrap();
        let odd = temp.path().join("[draft] notebooks");
        fs::create_dir(&odd).unwrap();
        fs::write(odd.join("x.ipynb"), "{}").unwrap();

        let found = find_notebooks(&odd, "ipynb").unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].relative_path, PathBuf::from("x.ipynb"));
    }

    #[test]
    fn test_find_notebooks_custom_extension_with_dot() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.nb"), "{}").unwrap();
        fs::write(temp.path().join("b.ipynb"), "{}").unwrap();

        let found = find_notebooks(temp.path(), ".nb").unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].relative_path, PathBuf::from("a.nb"));
    }

    #[test]
    fn test_notebook_pattern_empty_extension() {
        let result = notebook_pattern(Path::new("."), "");
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_notebook_pattern_shapes() {
        assert_eq!(
            notebook_pattern(Path::new("."), "ipynb").unwrap(),
            "./*.ipynb"
        );
        assert_eq!(notebook_pattern(Path::new(""), "ipynb").unwrap(), "*.ipynb");
        assert_eq!(
            notebook_pattern(Path::new("work/"), "ipynb").unwrap(),
            "work/*.ipynb"
        );
    }
}
