use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Collect every `*.csv` file under `root`, as paths relative to `root`,
/// sorted for a deterministic processing order. The walk is sequential and
/// sees the tree as-is: no hidden-file or ignore-file filtering.
pub fn collect_csv_files(root: &Path) -> Result<Vec<PathBuf>, String> {
    if !root.is_dir() {
        return Err(format!(
            "input directory '{}' does not exist",
            root.display()
        ));
    }

    let walker = WalkBuilder::new(root)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .hidden(false)
        .build();

    let mut files = Vec::new();
    for dent in walker {
        let dent = match dent {
            Ok(d) => d,
            Err(_e) => continue,
        };
        let ftype = match dent.file_type() {
            Some(t) => t,
            None => continue,
        };
        if !ftype.is_file() {
            continue;
        }
        let path = dent.path();
        if path.extension().and_then(|s| s.to_str()) != Some("csv") {
            continue;
        }
        if let Ok(rel) = path.strip_prefix(root) {
            files.push(rel.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collects_nested_csv_files_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("ui/menus")).unwrap();
        fs::write(dir.path().join("ui/menus/main.csv"), "Key,SourceString,Comment\n").unwrap();
        fs::write(dir.path().join("items.csv"), "Key,SourceString,Comment\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a table").unwrap();

        let files = collect_csv_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("items.csv"), PathBuf::from("ui/menus/main.csv")]
        );
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");
        let err = collect_csv_files(&missing).unwrap_err();
        assert!(err.contains("does not exist"));
    }
}
