// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constant::SUPPORTED_IMAGE_FORMATS;
use crate::error::GlimpseError;

/// Create a new directory or an incremented directory if already exists
///
/// # Arguments
///
/// * `directory` - Path to new directory
///
/// # Examples
///
/// ```
/// use glimpse_core::ut::path::create_directory;
///
/// let root = tempfile::tempdir().unwrap();
/// let base = root.path().join("frames");
///
/// assert_eq!(create_directory(&base).unwrap(), base);
/// assert_eq!(create_directory(&base).unwrap(), root.path().join("frames_0"));
/// assert_eq!(create_directory(&base).unwrap(), root.path().join("frames_1"));
/// ```
pub fn create_directory<P: AsRef<Path>>(directory: P) -> Result<PathBuf, GlimpseError> {
    let directory = directory.as_ref();

    if !directory.exists() {
        std::fs::create_dir_all(directory).map_err(|err| GlimpseError::DirError(err.to_string()))?;
        return Ok(directory.to_path_buf());
    }

    let parent = directory.parent().unwrap_or_else(|| Path::new("."));
    let base_name = directory
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| GlimpseError::DirError("Invalid directory name".to_string()))?;

    for index in 0..100 {
        let new_dir = parent.join(format!("{}_{}", base_name, index));

        if !new_dir.exists() {
            std::fs::create_dir(&new_dir).map_err(|err| GlimpseError::DirError(err.to_string()))?;
            return Ok(new_dir);
        }
    }

    Err(GlimpseError::DirError(format!(
        "Could not create a directory in alotted increments. Check the directory path: {}",
        directory.display()
    )))
}

/// Check if a path has a supported image extension (case-insensitive)
pub fn is_image_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_IMAGE_FORMATS.contains(&ext.to_lowercase().as_str()))
}

/// Recursively collect image paths from a directory with an optional substring filter
///
/// Paths are returned sorted so the listing does not depend on the order
/// the file system yields entries.
///
/// # Arguments
///
/// * `directory` - Path to directory containing images, searched recursively
/// * `substring` - Only include files whose name contains this substring
///
/// # Examples
///
/// ```no_run
/// use glimpse_core::ut::path::collect_image_paths;
/// let files = collect_image_paths("directory/", None);
/// ```
pub fn collect_image_paths<P: AsRef<Path>>(
    directory: P,
    substring: Option<&str>,
) -> Result<Vec<PathBuf>, GlimpseError> {
    let directory = directory.as_ref();

    if !directory.is_dir() {
        return Err(GlimpseError::DirError(directory.display().to_string()));
    }

    // Symbolic links to directories are listed but never descended into
    let mut files: Vec<PathBuf> = WalkDir::new(directory)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| !entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_image_path(path))
        .collect();

    if let Some(substring) = substring {
        files.retain(|f| {
            f.file_name()
                .map(|name| name.to_string_lossy().contains(substring))
                .unwrap_or(false)
        });
    }

    files.sort_unstable();

    Ok(files)
}

#[cfg(test)]
mod test {

    use super::*;

    fn touch(path: &Path) {
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_is_image_path() {
        assert!(is_image_path("a.png"));
        assert!(is_image_path("a.JPG"));
        assert!(is_image_path("dir/a.tiff"));
        assert!(!is_image_path("a.txt"));
        assert!(!is_image_path("a.avif"));
        assert!(!is_image_path("png"));
    }

    #[test]
    fn test_collect_image_paths_recursive() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("nested").join("deeper");
        std::fs::create_dir_all(&nested).unwrap();

        touch(&root.path().join("b.png"));
        touch(&root.path().join("a.jpg"));
        touch(&root.path().join("notes.txt"));
        touch(&nested.join("c.bmp"));

        let files = collect_image_paths(root.path(), None).unwrap();

        assert_eq!(
            files,
            vec![
                root.path().join("a.jpg"),
                root.path().join("b.png"),
                nested.join("c.bmp"),
            ]
        );
    }

    #[test]
    fn test_collect_image_paths_substring() {
        let root = tempfile::tempdir().unwrap();

        touch(&root.path().join("shoe_1.png"));
        touch(&root.path().join("shoe_2.png"));
        touch(&root.path().join("shirt_1.png"));

        let files = collect_image_paths(root.path(), Some("shoe")).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_collect_image_paths_empty_directory() {
        let root = tempfile::tempdir().unwrap();
        assert!(collect_image_paths(root.path(), None).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_image_paths_ignores_directory_links() {
        let root = tempfile::tempdir().unwrap();

        touch(&root.path().join("a.png"));
        std::os::unix::fs::symlink(root.path(), root.path().join("loop")).unwrap();
        std::os::unix::fs::symlink(root.path(), root.path().join("again")).unwrap();

        let files = collect_image_paths(root.path(), None).unwrap();
        assert_eq!(files, vec![root.path().join("a.png")]);
    }

    #[test]
    fn test_collect_image_paths_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("missing");

        assert!(matches!(
            collect_image_paths(&missing, None),
            Err(GlimpseError::DirError(_))
        ));
    }
}
