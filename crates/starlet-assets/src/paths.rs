//! [`AssetPaths`]: resolution of asset references under a single root.

use std::path::{Component, Path, PathBuf};

use crate::error::AssetError;

/// Subdirectory of the asset root holding scene files.
pub const SCENE_DIR: &str = "scenes";
/// File extension of scene files.
pub const SCENE_EXTENSION: &str = "ron";

/// The filesystem root used to resolve content files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    /// Creates asset paths rooted at `root`. Nothing is checked on disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Checks that the root exists and is a directory.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::RootMissing`] otherwise.
    pub fn validate(&self) -> Result<(), AssetError> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(AssetError::RootMissing(self.root.clone()))
        }
    }

    /// Joins a relative reference onto the root without checking existence.
    ///
    /// Absolute references and `..` components are rejected so a reference can
    /// never leave the asset tree.
    pub fn join(&self, relative: &str) -> Result<PathBuf, AssetError> {
        let trimmed = relative.trim();
        if trimmed.is_empty() {
            return Err(invalid(relative, "empty path"));
        }

        let mut path = self.root.clone();
        for component in Path::new(trimmed).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                Component::ParentDir => return Err(invalid(relative, "parent directory reference")),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid(relative, "absolute path"));
                }
            }
        }
        Ok(path)
    }

    /// Resolves a relative reference to an existing file under the root.
    ///
    /// # Errors
    ///
    /// [`AssetError::InvalidPath`] for rejected references, [`AssetError::NotFound`]
    /// if nothing exists at the resolved location.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, AssetError> {
        let path = self.join(relative)?;
        if path.is_file() {
            Ok(path)
        } else {
            Err(AssetError::NotFound(path))
        }
    }

    /// Directory holding scene files.
    pub fn scene_dir(&self) -> PathBuf {
        self.root.join(SCENE_DIR)
    }

    /// Location of the scene file for `name`. Existence is not checked.
    pub fn scene_path(&self, name: &str) -> PathBuf {
        self.scene_dir().join(name).with_extension(SCENE_EXTENSION)
    }

    /// Names of all loadable scenes under the scene directory, sorted.
    ///
    /// A missing scene directory yields an empty list. Files whose stem is not
    /// a valid scene name are skipped.
    pub fn list_scenes(&self) -> Result<Vec<String>, AssetError> {
        let dir = self.scene_dir();
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No scene directory at {}", dir.display());
                return Ok(Vec::new());
            }
            Err(source) => return Err(AssetError::Io { path: dir, source }),
        };

        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == SCENE_EXTENSION))
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?;
                match scene_name_problem(stem) {
                    None => Some(stem.to_owned()),
                    Some(reason) => {
                        log::debug!("Skipping {}: {reason}", path.display());
                        None
                    }
                }
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

/// Why `name` cannot identify a scene, or `None` if it can.
///
/// A valid name maps to exactly one file, `<root>/scenes/<name>.ron`.
pub fn scene_name_problem(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some("empty name")
    } else if name.contains(['/', '\\']) {
        Some("contains a path separator")
    } else if name.contains('.') {
        Some("contains '.'")
    } else {
        None
    }
}

fn invalid(path: &str, reason: &'static str) -> AssetError {
    AssetError::InvalidPath {
        path: path.to_owned(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_validate_existing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AssetPaths::new(dir.path()).validate().is_ok());
    }

    #[test]
    fn test_validate_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = AssetPaths::new(&missing).validate().unwrap_err();
        assert!(matches!(err, AssetError::RootMissing(p) if p == missing));
    }

    #[test]
    fn test_validate_file_is_not_a_root() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "file.txt", "x");
        let paths = AssetPaths::new(dir.path().join("file.txt"));
        assert!(matches!(paths.validate(), Err(AssetError::RootMissing(_))));
    }

    #[test]
    fn test_join_stays_under_root() {
        let paths = AssetPaths::new("assets");
        let joined = paths.join("./meshes/ship.obj").unwrap();
        assert_eq!(joined, Path::new("assets").join("meshes").join("ship.obj"));
    }

    #[test]
    fn test_join_rejects_parent_dir() {
        let paths = AssetPaths::new("assets");
        let err = paths.join("../secrets.txt").unwrap_err();
        assert!(matches!(err, AssetError::InvalidPath { .. }));
    }

    #[test]
    fn test_join_rejects_absolute() {
        let paths = AssetPaths::new("assets");
        assert!(matches!(
            paths.join("/etc/passwd"),
            Err(AssetError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_join_rejects_empty() {
        let paths = AssetPaths::new("assets");
        assert!(matches!(paths.join("  "), Err(AssetError::InvalidPath { .. })));
    }

    #[test]
    fn test_resolve_existing_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "meshes/ship.obj", "o ship");
        let paths = AssetPaths::new(dir.path());

        assert!(paths.resolve("meshes/ship.obj").is_ok());
        assert!(matches!(
            paths.resolve("meshes/rock.obj"),
            Err(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn test_scene_path() {
        let paths = AssetPaths::new("assets");
        assert_eq!(
            paths.scene_path("EmptyScene"),
            Path::new("assets").join(SCENE_DIR).join("EmptyScene.ron")
        );
    }

    #[test]
    fn test_list_scenes_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "scenes/Zeta.ron", "()");
        write(dir.path(), "scenes/Alpha.ron", "()");
        write(dir.path(), "scenes/readme.txt", "not a scene");
        std::fs::create_dir_all(dir.path().join("scenes/nested.ron")).unwrap();

        let names = AssetPaths::new(dir.path()).list_scenes().unwrap();
        assert_eq!(names, vec!["Alpha".to_string(), "Zeta".to_string()]);
    }

    #[test]
    fn test_list_scenes_skips_unloadable_stems() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "scenes/v1.2.ron", "()");
        write(dir.path(), "scenes/.ron", "()");
        write(dir.path(), "scenes/Hangar.ron", "()");

        let names = AssetPaths::new(dir.path()).list_scenes().unwrap();
        assert_eq!(names, vec!["Hangar".to_string()]);
    }

    #[test]
    fn test_scene_name_problem() {
        assert!(scene_name_problem("EmptyScene").is_none());
        assert!(scene_name_problem("level_01-b").is_none());
        assert_eq!(scene_name_problem("v1.2"), Some("contains '.'"));
        assert_eq!(scene_name_problem("a/b"), Some("contains a path separator"));
        assert_eq!(scene_name_problem(" "), Some("empty name"));
    }

    #[test]
    fn test_list_scenes_without_scene_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AssetPaths::new(dir.path()).list_scenes().unwrap().is_empty());
    }
}
