//! Runtime scene state.

use std::collections::HashSet;
use std::path::PathBuf;

use glam::Vec3;
use starlet_assets::AssetPaths;

use crate::error::SceneError;
use crate::file::SceneFile;

/// Deep space blue, used when a scene file does not set a clear color.
pub const DEFAULT_CLEAR_COLOR: [f64; 4] = [0.02, 0.02, 0.08, 1.0];

/// An object placed in a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Unique name within the scene.
    pub name: String,
    /// World-space position.
    pub position: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Resolved asset file, if the object references one.
    pub asset: Option<PathBuf>,
}

/// A loaded, validated scene.
#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    clear_color: [f64; 4],
    objects: Vec<SceneObject>,
    elapsed: f64,
    tick_count: u64,
}

impl Scene {
    /// An empty scene with the default clear color.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clear_color: DEFAULT_CLEAR_COLOR,
            objects: Vec::new(),
            elapsed: 0.0,
            tick_count: 0,
        }
    }

    /// Builds a scene from its parsed file, resolving object assets against `assets`.
    ///
    /// # Errors
    ///
    /// Fails on unnamed or duplicate objects and on asset references that do
    /// not resolve to an existing file.
    pub fn from_file(name: &str, file: SceneFile, assets: &AssetPaths) -> Result<Self, SceneError> {
        if !file.name.is_empty() && file.name != name {
            log::warn!(
                "Scene file for {name:?} declares name {:?}; using {name:?}",
                file.name
            );
        }

        let mut seen = HashSet::with_capacity(file.objects.len());
        let mut objects = Vec::with_capacity(file.objects.len());

        for (index, object) in file.objects.into_iter().enumerate() {
            if object.name.trim().is_empty() {
                return Err(SceneError::UnnamedObject {
                    scene: name.to_owned(),
                    index,
                });
            }
            if !seen.insert(object.name.clone()) {
                return Err(SceneError::DuplicateObject {
                    scene: name.to_owned(),
                    object: object.name,
                });
            }

            let asset = match object.asset.as_deref() {
                Some(reference) => Some(assets.resolve(reference).map_err(|source| {
                    SceneError::MissingAsset {
                        object: object.name.clone(),
                        source,
                    }
                })?),
                None => None,
            };

            objects.push(SceneObject {
                name: object.name,
                position: Vec3::from_array(object.position),
                scale: Vec3::from_array(object.scale),
                asset,
            });
        }

        Ok(Self {
            name: name.to_owned(),
            clear_color: sanitize_clear_color(file.clear_color),
            objects,
            elapsed: 0.0,
            tick_count: 0,
        })
    }

    /// Scene name (the file stem it was loaded from).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// RGBA clear color, each component in `[0, 1]`.
    pub fn clear_color(&self) -> [f64; 4] {
        self.clear_color
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Looks up an object by name.
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Advances scene time by one simulation step.
    pub fn update(&mut self, dt: f64) {
        self.elapsed += dt;
        self.tick_count += 1;
    }

    /// Simulated seconds since the scene was loaded.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of simulation steps since the scene was loaded.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Axis-aligned extents of all object positions, or `None` for an empty scene.
    pub fn extents(&self) -> Option<(Vec3, Vec3)> {
        let first = self.objects.first()?.position;
        Some(
            self.objects
                .iter()
                .skip(1)
                .fold((first, first), |(min, max), o| {
                    (min.min(o.position), max.max(o.position))
                }),
        )
    }
}

/// Clamps each component to `[0, 1]`. Non-finite components fall back to
/// the matching [`DEFAULT_CLEAR_COLOR`] component.
fn sanitize_clear_color(color: [f64; 4]) -> [f64; 4] {
    std::array::from_fn(|i| {
        let c = color[i];
        if c.is_finite() {
            c.clamp(0.0, 1.0)
        } else {
            log::warn!("Non-finite clear color component {c}; using default");
            DEFAULT_CLEAR_COLOR[i]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::ObjectFile;

    fn object(name: &str, position: [f32; 3], asset: Option<&str>) -> ObjectFile {
        ObjectFile {
            name: name.to_string(),
            position,
            asset: asset.map(str::to_string),
            ..ObjectFile::default()
        }
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::empty("EmptyScene");
        assert_eq!(scene.name(), "EmptyScene");
        assert_eq!(scene.clear_color(), DEFAULT_CLEAR_COLOR);
        assert!(scene.objects().is_empty());
        assert!(scene.extents().is_none());
    }

    #[test]
    fn test_from_file_converts_objects() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetPaths::new(dir.path());
        let file = SceneFile {
            objects: vec![object("a", [1.0, 2.0, 3.0], None)],
            ..SceneFile::default()
        };

        let scene = Scene::from_file("Test", file, &assets).unwrap();
        let a = scene.object("a").unwrap();
        assert_eq!(a.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(a.scale, Vec3::ONE);
        assert!(a.asset.is_none());
    }

    #[test]
    fn test_clear_color_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let file = SceneFile {
            clear_color: [2.0, -1.0, 0.5, 1.0],
            ..SceneFile::default()
        };
        let scene = Scene::from_file("Test", file, &AssetPaths::new(dir.path())).unwrap();
        assert_eq!(scene.clear_color(), [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_non_finite_clear_color_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = SceneFile {
            clear_color: [f64::NAN, 0.5, f64::INFINITY, f64::NEG_INFINITY],
            ..SceneFile::default()
        };
        let scene = Scene::from_file("Test", file, &AssetPaths::new(dir.path())).unwrap();
        let color = scene.clear_color();
        assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
        assert_eq!(
            color,
            [DEFAULT_CLEAR_COLOR[0], 0.5, DEFAULT_CLEAR_COLOR[2], DEFAULT_CLEAR_COLOR[3]]
        );
    }

    #[test]
    fn test_duplicate_object_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = SceneFile {
            objects: vec![object("a", [0.0; 3], None), object("a", [1.0; 3], None)],
            ..SceneFile::default()
        };
        let err = Scene::from_file("Test", file, &AssetPaths::new(dir.path())).unwrap_err();
        assert!(matches!(err, SceneError::DuplicateObject { object, .. } if object == "a"));
    }

    #[test]
    fn test_unnamed_object_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = SceneFile {
            objects: vec![object("a", [0.0; 3], None), object(" ", [0.0; 3], None)],
            ..SceneFile::default()
        };
        let err = Scene::from_file("Test", file, &AssetPaths::new(dir.path())).unwrap_err();
        assert!(matches!(err, SceneError::UnnamedObject { index: 1, .. }));
    }

    #[test]
    fn test_asset_reference_resolved() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("meshes")).unwrap();
        std::fs::write(dir.path().join("meshes/ship.obj"), "o ship").unwrap();

        let file = SceneFile {
            objects: vec![object("ship", [0.0; 3], Some("meshes/ship.obj"))],
            ..SceneFile::default()
        };
        let scene = Scene::from_file("Test", file, &AssetPaths::new(dir.path())).unwrap();
        let asset = scene.object("ship").unwrap().asset.as_ref().unwrap();
        assert!(asset.ends_with("ship.obj"));
    }

    #[test]
    fn test_missing_asset_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = SceneFile {
            objects: vec![object("ship", [0.0; 3], Some("meshes/ship.obj"))],
            ..SceneFile::default()
        };
        let err = Scene::from_file("Test", file, &AssetPaths::new(dir.path())).unwrap_err();
        assert!(matches!(err, SceneError::MissingAsset { object, .. } if object == "ship"));
    }

    #[test]
    fn test_update_advances_clock() {
        let mut scene = Scene::empty("EmptyScene");
        for _ in 0..3 {
            scene.update(0.5);
        }
        assert_eq!(scene.tick_count(), 3);
        assert!((scene.elapsed() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_extents() {
        let dir = tempfile::tempdir().unwrap();
        let file = SceneFile {
            objects: vec![
                object("a", [1.0, -2.0, 3.0], None),
                object("b", [-1.0, 4.0, 0.0], None),
            ],
            ..SceneFile::default()
        };
        let scene = Scene::from_file("Test", file, &AssetPaths::new(dir.path())).unwrap();
        let (min, max) = scene.extents().unwrap();
        assert_eq!(min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(max, Vec3::new(1.0, 4.0, 3.0));
    }
}
