//! [`SceneManager`]: loads scenes by name and tracks the active one.

use starlet_assets::{AssetPaths, scene_name_problem};

use crate::error::SceneError;
use crate::file::SceneFile;
use crate::scene::Scene;

/// Owns the active scene.
///
/// A failed load leaves the previously active scene in place.
#[derive(Debug, Default)]
pub struct SceneManager {
    active: Option<Scene>,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `<assets>/scenes/<name>.ron` and makes it the active scene.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError`] if the name is invalid, the file is missing or
    /// malformed, or the scene content fails validation.
    pub fn load(&mut self, assets: &AssetPaths, name: &str) -> Result<&Scene, SceneError> {
        validate_scene_name(name)?;

        let path = assets.scene_path(name);
        if !path.is_file() {
            return Err(SceneError::NotFound {
                name: name.to_owned(),
                path,
            });
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| SceneError::Read {
            path: path.clone(),
            source,
        })?;
        let file: SceneFile =
            ron::from_str(&contents).map_err(|source| SceneError::Parse { path, source })?;

        let scene = Scene::from_file(name, file, assets)?;
        log::info!(
            "Loaded scene {:?} ({} objects)",
            scene.name(),
            scene.objects().len()
        );
        if let Some((min, max)) = scene.extents() {
            log::debug!("Scene extents: min={min} max={max}");
        }

        if let Some(previous) = self.active.take() {
            log::info!("Replaced active scene {:?}", previous.name());
        }
        Ok(self.active.insert(scene))
    }

    /// The active scene, if any.
    pub fn active(&self) -> Option<&Scene> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut Scene> {
        self.active.as_mut()
    }

    /// Drops the active scene and returns it.
    pub fn unload(&mut self) -> Option<Scene> {
        self.active.take()
    }
}

/// Checks that `name` maps to exactly one file inside the scene directory.
pub fn validate_scene_name(name: &str) -> Result<(), SceneError> {
    match scene_name_problem(name) {
        Some(reason) => Err(SceneError::InvalidName {
            name: name.to_owned(),
            reason,
        }),
        None => Ok(()),
    }
}
