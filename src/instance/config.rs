//! Instance loading configuration.

use std::path::PathBuf;

/// Configuration for loading an instance file.
///
/// # Examples
///
/// ```
/// use u_movieshoot::instance::LoadConfig;
///
/// let config = LoadConfig::default()
///     .with_base_dir("/data/instances")
///     .with_validation(true);
/// assert!(config.validate);
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Directory that relative instance paths are joined onto.
    ///
    /// Defaults to the crate's install location, not the process
    /// working directory.
    pub base_dir: PathBuf,

    /// Run [`Instance::validate`](super::Instance::validate) after parsing.
    pub validate: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
            validate: false,
        }
    }
}

impl LoadConfig {
    /// Sets the directory relative instance paths resolve against.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Enables or disables range validation after parsing.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}
