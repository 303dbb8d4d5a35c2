use crate::error::{AnnotatorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub panels: PanelsConfig,
}

/// Size every captured frame is cropped and scaled to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    #[serde(default = "default_capture_width")]
    pub width: u32,
    #[serde(default = "default_capture_height")]
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_grab_radius")]
    pub grab_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// `{index}` is replaced by the frame index.
    #[serde(default = "default_file_name_template")]
    pub file_name_template: String,
    #[serde(default = "default_annotations_file")]
    pub annotations_file: String,
    #[serde(default = "default_images_archive")]
    pub images_archive: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_supercategory")]
    pub supercategory: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelsConfig {
    #[serde(default = "default_category")]
    pub default_category: String,
}

// Default value functions
fn default_capture_width() -> u32 {
    1280
}

fn default_capture_height() -> u32 {
    800
}

fn default_grab_radius() -> f64 {
    crate::editor::DEFAULT_GRAB_RADIUS
}

fn default_file_name_template() -> String {
    "{index}.png".to_string()
}

fn default_annotations_file() -> String {
    "annotations.json".to_string()
}

fn default_images_archive() -> String {
    "images".to_string()
}

fn default_description() -> String {
    "COCO Annotation Dataset".to_string()
}

fn default_supercategory() -> String {
    "none".to_string()
}

fn default_category() -> String {
    "dog".to_string()
}

impl AppConfig {
    /// Rejects values no capture or export could work with.
    pub fn validate(&self) -> Result<()> {
        if self.capture.width == 0 || self.capture.height == 0 {
            return Err(AnnotatorError::Config(format!(
                "capture size must be positive, got {}x{}",
                self.capture.width, self.capture.height
            )));
        }
        Ok(())
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: default_capture_width(),
            height: default_capture_height(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grab_radius: default_grab_radius(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name_template: default_file_name_template(),
            annotations_file: default_annotations_file(),
            images_archive: default_images_archive(),
            description: default_description(),
            supercategory: default_supercategory(),
        }
    }
}

impl Default for PanelsConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
        }
    }
}

/// Get the path to the config file
pub fn config_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "frame_annotator")
        .ok_or_else(|| AnnotatorError::Config("no home directory to place config in".into()))?;
    Ok(dirs.config_dir().join("config.toml"))
}

/// Load configuration from the default location, or defaults if it is
/// missing or unreadable.
pub fn load_config() -> AppConfig {
    match config_path() {
        Ok(path) if path.exists() => load_or_default(&path),
        Ok(_) => AppConfig::default(),
        Err(e) => {
            warn!(error = %e, "using default config");
            AppConfig::default()
        }
    }
}

/// Load configuration from an explicit file, falling back to defaults.
pub fn load_or_default(path: &Path) -> AppConfig {
    match load_config_from(path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            AppConfig::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Save configuration to the default location
pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml = toml::to_string_pretty(config)?;
    std::fs::write(path, toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [capture]
            width = 640

            [export]
            supercategory = "animal"
            "#,
        )
        .unwrap();

        assert_eq!(config.capture.width, 640);
        assert_eq!(config.capture.height, 800);
        assert_eq!(config.export.supercategory, "animal");
        assert_eq!(config.export.file_name_template, "{index}.png");
        assert_eq!(config.editor.grab_radius, 10.0);
        assert_eq!(config.panels.default_category, "dog");
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.editor.grab_radius = 6.5;
        config.panels.default_category = "cat".into();
        save_config_to(&config, &path).unwrap();

        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "capture = [not toml").unwrap();

        assert!(load_config_from(&path).is_err());
        assert_eq!(load_or_default(&path), AppConfig::default());
    }

    #[test]
    fn zero_capture_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[capture]\nwidth = 64\nheight = 0\n").unwrap();

        assert!(matches!(
            load_config_from(&path),
            Err(AnnotatorError::Config(_))
        ));
        assert_eq!(load_or_default(&path), AppConfig::default());
        assert!(AppConfig::default().validate().is_ok());
    }
}
