//! Globe and camera options with TOML preset support.
//!
//! Options serialize to/from TOML for view presets stored in `presets/`.

mod camera;
mod globe;

use std::path::Path;
use std::sync::Arc;

pub use camera::{CameraModel, CameraOptions};
pub use globe::GlobeOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GeocamError;
use crate::navigator::Navigator;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Reference ellipsoid and projection.
    pub globe: GlobeOptions,
    /// Initial camera pose.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GeocamError::Io`] if the file cannot be read and
    /// [`GeocamError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, GeocamError> {
        let content = std::fs::read_to_string(path).map_err(GeocamError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| GeocamError::OptionsParse(e.to_string()))?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GeocamError::OptionsParse`] if serialization fails and
    /// [`GeocamError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), GeocamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GeocamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GeocamError::Io)?;
        }
        std::fs::write(path, content).map_err(GeocamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Build the globe and camera described by these options.
    ///
    /// # Errors
    ///
    /// Returns [`GeocamError::InvalidGlobe`] if the globe section is out of
    /// range.
    pub fn build_navigator(&self) -> Result<Navigator, GeocamError> {
        let globe = Arc::new(self.globe.build()?);
        Navigator::builder()
            .camera(self.camera.build(globe))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::camera::Camera;
    use crate::globe::{GeodeticPosition, Projection};

    fn presets_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("presets")
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
model = "free"
tilt = -30.0
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.model, CameraModel::Free);
        assert_eq!(opts.camera.tilt, -30.0);
        // Everything else should be default
        assert_eq!(opts.camera.range, 10.0e6);
        assert_eq!(opts.globe, GlobeOptions::default());
    }

    #[test]
    fn unknown_projection_is_a_parse_error() {
        let dir = std::env::temp_dir().join("geocam-options-bad");
        let path = dir.join("bad.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "[globe]\nprojection = \"mercator\"\n").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, GeocamError::OptionsParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err =
            Options::load(Path::new("/nonexistent/geocam.toml")).unwrap_err();
        assert!(matches!(err, GeocamError::Io(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("geocam-options-save");
        let path = dir.join("nested").join("view.toml");
        let mut opts = Options::default();
        opts.globe.projection = Projection::Equirectangular;
        opts.camera.position = GeodeticPosition::new(51.5, -0.1, 0.0);
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
    }

    #[test]
    fn bundled_presets_load() {
        let names = Options::list_presets(&presets_dir());
        assert_eq!(names, ["default", "flat_map", "grand_canyon"]);
        for name in names {
            let path = presets_dir().join(format!("{name}.toml"));
            let opts = Options::load(&path).unwrap();
            assert!(opts.build_navigator().is_ok(), "{name}");
        }
        let default = Options::load(&presets_dir().join("default.toml")).unwrap();
        assert_eq!(default, Options::default());
    }

    #[test]
    fn free_preset_uses_range_as_altitude() {
        let opts =
            Options::load(&presets_dir().join("grand_canyon.toml")).unwrap();
        let navigator = opts.build_navigator().unwrap();
        let Camera::Free(camera) = navigator.camera() else {
            unreachable!("preset selects the free model");
        };
        assert_eq!(camera.position.altitude, 3500.0);
        assert_eq!(camera.tilt, -15.0);
    }

    #[test]
    fn invalid_globe_fails_to_build() {
        let mut opts = Options::default();
        opts.globe.equatorial_radius = -1.0;
        let err = opts.build_navigator().unwrap_err();
        assert!(matches!(err, GeocamError::InvalidGlobe(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("globe"));
        assert!(props.contains_key("camera"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("range").is_some());
        assert!(camera.get("tilt").is_some());
        assert!(camera.get("position").is_some());
        assert_eq!(camera["range"]["minimum"], 1.0);
    }
}
