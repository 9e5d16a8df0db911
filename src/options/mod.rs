//! Controller configuration with TOML preset support.
//!
//! Options serialize to/from TOML so rigs can be described in files and
//! swapped at runtime. The JSON schema stands in for editor inspector
//! metadata: hosts can render a settings form from it.

mod orbit;

use std::path::Path;

pub use orbit::OrbitOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitalError;

/// Top-level options container. Sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `orbit.speed`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit controller parameters.
    pub orbit: OrbitOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`OrbitalError::OptionsParse`] if the TOML is malformed.
    pub fn from_toml(content: &str) -> Result<Self, OrbitalError> {
        toml::from_str(content)
            .map_err(|e| OrbitalError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`OrbitalError::Io`] if the file cannot be read,
    /// [`OrbitalError::OptionsParse`] if its contents are malformed.
    pub fn load(path: &Path) -> Result<Self, OrbitalError> {
        let content = std::fs::read_to_string(path).map_err(OrbitalError::Io)?;
        let options = Self::from_toml(&content)?;
        log::debug!("loaded orbit options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`OrbitalError::OptionsParse`] if serialization fails,
    /// [`OrbitalError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), OrbitalError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitalError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitalError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitalError::Io)
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::{AngleLimit, RotationAxis, TouchProjection};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn limited_rig_round_trips_through_toml() {
        let mut opts = Options::default();
        opts.orbit.axis = RotationAxis::X;
        opts.orbit.angle_limit = Some(AngleLimit { min: -45.0, max: 45.0 });
        opts.orbit.starting_position = Some([0.0, 1.0, -3.0]);
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        assert_eq!(Options::from_toml(&toml_str).unwrap(), opts);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[orbit]
projection = "vertical_drag"

[orbit.angle_limit]
min = 0.0
max = 90.0
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.orbit.projection, TouchProjection::VerticalDrag);
        assert_eq!(
            opts.orbit.angle_limit,
            Some(AngleLimit { min: 0.0, max: 90.0 })
        );
        // Everything else should be default
        assert_eq!(opts.orbit.axis, RotationAxis::Y);
        assert_eq!(opts.orbit.speed, 20.0);
        assert_eq!(opts.orbit.starting_position, None);
    }

    #[test]
    fn unknown_enum_names_fall_back() {
        let toml_str = r#"
[orbit]
axis = "w"
projection = "sideways"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.orbit.axis, RotationAxis::Y);
        assert_eq!(opts.orbit.projection, TouchProjection::HorizontalDrag);
    }

    #[test]
    fn half_specified_limit_is_a_parse_error() {
        let toml_str = r"
[orbit.angle_limit]
min = 0.0
";
        assert!(matches!(
            Options::from_toml(toml_str),
            Err(OrbitalError::OptionsParse(_))
        ));
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir()
            .join(format!("orbital-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.orbit.speed = 42.0;
        opts.save(&dir.join("door.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("door.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["door".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = Path::new("/nonexistent/orbital/preset.toml");
        assert!(matches!(Options::load(path), Err(OrbitalError::Io(_))));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("orbit"));

        let orbit = &props["orbit"]["properties"];
        assert!(orbit.get("axis").is_some());
        assert!(orbit.get("projection").is_some());
        assert!(orbit.get("speed").is_some());
        assert!(orbit.get("angle_limit").is_some());
        // Scene placement is not an inspector field
        assert!(orbit.get("starting_position").is_none());
    }
}
