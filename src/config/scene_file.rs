use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use crate::config::render_settings::{ProgressiveCadence, RenderSettings};
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::scenes::scene_kinds::SceneKinds;

#[derive(Debug)]
pub enum SceneFileError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Resolution(ResolutionError),
    ZeroRefreshInterval,
    UnknownSceneKind(String),
}

impl fmt::Display for SceneFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read scene script {}: {}", path.display(), source)
            }
            Self::Parse(err) => write!(f, "scene script is not valid JSON: {}", err),
            Self::Resolution(err) => write!(f, "{}", err),
            Self::ZeroRefreshInterval => {
                write!(f, "progressive rows_per_refresh must be at least 1")
            }
            Self::UnknownSceneKind(name) => write!(f, "unknown scene kind: {}", name),
        }
    }
}

impl Error for SceneFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Resolution(err) => Some(err),
            Self::ZeroRefreshInterval | Self::UnknownSceneKind(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SceneFileJson {
    width: Option<u32>,
    height: Option<u32>,
    progressive: Option<ProgressiveJson>,
    output: Option<PathBuf>,
    scene: Option<SceneJson>,
}

#[derive(Debug, Deserialize)]
struct ProgressiveJson {
    enabled: Option<bool>,
    rows_per_refresh: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SceneJson {
    kind: String,
}

/// Loads render settings from a JSON scene script.
///
/// Every field is optional; omissions fall back to the stock defaults in
/// [`RenderSettings`].
pub fn load_render_settings(path: impl AsRef<Path>) -> Result<RenderSettings, SceneFileError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| SceneFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_render_settings(&contents)
}

fn parse_render_settings(json: &str) -> Result<RenderSettings, SceneFileError> {
    let file: SceneFileJson = serde_json::from_str(json).map_err(SceneFileError::Parse)?;
    let defaults = RenderSettings::default();

    let resolution = match (file.width, file.height) {
        (None, None) => defaults.resolution,
        (width, height) => Resolution::new(
            width.unwrap_or(defaults.resolution.width()),
            height.unwrap_or(defaults.resolution.height()),
        )
        .map_err(SceneFileError::Resolution)?,
    };

    let cadence = match file.progressive {
        None => defaults.cadence,
        Some(progressive) => ProgressiveCadence {
            enabled: progressive.enabled.unwrap_or(defaults.cadence.enabled),
            rows_per_refresh: match progressive.rows_per_refresh {
                None => defaults.cadence.rows_per_refresh,
                Some(rows) => {
                    NonZeroU32::new(rows).ok_or(SceneFileError::ZeroRefreshInterval)?
                }
            },
        },
    };

    let scene = match file.scene {
        None => defaults.scene,
        Some(scene) => parse_scene_kind(&scene.kind)?,
    };

    Ok(RenderSettings {
        resolution,
        cadence,
        output_path: file.output.unwrap_or(defaults.output_path),
        scene,
    })
}

fn parse_scene_kind(name: &str) -> Result<SceneKinds, SceneFileError> {
    SceneKinds::ALL
        .iter()
        .copied()
        .find(|kind| kind.script_name() == name)
        .ok_or_else(|| SceneFileError::UnknownSceneKind(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_script_yields_the_defaults() {
        let settings = parse_render_settings("{}").unwrap();

        assert_eq!(settings, RenderSettings::default());
    }

    #[test]
    fn test_every_field_can_be_overridden() {
        let json = r#"{
            "width": 640,
            "height": 480,
            "progressive": { "enabled": true, "rows_per_refresh": 3 },
            "output": "render.ppm",
            "scene": { "kind": "uv_gradient" }
        }"#;

        let settings = parse_render_settings(json).unwrap();

        assert_eq!(settings.resolution, Resolution::new(640, 480).unwrap());
        assert!(settings.cadence.enabled);
        assert_eq!(settings.cadence.rows_per_refresh.get(), 3);
        assert_eq!(settings.output_path, PathBuf::from("render.ppm"));
        assert_eq!(settings.scene, SceneKinds::UvGradient);
    }

    #[test]
    fn test_partial_resolution_keeps_the_default_for_the_other_axis() {
        let settings = parse_render_settings(r#"{ "width": 640 }"#).unwrap();

        assert_eq!(settings.resolution, Resolution::new(640, 1024).unwrap());
    }

    #[test]
    fn test_progressive_flag_without_interval_keeps_the_default_interval() {
        let settings =
            parse_render_settings(r#"{ "progressive": { "enabled": true } }"#).unwrap();

        assert!(settings.cadence.enabled);
        assert_eq!(settings.cadence.rows_per_refresh.get(), 10);
    }

    #[test]
    fn test_zero_refresh_interval_is_rejected() {
        let result =
            parse_render_settings(r#"{ "progressive": { "rows_per_refresh": 0 } }"#);

        assert!(matches!(result, Err(SceneFileError::ZeroRefreshInterval)));
    }

    #[test]
    fn test_degenerate_resolution_is_rejected() {
        let result = parse_render_settings(r#"{ "width": 1 }"#);

        assert!(matches!(result, Err(SceneFileError::Resolution(_))));
    }

    #[test]
    fn test_unknown_scene_kind_is_rejected_by_name() {
        let result = parse_render_settings(r#"{ "scene": { "kind": "teapot" } }"#);

        match result {
            Err(SceneFileError::UnknownSceneKind(name)) => assert_eq!(name, "teapot"),
            other => panic!("expected UnknownSceneKind, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = parse_render_settings("{ not json");

        assert!(matches!(result, Err(SceneFileError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("raytrace_preview_no_such_scene.json");

        let result = load_render_settings(&path);

        match result {
            Err(SceneFileError::Read { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Read error, got {:?}", other),
        }
    }

    #[test]
    fn test_script_loads_from_disk() {
        let path = std::env::temp_dir().join("raytrace_preview_scene_load_test.json");
        std::fs::write(&path, r#"{ "scene": { "kind": "sphere" }, "width": 64 }"#).unwrap();

        let settings = load_render_settings(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.scene, SceneKinds::Sphere);
        assert_eq!(settings.resolution.width(), 64);
    }

    #[test]
    fn test_error_display_names_the_problem() {
        let unknown = SceneFileError::UnknownSceneKind("teapot".to_string());
        let zero = SceneFileError::ZeroRefreshInterval;

        assert_eq!(format!("{}", unknown), "unknown scene kind: teapot");
        assert_eq!(
            format!("{}", zero),
            "progressive rows_per_refresh must be at least 1"
        );
    }
}
