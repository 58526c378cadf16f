//! Scene-script loading and the settings it produces.

pub mod render_settings;
pub mod scene_file;
