//! Built-in demo scenes behind the scene oracle.

pub mod factory;
pub mod scene_kinds;
pub mod sphere;
pub mod uv_gradient;
