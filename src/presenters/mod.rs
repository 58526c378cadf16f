pub mod file;
pub mod headless;
#[cfg(feature = "viewer")]
pub mod minifb;
