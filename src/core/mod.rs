pub mod actions;
pub mod data;
pub mod scenes;
pub mod util;
