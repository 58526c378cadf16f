pub mod file_presenter;
pub mod viewer;
