pub mod adapter;
pub mod viewer;
