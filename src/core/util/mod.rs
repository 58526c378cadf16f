pub mod column_groups;
pub mod pixel_to_camera_coords;
pub mod row_bands;
