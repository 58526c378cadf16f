pub mod ports;
pub mod render_frame;
pub mod render_rows;
pub mod render_rows_parallel_rayon;
