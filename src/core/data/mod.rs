pub mod colour;
pub mod framebuffer;
pub mod resolution;
pub mod vec3;
