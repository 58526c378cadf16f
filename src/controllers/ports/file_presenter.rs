use std::path::Path;

use crate::core::data::framebuffer::Framebuffer;

pub trait FilePresenterPort {
    fn present(&self, framebuffer: &Framebuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
