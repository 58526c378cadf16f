use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::framebuffer::Framebuffer;
use crate::storage::write_ppm::write_ppm;
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, framebuffer: &Framebuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;
        let resolution = framebuffer.resolution();

        write_ppm(
            &mut file,
            resolution.width(),
            resolution.height(),
            &to_display_bytes(framebuffer),
        )
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

/// Quantises display-referred `[0, 1]` channels to bytes by truncation.
fn to_display_bytes(framebuffer: &Framebuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(framebuffer.pixels().len() * 3);

    for colour in framebuffer.pixels() {
        bytes.push((colour.r * 255.0) as u8);
        bytes.push((colour.g * 255.0) as u8);
        bytes.push((colour.b * 255.0) as u8);
    }

    bytes
}
