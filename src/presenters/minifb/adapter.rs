use crate::core::data::colour::Colour;
use crate::core::data::framebuffer::Framebuffer;

/// Packs display-referred `[0, 1]` colours into minifb's 0RGB layout.
pub fn pack_0rgb(framebuffer: &Framebuffer) -> Vec<u32> {
    framebuffer
        .pixels()
        .iter()
        .map(|&colour| colour_to_0rgb(colour))
        .collect()
}

fn colour_to_0rgb(colour: Colour) -> u32 {
    let r = (colour.r * 255.0) as u32;
    let g = (colour.g * 255.0) as u32;
    let b = (colour.b * 255.0) as u32;

    (r << 16) | (g << 8) | b
}
