use crate::core::data::resolution::Resolution;

/// Maps a pixel position to camera-space coordinates.
///
/// `u` runs -1 at the left edge to +1 one column past the right edge,
/// with the exact centre column at 0. `v` covers the same span scaled by
/// the aspect ratio, sign-flipped so the top of the screen is positive.
/// The half-extents are computed in integer arithmetic, so odd dimensions
/// centre on the lower middle pixel.
///
/// Pure and total: callers pass coordinates inside the frame, but values
/// on the far edges simply extrapolate.
#[must_use]
pub fn pixel_to_camera_coords(x: u32, y: u32, resolution: Resolution) -> (f32, f32) {
    let half_width = (resolution.width() / 2) as f32;
    let half_height = (resolution.height() / 2) as f32;
    let aspect = resolution.height() as f32 / resolution.width() as f32;

    let u = (x as f32 - half_width) / half_width;
    let v = -((y as f32 - half_height) / half_height) * aspect;

    (u, v)
}
