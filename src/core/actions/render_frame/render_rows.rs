use crate::core::actions::render_frame::ports::scene_tracer::SceneTracer;
use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use crate::core::util::column_groups::{ColumnGroup, column_groups};
use crate::core::util::pixel_to_camera_coords::pixel_to_camera_coords;
use std::ops::Range;

/// Fills one row with saturated, gamma-encoded colours.
///
/// The row is walked in column groups: the two outer columns of each group
/// are traced and the middle one is the mean of the raw outer samples.
/// Blending happens in linear space, before saturation, so an overbright
/// neighbour still brightens the reconstructed pixel.
pub fn render_row<S: SceneTracer>(scene: &S, resolution: Resolution, y: u32, row: &mut [Colour]) {
    debug_assert_eq!(row.len(), resolution.width() as usize);

    for group in column_groups(resolution.width()) {
        match group {
            ColumnGroup::Interpolated { left, mid, right } => {
                let left_sample = trace_pixel(scene, resolution, left, y);
                let right_sample = trace_pixel(scene, resolution, right, y);
                let mid_sample = Colour::average(left_sample, right_sample);

                row[left as usize] = encode(left_sample);
                row[mid as usize] = encode(mid_sample);
                row[right as usize] = encode(right_sample);
            }
            ColumnGroup::Direct { x } => {
                row[x as usize] = encode(trace_pixel(scene, resolution, x, y));
            }
        }
    }
}

/// Serial reference implementation over a row range.
///
/// `pixels` is the band slice for exactly the rows in `rows`, row-major.
/// The parallel implementation must produce bit-identical output.
pub fn render_rows<S: SceneTracer>(
    scene: &S,
    resolution: Resolution,
    rows: Range<u32>,
    pixels: &mut [Colour],
) {
    debug_assert_eq!(
        pixels.len(),
        rows.len() * resolution.width() as usize
    );

    let width = resolution.width() as usize;
    for (row, y) in pixels.chunks_mut(width).zip(rows) {
        render_row(scene, resolution, y, row);
    }
}

fn trace_pixel<S: SceneTracer>(scene: &S, resolution: Resolution, x: u32, y: u32) -> Colour {
    let (u, v) = pixel_to_camera_coords(x, y, resolution);
    scene.trace(u, v)
}

fn encode(sample: Colour) -> Colour {
    sample.saturate().to_srgb()
}
