use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_frame::ports::scene_tracer::SceneTracer;
use crate::core::actions::render_frame::render_rows::render_row;
use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use std::ops::Range;

/// Renders a range of rows across rayon's worker pool.
///
/// Each worker receives a disjoint mutable row slice, so overlapping
/// writes are unrepresentable. The cancel token is polled at the start of
/// every row: rows already under way run to completion, and a tripped
/// token aborts the remaining rows through rayon's try combinators.
///
/// Output over the same range is bit-identical to the serial
/// implementation in `render_rows`.
pub fn render_rows_parallel<S, C>(
    scene: &S,
    resolution: Resolution,
    rows: Range<u32>,
    pixels: &mut [Colour],
    cancel: &C,
) -> Result<(), Cancelled>
where
    S: SceneTracer,
    C: CancelToken,
{
    debug_assert_eq!(
        pixels.len(),
        rows.len() * resolution.width() as usize
    );

    let width = resolution.width() as usize;
    let first_row = rows.start;

    pixels
        .par_chunks_mut(width)
        .enumerate()
        .try_for_each(|(i, row)| {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            render_row(scene, resolution, first_row + i as u32, row);
            Ok(())
        })
}
