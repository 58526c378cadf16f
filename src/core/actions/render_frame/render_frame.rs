use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_frame::ports::scene_tracer::SceneTracer;
use crate::core::actions::render_frame::render_rows_parallel_rayon::render_rows_parallel;
use crate::core::data::framebuffer::Framebuffer;
use crate::core::data::resolution::Resolution;

/// Renders a complete frame in one parallel pass.
///
/// Convenience over the banded path the progressive controller takes;
/// benchmarks and whole-frame callers use this directly.
pub fn render_frame<S, C>(
    scene: &S,
    resolution: Resolution,
    cancel: &C,
) -> Result<Framebuffer, Cancelled>
where
    S: SceneTracer,
    C: CancelToken,
{
    let mut framebuffer = Framebuffer::new(resolution);
    let rows = 0..resolution.height();

    render_rows_parallel(
        scene,
        resolution,
        rows.clone(),
        framebuffer.band_mut(rows),
        cancel,
    )?;

    Ok(framebuffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::colour::Colour;

    #[derive(Debug)]
    struct StubConstantScene {
        colour: Colour,
    }

    impl SceneTracer for StubConstantScene {
        fn trace(&self, _: f32, _: f32) -> Colour {
            self.colour
        }
    }

    #[test]
    fn test_every_pixel_gets_the_encoded_scene_colour() {
        let scene = StubConstantScene {
            colour: Colour {
                r: 1.0,
                g: 0.0,
                b: 0.0,
            },
        };
        let resolution = Resolution::new(16, 10).unwrap();

        let framebuffer = render_frame(&scene, resolution, &NeverCancel).unwrap();

        let expected = scene.colour.saturate().to_srgb();
        assert!(framebuffer.pixels().iter().all(|&pixel| pixel == expected));
    }

    #[test]
    fn test_cancelled_render_returns_no_frame() {
        let scene = StubConstantScene {
            colour: Colour::BLACK,
        };
        let resolution = Resolution::new(16, 10).unwrap();

        let result = render_frame(&scene, resolution, &|| true);

        assert_eq!(result, Err(Cancelled));
    }
}
