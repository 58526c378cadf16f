use crate::core::actions::render_frame::ports::scene_tracer::SceneTracer;
use crate::core::data::colour::Colour;

/// Visualises the camera mapping directly: red encodes `u` and green
/// encodes `v`, both shifted from `[-1, 1]` into `[0, 1]`.
#[derive(Debug, Default)]
pub struct UvGradientScene;

impl SceneTracer for UvGradientScene {
    fn trace(&self, u: f32, v: f32) -> Colour {
        Colour {
            r: (u + 1.0) * 0.5,
            g: (v + 1.0) * 0.5,
            b: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_is_mid_grey_in_red_and_green() {
        let colour = UvGradientScene.trace(0.0, 0.0);

        assert_eq!(colour.r, 0.5);
        assert_eq!(colour.g, 0.5);
        assert_eq!(colour.b, 0.0);
    }

    #[test]
    fn test_corners_span_the_unit_range() {
        let bottom_left = UvGradientScene.trace(-1.0, -1.0);
        let top_right = UvGradientScene.trace(1.0, 1.0);

        assert_eq!((bottom_left.r, bottom_left.g), (0.0, 0.0));
        assert_eq!((top_right.r, top_right.g), (1.0, 1.0));
    }

    #[test]
    fn test_red_tracks_u_only() {
        let left = UvGradientScene.trace(-0.5, 0.25);
        let right = UvGradientScene.trace(0.5, 0.25);

        assert!(right.r > left.r);
        assert_eq!(left.g, right.g);
    }
}
