use crate::core::actions::render_frame::ports::scene_tracer::SceneTracer;
use crate::core::scenes::scene_kinds::SceneKinds;
use crate::core::scenes::sphere::SphereScene;
use crate::core::scenes::uv_gradient::UvGradientScene;

#[must_use]
pub fn scene_factory(kind: SceneKinds) -> Box<dyn SceneTracer> {
    match kind {
        SceneKinds::Sphere => Box::new(SphereScene),
        SceneKinds::UvGradient => Box::new(UvGradientScene),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_builds_the_uv_gradient() {
        let scene = scene_factory(SceneKinds::UvGradient);

        // The gradient never produces blue.
        let colour = scene.trace(1.0, 1.0);
        assert_eq!(colour.b, 0.0);
        assert_eq!(colour.r, 1.0);
    }

    #[test]
    fn test_factory_builds_the_sphere() {
        let scene = scene_factory(SceneKinds::Sphere);

        // Off-silhouette rays land in the sky, which is blue-heavy.
        let colour = scene.trace(1.0, 1.0);
        assert!(colour.b > 0.9);
    }

    #[test]
    fn test_all_kinds_are_constructible() {
        for &kind in SceneKinds::ALL {
            let scene = scene_factory(kind);
            let _ = scene.trace(0.0, 0.0);
        }
    }
}
