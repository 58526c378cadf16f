use crate::core::data::colour::Colour;

/// The scene oracle: the only thing the render loop knows about a scene.
///
/// `u` and `v` are the camera-space coordinates produced by the pixel
/// mapping. Implementations return raw linear radiance, which may lie
/// outside `[0, 1]`; saturation and gamma encoding are the render loop's
/// job. Tracing is invoked concurrently from the worker pool and must not
/// fail: whatever a scene does internally, it answers with a colour.
pub trait SceneTracer: Send + Sync {
    fn trace(&self, u: f32, v: f32) -> Colour;
}

impl SceneTracer for Box<dyn SceneTracer> {
    fn trace(&self, u: f32, v: f32) -> Colour {
        (**self).trace(u, v)
    }
}
