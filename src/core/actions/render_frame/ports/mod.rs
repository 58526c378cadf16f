pub mod scene_tracer;
