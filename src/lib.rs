mod config;
mod controllers;
mod core;
mod presenters;
mod storage;

pub use config::render_settings::{ProgressiveCadence, RenderSettings};
pub use config::scene_file::{SceneFileError, load_render_settings};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::ports::viewer::ViewerPort;
pub use controllers::progressive::{ProgressiveController, RenderOutcome};
pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_frame::ports::scene_tracer::SceneTracer;
pub use crate::core::actions::render_frame::render_frame::render_frame;
pub use crate::core::actions::render_frame::render_rows::render_rows;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::framebuffer::Framebuffer;
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::scenes::factory::scene_factory;
pub use crate::core::scenes::scene_kinds::SceneKinds;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::headless::HeadlessViewer;
#[cfg(feature = "viewer")]
pub use presenters::minifb::viewer::MinifbViewer;
