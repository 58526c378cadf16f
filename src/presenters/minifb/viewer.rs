use std::time::Duration;

use minifb::{Key, Window, WindowOptions};

use crate::controllers::ports::viewer::ViewerPort;
use crate::core::data::framebuffer::Framebuffer;
use crate::core::data::resolution::Resolution;
use crate::presenters::minifb::adapter::pack_0rgb;

const WINDOW_TITLE: &str = "Raytrace";
const EVENT_POLL_INTERVAL: Duration = Duration::from_micros(16_667);

/// Windowed viewer backed by a minifb window.
///
/// minifb is a polling API, so events are pumped whenever the controller
/// publishes a frame, polls for a cancel request or waits; the escape key
/// and the window close button both count as a cancel request.
pub struct MinifbViewer {
    window: Window,
}

impl MinifbViewer {
    pub fn open(resolution: Resolution) -> Result<Self, minifb::Error> {
        let mut window = Window::new(
            WINDOW_TITLE,
            resolution.width() as usize,
            resolution.height() as usize,
            WindowOptions::default(),
        )?;
        window.limit_update_rate(Some(EVENT_POLL_INTERVAL));

        Ok(Self { window })
    }
}

impl ViewerPort for MinifbViewer {
    fn publish(&mut self, framebuffer: &Framebuffer) {
        let resolution = framebuffer.resolution();
        self.window
            .update_with_buffer(
                &pack_0rgb(framebuffer),
                resolution.width() as usize,
                resolution.height() as usize,
            )
            .expect("Failed to update window");
    }

    fn set_status(&mut self, status: &str) {
        self.window.set_title(status);
    }

    fn cancel_requested(&mut self) -> bool {
        self.window.update();

        !self.window.is_open() || self.window.is_key_down(Key::Escape)
    }

    fn is_closed(&self) -> bool {
        !self.window.is_open() || self.window.is_key_down(Key::Escape)
    }

    fn wait(&mut self) {
        self.window.update();
    }
}
