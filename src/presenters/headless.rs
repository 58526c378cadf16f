use log::{debug, info};

use crate::controllers::ports::viewer::ViewerPort;
use crate::core::data::framebuffer::Framebuffer;

/// Viewer for renders without a window.
///
/// Statuses go to the log and frames are acknowledged but not shown.
/// Reports itself closed from the start, so the controller skips the
/// close-wait phase and the process exits once the file is written.
#[derive(Debug, Default)]
pub struct HeadlessViewer {
    frames_seen: u32,
}

impl HeadlessViewer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewerPort for HeadlessViewer {
    fn publish(&mut self, framebuffer: &Framebuffer) {
        self.frames_seen += 1;
        debug!(
            "frame update {} ({}x{})",
            self.frames_seen,
            framebuffer.resolution().width(),
            framebuffer.resolution().height()
        );
    }

    fn set_status(&mut self, status: &str) {
        info!("{}", status);
    }

    fn cancel_requested(&mut self) -> bool {
        false
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn wait(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_reports_closed_so_nothing_blocks() {
        let mut viewer = HeadlessViewer::new();

        assert!(viewer.is_closed());
        assert!(!viewer.cancel_requested());
        viewer.wait();
    }

    #[test]
    fn test_accepts_frames_and_statuses() {
        let mut viewer = HeadlessViewer::new();
        let framebuffer = Framebuffer::new(Resolution::new(4, 4).unwrap());

        viewer.publish(&framebuffer);
        viewer.publish(&framebuffer);
        viewer.set_status("Render time: 1ms");

        assert_eq!(viewer.frames_seen, 2);
    }
}
