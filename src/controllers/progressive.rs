use std::io;
use std::num::NonZeroU32;
use std::ops::Range;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::render_settings::ProgressiveCadence;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::ports::viewer::ViewerPort;
use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled};
use crate::core::actions::render_frame::ports::scene_tracer::SceneTracer;
use crate::core::actions::render_frame::render_rows_parallel_rayon::render_rows_parallel;
use crate::core::data::colour::Colour;
use crate::core::data::framebuffer::Framebuffer;
use crate::core::data::resolution::Resolution;
use crate::core::util::row_bands::row_bands;

/// How often the viewer is polled for a cancel request while a band
/// renders on the worker thread.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Completed,
    Cancelled,
}

/// Drives a render to completion band by band.
///
/// With cadence enabled the frame is rendered in bands of
/// `rows_per_refresh` rows; after each band the current frame is pushed to
/// the viewer with a running elapsed-time status. With cadence disabled
/// the whole frame renders as a single band. Either way the finished frame
/// is published once more with the total render time, handed to the file
/// presenter exactly once, and the viewer is then held open until it
/// closes or the user cancels.
///
/// Cancellation, from the token or from the viewer, abandons the run: rows
/// already under way finish, nothing further is published or persisted,
/// and the run reports [`RenderOutcome::Cancelled`]. Each band renders on
/// a scoped worker thread while this thread keeps polling the viewer, so
/// an escape or close request is latched into a [`CancelFlag`] and stops
/// the row workers mid-band, even when the whole frame is a single band.
pub struct ProgressiveController<V, P> {
    viewer: V,
    presenter: P,
}

impl<V: ViewerPort, P: FilePresenterPort> ProgressiveController<V, P> {
    pub fn new(viewer: V, presenter: P) -> Self {
        Self { viewer, presenter }
    }

    pub fn run<S, C>(
        &mut self,
        scene: &S,
        resolution: Resolution,
        cadence: ProgressiveCadence,
        output_path: impl AsRef<Path>,
        cancel: &C,
    ) -> io::Result<RenderOutcome>
    where
        S: SceneTracer,
        C: CancelToken,
    {
        let rows_per_band = if cadence.enabled {
            cadence.rows_per_refresh
        } else {
            NonZeroU32::MAX
        };

        let mut framebuffer = Framebuffer::new(resolution);
        let viewer_cancel = CancelFlag::new();
        let render_cancel = || cancel.is_cancelled() || viewer_cancel.is_cancelled();
        let start = Instant::now();

        for band in row_bands(resolution.height(), rows_per_band) {
            if render_cancel.is_cancelled() || self.viewer.cancel_requested() {
                return Ok(RenderOutcome::Cancelled);
            }

            if let Err(Cancelled) = self.render_band(
                scene,
                resolution,
                band.clone(),
                framebuffer.band_mut(band),
                &render_cancel,
                &viewer_cancel,
            ) {
                return Ok(RenderOutcome::Cancelled);
            }

            if cadence.enabled {
                self.viewer.publish(&framebuffer);
                self.viewer
                    .set_status(&format!("Current render time: {}ms", start.elapsed().as_millis()));
            }
        }

        let total = start.elapsed().as_millis();
        self.viewer.set_status(&format!("Render time: {}ms", total));
        self.viewer.publish(&framebuffer);

        self.presenter.present(&framebuffer, output_path)?;

        while !self.viewer.is_closed() && !self.viewer.cancel_requested() {
            self.viewer.wait();
        }

        Ok(RenderOutcome::Completed)
    }

    /// Renders one band on a scoped worker thread while this thread polls
    /// the viewer, which must stay on the thread that created its window.
    /// A cancel request seen mid-band is latched into `viewer_cancel`,
    /// where the row workers pick it up through the render token, and the
    /// band reports itself cancelled even when its in-flight rows all ran
    /// to completion.
    fn render_band<S, T>(
        &mut self,
        scene: &S,
        resolution: Resolution,
        rows: Range<u32>,
        band_pixels: &mut [Colour],
        render_cancel: &T,
        viewer_cancel: &CancelFlag,
    ) -> Result<(), Cancelled>
    where
        S: SceneTracer,
        T: CancelToken,
    {
        let (done_sender, done_receiver) = mpsc::channel();

        let rendered = thread::scope(|workers| {
            let worker = workers.spawn(move || {
                let result =
                    render_rows_parallel(scene, resolution, rows, band_pixels, render_cancel);
                let _ = done_sender.send(());
                result
            });

            loop {
                match done_receiver.recv_timeout(CANCEL_POLL_INTERVAL) {
                    Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        if self.viewer.cancel_requested() {
                            viewer_cancel.request();
                        }
                    }
                }
            }

            worker.join().expect("Thread panicked during row rendering")
        });

        rendered?;

        if viewer_cancel.is_cancelled() {
            return Err(Cancelled);
        }

        Ok(())
    }
}
