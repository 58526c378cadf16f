use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::core::data::resolution::Resolution;
use crate::core::scenes::scene_kinds::SceneKinds;

const DEFAULT_WIDTH: u32 = 1024;
const DEFAULT_HEIGHT: u32 = 1024;
const DEFAULT_ROWS_PER_REFRESH: NonZeroU32 = NonZeroU32::new(10).unwrap();
const DEFAULT_OUTPUT: &str = "output.ppm";

/// How often the viewer sees partial frames.
///
/// Disabled means the frame is rendered in one piece and shown only when
/// finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressiveCadence {
    pub enabled: bool,
    pub rows_per_refresh: NonZeroU32,
}

impl Default for ProgressiveCadence {
    fn default() -> Self {
        Self {
            enabled: false,
            rows_per_refresh: DEFAULT_ROWS_PER_REFRESH,
        }
    }
}

/// Everything a render run needs, fixed before the first ray.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub resolution: Resolution,
    pub cadence: ProgressiveCadence,
    pub output_path: PathBuf,
    pub scene: SceneKinds,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let resolution = Resolution::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
            .unwrap_or_else(|_| unreachable!("default resolution is valid"));

        Self {
            resolution,
            cadence: ProgressiveCadence::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            scene: SceneKinds::default(),
        }
    }
}
