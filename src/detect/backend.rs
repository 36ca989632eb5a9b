use anyhow::Result;

use crate::detect::result::Detection;

/// Detector backend trait.
///
/// A backend wraps one loaded model instance and is the only shared, mutable
/// entity in the pipeline. The post-processing operations (`annotate`,
/// `summarize`) consume a backend's *output* and never touch the backend
/// itself, so they stay free of locking concerns.
///
/// Implementations must return boxes in pixel coordinates with
/// `x1 < x2, y1 < y2`, clipped to the frame, confidences in `[0, 1]`, and
/// class indices relative to the catalog the model was trained against.
pub trait DetectorBackend: Send {
    /// Backend identifier.
    fn name(&self) -> &'static str;

    /// Run detection on one RGB frame, returning detections in the
    /// detector's native output order.
    fn detect(&mut self, pixels: &[u8], width: u32, height: u32) -> Result<Vec<Detection>>;

    /// Optional warm-up hook.
    fn warm_up(&mut self) -> Result<()> {
        Ok(())
    }
}
