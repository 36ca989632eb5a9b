use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel coordinates.
///
/// The upstream detector contract guarantees `x1 < x2`, `y1 < y2` and
/// clipping to image bounds; the kernel does not re-validate, but degenerate
/// boxes are skipped at render time rather than crashing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        (self.x2 - self.x1).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.y2 - self.y1).max(0.0)
    }

    /// True when the box has no drawable area (inverted or zero extent).
    pub fn is_degenerate(&self) -> bool {
        self.width() < 1.0 || self.height() < 1.0
    }
}

/// One recognized object instance in a single frame.
///
/// Created fresh per inference call, immutable, and discarded once the
/// frame's annotation and summary are produced. `class_index` is meaningful
/// only relative to the catalog the detector was trained against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bbox: BoundingBox,
    pub confidence: f32,
    pub class_index: usize,
}

impl Detection {
    pub fn new(bbox: BoundingBox, confidence: f32, class_index: usize) -> Self {
        Self {
            bbox,
            confidence,
            class_index,
        }
    }
}
