//! Annotation rendering.
//!
//! Draws one frame's detections over the original pixel content: a hollow
//! rectangle per box, color-coded by compliance status, with a text label
//! above the box's top-left corner. Rendering is total over arbitrary
//! detector output: unknown class indices get a fallback label and
//! degenerate boxes are skipped, so one bad detection never discards the
//! rest of the frame.

use ab_glyph::{FontRef, PxScale};
use anyhow::{anyhow, Result};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::catalog::{classify, ClassCatalog, Compliance};
use crate::detect::Detection;

/// Box/label color for detections missing required safety equipment.
pub const VIOLATION_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Box/label color for compliant detections.
pub const COMPLIANT_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Vertical gap in pixels between a label baseline and its box.
const LABEL_GAP: i32 = 2;

const DEFAULT_BOX_THICKNESS: u32 = 2;
const DEFAULT_LABEL_SCALE: f32 = 16.0;

// Label font is embedded so rendering never depends on host font paths.
static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Resolve the single color policy: violation classes render red, everything
/// else green. Both the single-image and live-video paths go through here.
pub fn compliance_color(class_name: &str) -> Rgb<u8> {
    match classify(class_name) {
        Compliance::Violation => VIOLATION_COLOR,
        Compliance::Compliant => COMPLIANT_COLOR,
    }
}

/// Label text for a detection: class name plus confidence to two decimals.
pub fn label_text(class_name: &str, confidence: f32) -> String {
    format!("{} {:.2}", class_name, confidence)
}

/// Stateless box-and-label renderer.
///
/// Holds only immutable style parameters and the parsed label font, so one
/// `Annotator` may be shared across threads and called concurrently on
/// independent (image, detections) pairs.
pub struct Annotator {
    font: FontRef<'static>,
    box_thickness: u32,
    label_scale: f32,
}

impl Annotator {
    pub fn new() -> Result<Self> {
        Self::with_style(DEFAULT_BOX_THICKNESS, DEFAULT_LABEL_SCALE)
    }

    pub fn with_style(box_thickness: u32, label_scale: f32) -> Result<Self> {
        if box_thickness == 0 {
            return Err(anyhow!("box thickness must be >= 1"));
        }
        if !(label_scale > 0.0) {
            return Err(anyhow!("label scale must be > 0"));
        }
        let font = FontRef::try_from_slice(FONT_BYTES)
            .map_err(|_| anyhow!("embedded label font is invalid"))?;
        Ok(Self {
            font,
            box_thickness,
            label_scale,
        })
    }

    /// Render all detections over a copy of `image`.
    ///
    /// The output has the same dimensions and color layout as the input; an
    /// empty detection set returns the input pixels unchanged.
    pub fn annotate(
        &self,
        image: &RgbImage,
        detections: &[Detection],
        catalog: &ClassCatalog,
    ) -> RgbImage {
        let mut out = image.clone();
        for det in detections {
            self.draw_detection(&mut out, det, catalog);
        }
        out
    }

    fn draw_detection(&self, out: &mut RgbImage, det: &Detection, catalog: &ClassCatalog) {
        if det.bbox.is_degenerate() {
            return;
        }

        let label = catalog.resolve(det.class_index);
        let color = compliance_color(label.name());

        let x = det.bbox.x1.round() as i32;
        let y = det.bbox.y1.round() as i32;
        let w = det.bbox.width().round() as u32;
        let h = det.bbox.height().round() as u32;

        // Hollow rects are 1px; stack inset rings for the configured thickness.
        for ring in 0..self.box_thickness {
            let inset = ring as i32;
            let ring_w = w.saturating_sub(2 * ring);
            let ring_h = h.saturating_sub(2 * ring);
            if ring_w == 0 || ring_h == 0 {
                break;
            }
            let rect = Rect::at(x + inset, y + inset).of_size(ring_w, ring_h);
            draw_hollow_rect_mut(out, rect, color);
        }

        let text = label_text(label.name(), det.confidence);
        let scale = PxScale::from(self.label_scale);
        // Immediately above the top-left corner, clamped so a box near the
        // top of the frame cannot push the label above y = 0.
        let text_y = (y - self.label_scale.ceil() as i32 - LABEL_GAP).max(0);
        let text_x = x.max(0);
        draw_text_mut(out, color, text_x, text_y, scale, &self.font, &text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::BoundingBox;

    fn gray_image(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([128, 128, 128]))
    }

    #[test]
    fn empty_detections_return_input_unchanged() {
        let annotator = Annotator::new().unwrap();
        let img = gray_image(64, 64);
        let out = annotator.annotate(&img, &[], &ClassCatalog::ppe());
        assert_eq!(out, img);
    }

    #[test]
    fn violation_box_is_drawn_in_red() {
        let annotator = Annotator::with_style(1, 12.0).unwrap();
        let det = Detection::new(BoundingBox::new(10.0, 30.0, 50.0, 60.0), 0.87, 2);
        let out = annotator.annotate(&gray_image(100, 100), &[det], &ClassCatalog::ppe());
        assert_eq!(*out.get_pixel(10, 30), VIOLATION_COLOR);
        assert_eq!(*out.get_pixel(49, 30), VIOLATION_COLOR);
        assert_eq!(*out.get_pixel(10, 59), VIOLATION_COLOR);
    }

    #[test]
    fn degenerate_box_is_skipped_without_panicking() {
        let annotator = Annotator::new().unwrap();
        let img = gray_image(64, 64);
        // Inverted corners violate the upstream contract; defined behavior
        // here is "draw nothing".
        let det = Detection::new(BoundingBox::new(50.0, 50.0, 10.0, 10.0), 0.9, 0);
        let out = annotator.annotate(&img, &[det], &ClassCatalog::ppe());
        assert_eq!(out, img);
    }

    #[test]
    fn label_near_frame_top_is_clamped_on_canvas() {
        let annotator = Annotator::new().unwrap();
        let det = Detection::new(BoundingBox::new(5.0, 0.0, 40.0, 30.0), 0.5, 0);
        // Must not panic; output keeps input dimensions.
        let out = annotator.annotate(&gray_image(64, 64), &[det], &ClassCatalog::ppe());
        assert_eq!(out.dimensions(), (64, 64));
    }

    #[test]
    fn label_text_formats_confidence_to_two_decimals() {
        assert_eq!(label_text("Hardhat", 0.9), "Hardhat 0.90");
        assert_eq!(label_text("NO-Mask", 0.754), "NO-Mask 0.75");
    }
}
