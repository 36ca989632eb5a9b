//! Per-frame processing loop.
//!
//! One inference plus one annotate/summarize pair per frame, invoked
//! serially per video source. The processor owns its backend, so multiple
//! independent sources can each run their own `FrameProcessor` in parallel
//! without coordination; no cross-frame state is shared by the
//! post-processing operations themselves.

use anyhow::{anyhow, Result};
use image::RgbImage;

use crate::annotate::Annotator;
use crate::catalog::ClassCatalog;
use crate::detect::{Detection, DetectorBackend};
use crate::summary::{summarize, FrameSummary};

/// Output of processing one frame.
pub struct ProcessedFrame {
    pub annotated: RgbImage,
    pub summary: FrameSummary,
    pub detections: Vec<Detection>,
}

/// Serial detect + post-process pipeline for one video source.
pub struct FrameProcessor {
    backend: Box<dyn DetectorBackend>,
    annotator: Annotator,
    catalog: ClassCatalog,
    confidence_threshold: f32,
}

impl FrameProcessor {
    pub fn new(
        backend: Box<dyn DetectorBackend>,
        annotator: Annotator,
        catalog: ClassCatalog,
        confidence_threshold: f32,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&confidence_threshold) {
            return Err(anyhow!("confidence threshold must be within [0, 1]"));
        }
        let mut processor = Self {
            backend,
            annotator,
            catalog,
            confidence_threshold,
        };
        processor.backend.warm_up()?;
        Ok(processor)
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Process one RGB frame: detect, filter by confidence, annotate,
    /// summarize.
    pub fn process(&mut self, pixels: &[u8], width: u32, height: u32) -> Result<ProcessedFrame> {
        let image = RgbImage::from_raw(width, height, pixels.to_vec())
            .ok_or_else(|| anyhow!("pixel buffer does not match {}x{} RGB frame", width, height))?;

        let mut detections = self.backend.detect(pixels, width, height)?;
        detections.retain(|det| det.confidence >= self.confidence_threshold);

        for det in &detections {
            if self.catalog.resolve(det.class_index).is_fallback() {
                log::warn!(
                    "detection class index {} outside catalog ({} classes); using fallback label",
                    det.class_index,
                    self.catalog.len()
                );
            }
        }

        let annotated = self.annotator.annotate(&image, &detections, &self.catalog);
        let summary = summarize(&detections, &self.catalog);

        Ok(ProcessedFrame {
            annotated,
            summary,
            detections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::StubBackend;

    #[test]
    fn processor_is_deterministic_per_frame_content() {
        let mut processor = FrameProcessor::new(
            Box::new(StubBackend::new()),
            Annotator::new().unwrap(),
            ClassCatalog::ppe(),
            0.25,
        )
        .unwrap();

        let frame = vec![42u8; 160 * 120 * 3];
        let a = processor.process(&frame, 160, 120).unwrap();
        let b = processor.process(&frame, 160, 120).unwrap();

        assert_eq!(a.detections, b.detections);
        assert_eq!(a.summary, b.summary);
        assert_eq!(a.annotated, b.annotated);
        assert!(!a.summary.is_empty());
    }

    #[test]
    fn mismatched_pixel_buffer_is_rejected() {
        let mut processor = FrameProcessor::new(
            Box::new(StubBackend::new()),
            Annotator::new().unwrap(),
            ClassCatalog::ppe(),
            0.25,
        )
        .unwrap();

        assert!(processor.process(&[0u8; 10], 160, 120).is_err());
    }

    #[test]
    fn threshold_outside_unit_interval_is_rejected() {
        let result = FrameProcessor::new(
            Box::new(StubBackend::new()),
            Annotator::new().unwrap(),
            ClassCatalog::ppe(),
            1.5,
        );
        assert!(result.is_err());
    }
}
