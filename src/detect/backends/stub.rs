use anyhow::Result;
use sha2::{Digest, Sha256};

use crate::detect::backend::DetectorBackend;
use crate::detect::result::{BoundingBox, Detection};

// PPE catalog indices used by the synthetic scene.
const CLASS_HARDHAT: usize = 0;
const CLASS_NO_HARDHAT: usize = 2;
const CLASS_NO_SAFETY_VEST: usize = 4;
const CLASS_PERSON: usize = 5;
const CLASS_SAFETY_VEST: usize = 7;

/// Stub backend for tests and the demo bin.
///
/// Synthesizes a small PPE scene (one worker, headgear, vest) from a hash of
/// the frame bytes, so identical frames always yield identical detections
/// and distinct frames exercise both the compliant and violation paths.
pub struct StubBackend;

impl StubBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectorBackend for StubBackend {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn detect(&mut self, pixels: &[u8], width: u32, height: u32) -> Result<Vec<Detection>> {
        let hash: [u8; 32] = Sha256::digest(pixels).into();
        let w = width as f32;
        let h = height as f32;

        let conf = |byte: u8| 0.5 + (byte as f32 / 255.0) * 0.49;

        let person = Detection::new(
            BoundingBox::new(0.30 * w, 0.20 * h, 0.70 * w, 0.92 * h),
            conf(hash[0]),
            CLASS_PERSON,
        );

        let headgear_class = if hash[1] % 2 == 0 {
            CLASS_HARDHAT
        } else {
            CLASS_NO_HARDHAT
        };
        let headgear = Detection::new(
            BoundingBox::new(0.40 * w, 0.05 * h, 0.60 * w, 0.20 * h),
            conf(hash[2]),
            headgear_class,
        );

        let vest_class = if hash[3] % 2 == 0 {
            CLASS_SAFETY_VEST
        } else {
            CLASS_NO_SAFETY_VEST
        };
        let vest = Detection::new(
            BoundingBox::new(0.35 * w, 0.30 * h, 0.65 * w, 0.60 * h),
            conf(hash[4]),
            vest_class,
        );

        Ok(vec![person, headgear, vest])
    }
}
