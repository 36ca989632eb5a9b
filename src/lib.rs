//! SiteWatch Kernel
//!
//! Detection post-processing for PPE compliance monitoring on industrial and
//! construction sites. The kernel consumes one frame's raw detector output
//! (boxes, confidences, class indices) and produces:
//!
//! - an annotated image with boxes and labels color-coded by compliance
//!   status (`NO-`-prefixed classes render red, everything else green), and
//! - an ordered per-class count summary for the frame.
//!
//! # Module Structure
//!
//! - `catalog`: fixed class catalog, bounds-checked lookup, `NO-` prefix rule
//! - `detect`: detection types, detector backend trait, backend registry
//! - `annotate`: box/label rendering over the original pixels
//! - `summary`: per-frame class counts with an explicit empty sentinel
//! - `pipeline`: serial per-source detect + post-process loop
//! - `config`: file + environment configuration for the CLI bins
//!
//! Both post-processing operations are pure functions of their arguments:
//! they hold no cross-frame state and are safe to run concurrently on
//! independent frames. Model loading, video capture, and any presentation
//! layer live outside this crate.

pub mod annotate;
pub mod catalog;
pub mod config;
pub mod detect;
pub mod pipeline;
pub mod summary;

pub use annotate::{compliance_color, label_text, Annotator, COMPLIANT_COLOR, VIOLATION_COLOR};
pub use catalog::{
    classify, is_violation, ClassCatalog, ClassLabel, Compliance, PPE_CLASS_NAMES,
    VIOLATION_PREFIX,
};
pub use config::SitewatchConfig;
pub use detect::{BackendRegistry, BoundingBox, Detection, DetectorBackend, StubBackend};
pub use pipeline::{FrameProcessor, ProcessedFrame};
pub use summary::{summarize, ClassCount, FrameSummary};
