//! Per-frame detection summaries.
//!
//! A summary is rebuilt from scratch for every frame and never merged
//! across frames by the kernel; cross-frame statistics belong to callers.

use std::fmt;

use serde::Serialize;

use crate::catalog::ClassCatalog;
use crate::detect::Detection;

/// Occurrence count for one class within a single frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassCount {
    pub class_name: String,
    pub count: u32,
}

/// Aggregate over one frame's detections.
///
/// `Empty` is an explicit sentinel so callers can tell "nothing detected"
/// apart from a populated result without inspecting rendered text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum FrameSummary {
    Empty,
    Counts(Vec<ClassCount>),
}

impl FrameSummary {
    pub fn is_empty(&self) -> bool {
        matches!(self, FrameSummary::Empty)
    }

    /// Count for a class name, or `None` when the class was not detected.
    pub fn count_for(&self, class_name: &str) -> Option<u32> {
        match self {
            FrameSummary::Empty => None,
            FrameSummary::Counts(counts) => counts
                .iter()
                .find(|entry| entry.class_name == class_name)
                .map(|entry| entry.count),
        }
    }

    /// Class names in first-seen order.
    pub fn class_names(&self) -> Vec<&str> {
        match self {
            FrameSummary::Empty => Vec::new(),
            FrameSummary::Counts(counts) => counts
                .iter()
                .map(|entry| entry.class_name.as_str())
                .collect(),
        }
    }
}

impl fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameSummary::Empty => write!(f, "No detections found"),
            FrameSummary::Counts(counts) => {
                let rendered: Vec<String> = counts
                    .iter()
                    .map(|entry| format!("{}: {}", entry.class_name, entry.count))
                    .collect();
                write!(f, "{}", rendered.join(", "))
            }
        }
    }
}

/// Tally per-class occurrence counts for one frame's detections.
///
/// Single pass in detector order; class names resolve through the same
/// bounds-checked catalog lookup as annotation, so an out-of-range index
/// counts under its fallback label instead of failing. Insertion order is
/// the first-seen order of classes within the frame.
pub fn summarize(detections: &[Detection], catalog: &ClassCatalog) -> FrameSummary {
    if detections.is_empty() {
        return FrameSummary::Empty;
    }

    let mut counts: Vec<ClassCount> = Vec::new();
    for det in detections {
        let name = catalog.resolve(det.class_index).name().to_string();
        match counts.iter_mut().find(|entry| entry.class_name == name) {
            Some(entry) => entry.count += 1,
            None => counts.push(ClassCount {
                class_name: name,
                count: 1,
            }),
        }
    }
    FrameSummary::Counts(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::BoundingBox;

    fn det(class_index: usize) -> Detection {
        Detection::new(BoundingBox::new(0.0, 0.0, 10.0, 10.0), 0.9, class_index)
    }

    #[test]
    fn empty_input_yields_the_sentinel() {
        let summary = summarize(&[], &ClassCatalog::ppe());
        assert!(summary.is_empty());
        assert_eq!(summary.to_string(), "No detections found");
        assert_ne!(summary, summarize(&[det(0)], &ClassCatalog::ppe()));
    }

    #[test]
    fn counts_preserve_first_seen_order() {
        // Person, Hardhat, Person
        let detections = vec![det(5), det(0), det(5)];
        let summary = summarize(&detections, &ClassCatalog::ppe());

        assert_eq!(summary.class_names(), vec!["Person", "Hardhat"]);
        assert_eq!(summary.count_for("Person"), Some(2));
        assert_eq!(summary.count_for("Hardhat"), Some(1));
        assert_eq!(summary.to_string(), "Person: 2, Hardhat: 1");
    }

    #[test]
    fn out_of_range_index_counts_under_fallback_label() {
        let summary = summarize(&[det(99)], &ClassCatalog::ppe());
        assert_eq!(summary.count_for("Class_99"), Some(1));
        assert_eq!(summary.to_string(), "Class_99: 1");
    }
}
