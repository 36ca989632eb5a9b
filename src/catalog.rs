//! Class catalog and compliance classification.
//!
//! The catalog is the fixed, ordered mapping from a detector's class index
//! to a human-readable class name. Indices are stable for the lifetime of a
//! given trained model; an index without a catalog entry is tolerated and
//! resolves to a deterministic fallback label instead of failing.

use serde::{Deserialize, Serialize};

/// Class names for the PPE detector, in training order.
pub const PPE_CLASS_NAMES: [&str; 10] = [
    "Hardhat",
    "Mask",
    "NO-Hardhat",
    "NO-Mask",
    "NO-Safety Vest",
    "Person",
    "Safety Cone",
    "Safety Vest",
    "machinery",
    "vehicle",
];

/// Prefix marking a detected class as a PPE violation.
pub const VIOLATION_PREFIX: &str = "NO-";

/// Compliance status derived from a class name. Never stored; recomputed
/// per detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compliance {
    Compliant,
    Violation,
}

/// Classify a class name by the `NO-` prefix rule.
///
/// The rule is string-prefix-based, not semantic: a custom catalog entry
/// named `NO-Gloves` classifies as a violation without any code change.
pub fn classify(class_name: &str) -> Compliance {
    if class_name.starts_with(VIOLATION_PREFIX) {
        Compliance::Violation
    } else {
        Compliance::Compliant
    }
}

/// Returns true when the class name denotes missing safety equipment.
pub fn is_violation(class_name: &str) -> bool {
    classify(class_name) == Compliance::Violation
}

/// Result of a bounds-checked catalog lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassLabel<'a> {
    /// Index resolved against the catalog.
    Known(&'a str),
    /// Index outside the catalog; carries the synthesized label.
    Fallback(String),
}

impl ClassLabel<'_> {
    pub fn name(&self) -> &str {
        match self {
            ClassLabel::Known(name) => name,
            ClassLabel::Fallback(label) => label,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ClassLabel::Fallback(_))
    }
}

/// Ordered, fixed mapping from class index to class name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassCatalog {
    names: Vec<String>,
}

impl ClassCatalog {
    /// The 10-class PPE catalog the bundled detector was trained against.
    pub fn ppe() -> Self {
        Self {
            names: PPE_CLASS_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Catalog for a differently-trained detector. The caller is responsible
    /// for supplying names in the detector's training order.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Bounds-checked lookup. Out-of-range indices resolve to the
    /// deterministic fallback label `Class_<index>` rather than failing, so
    /// one unexpected detection never discards the rest of the frame.
    pub fn resolve(&self, class_index: usize) -> ClassLabel<'_> {
        match self.names.get(class_index) {
            Some(name) => ClassLabel::Known(name),
            None => ClassLabel::Fallback(format!("Class_{}", class_index)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppe_catalog_has_ten_classes_in_training_order() {
        let catalog = ClassCatalog::ppe();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.resolve(0), ClassLabel::Known("Hardhat"));
        assert_eq!(catalog.resolve(5), ClassLabel::Known("Person"));
        assert_eq!(catalog.resolve(9), ClassLabel::Known("vehicle"));
    }

    #[test]
    fn out_of_range_index_resolves_to_fallback() {
        let catalog = ClassCatalog::ppe();
        let label = catalog.resolve(42);
        assert!(label.is_fallback());
        assert_eq!(label.name(), "Class_42");
    }

    #[test]
    fn prefix_rule_splits_catalog_into_violations_and_compliant() {
        let violations = ["NO-Hardhat", "NO-Mask", "NO-Safety Vest"];
        for name in PPE_CLASS_NAMES {
            assert_eq!(is_violation(name), violations.contains(&name), "{}", name);
        }
    }

    #[test]
    fn prefix_rule_is_not_substring_based() {
        // "NO-" must appear at the start of the name, not anywhere inside it.
        assert!(!is_violation("Person-NO-Entry-Sign"));
        assert!(is_violation("NO-Gloves"));
    }
}
