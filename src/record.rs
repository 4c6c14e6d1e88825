//! Per-item result record combining item metadata with extracted specifications.
//!
//! ## Example
//!
//! ```rust
//! use specsieve::ProductRecord;
//!
//! let record = ProductRecord::new(0, "Acme", "X-100", "Cordless drill", &["Weight: 1.2 kg"]);
//! assert_eq!(record.name, "Acme X-100");
//! assert_eq!(record.specs.get("Weight"), Some(" 1.2 kg"));
//! ```

use crate::error::Result;
use crate::spec_line::{to_map, SpecMap};
use serde::Serialize;

/// Line recorded when no source produced specifications.
pub const NOT_FOUND_LINE: &str = "specifications not found on any source";

/// Extraction result for one input item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProductRecord {
    /// Position of the item in its input file
    pub position: usize,

    /// Brand and article joined by a space.
    pub name: String,

    pub description: String,

    /// Specifications from the first source that had any.
    ///
    /// Holds a single [`NOT_FOUND_LINE`] key when extraction failed everywhere.
    pub specs: SpecMap,
}

impl ProductRecord {
    pub fn new<S: AsRef<str>>(
        position: usize,
        brand: &str,
        article: &str,
        description: &str,
        lines: &[S],
    ) -> Self {
        let specs = if lines.is_empty() {
            to_map([NOT_FOUND_LINE])
        } else {
            to_map(lines)
        };

        Self {
            position,
            name: format!("{} {}", brand, article).trim().to_string(),
            description: description.to_string(),
            specs,
        }
    }

    /// Whether any source yielded specifications for this item.
    pub fn found(&self) -> bool {
        self.specs.get(NOT_FOUND_LINE).is_none()
    }

    /// Pretty-printed JSON for this record.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lines_record_not_found() {
        let record = ProductRecord::new::<&str>(3, "Acme", "X1", "Drill", &[]);
        assert!(!record.found());
        assert_eq!(record.specs.get(NOT_FOUND_LINE), Some(""));
    }

    #[test]
    fn serializes_with_specs_in_order() {
        let record = ProductRecord::new(1, "Bosch", "GSR 12V", "Drill", &["Вес: 1 кг", "Цвет: синий"]);
        let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(json["position"], 1);
        assert_eq!(json["name"], "Bosch GSR 12V");
        assert_eq!(json["specs"]["Вес"], " 1 кг");
        assert!(record.found());
    }
}
