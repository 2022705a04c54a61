//! Tri-state table cells as produced by the page extractor

use serde::{Serialize, Serializer};

/// Text placeholders that upstream extraction emits for "not a value".
const PLACEHOLDERS: &[&str] = &["nan"];

/// One cell of an extracted table row.
///
/// `Empty` and `Absent` are kept apart end-to-end: a blank cell that the
/// extractor did read is not the same as a cell it never produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    /// Present with non-blank text
    Value(String),
    /// Present but blank
    Empty,
    /// No value at all
    #[default]
    Absent,
}

impl Cell {
    /// Build a cell from raw extractor text.
    ///
    /// `None` and zero-length text are absent; whitespace-only text is empty.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => Cell::Absent,
            Some("") => Cell::Absent,
            Some(s) if s.trim().is_empty() => Cell::Empty,
            Some(s) => Cell::Value(s.to_string()),
        }
    }

    /// Cell for owned text, classified through [`Cell::from_raw`]: `""` is
    /// absent and whitespace-only text is empty.
    pub fn value(s: impl Into<String>) -> Self {
        let s: String = s.into();
        Cell::from_raw(Some(s.as_str()))
    }

    /// True for `Value` text that only stands in for a missing value (`NaN`).
    pub fn is_placeholder(&self) -> bool {
        match self {
            Cell::Value(s) => PLACEHOLDERS
                .iter()
                .any(|p| s.trim().eq_ignore_ascii_case(p)),
            _ => false,
        }
    }

    /// Present means the cell carries something other than a missing marker.
    pub fn is_present(&self) -> bool {
        match self {
            Cell::Absent => false,
            Cell::Value(_) => !self.is_placeholder(),
            Cell::Empty => true,
        }
    }

    /// Text of a present cell; `Empty` reads as `""`.
    pub fn text(&self) -> Option<&str> {
        if !self.is_present() {
            return None;
        }
        match self {
            Cell::Value(s) => Some(s.as_str()),
            Cell::Empty => Some(""),
            Cell::Absent => None,
        }
    }

    /// Replace placeholder text with an explicit `Absent`.
    pub fn normalized(self) -> Self {
        if self.is_placeholder() {
            Cell::Absent
        } else {
            self
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.text() {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_tri_state() {
        assert_eq!(Cell::from_raw(None), Cell::Absent);
        assert_eq!(Cell::from_raw(Some("")), Cell::Absent);
        assert_eq!(Cell::from_raw(Some("   ")), Cell::Empty);
        assert_eq!(Cell::from_raw(Some("ATM")), Cell::Value("ATM".to_string()));
    }

    #[test]
    fn test_value_classifies_like_raw_text() {
        assert_eq!(Cell::value(""), Cell::Absent);
        assert_eq!(Cell::value("  "), Cell::Empty);
        assert_eq!(Cell::value(String::from("10.00")), Cell::Value("10.00".to_string()));
    }

    #[test]
    fn test_placeholder_is_not_present() {
        let nan = Cell::value("NaN");
        assert!(nan.is_placeholder());
        assert!(!nan.is_present());
        assert_eq!(nan.text(), None);
        assert_eq!(nan.normalized(), Cell::Absent);
    }

    #[test]
    fn test_empty_is_present_and_distinct_from_absent() {
        assert!(Cell::Empty.is_present());
        assert_eq!(Cell::Empty.text(), Some(""));
        assert!(!Cell::Absent.is_present());
        assert_ne!(Cell::Empty, Cell::Absent);
    }

    #[test]
    fn test_serialize_absent_as_null() {
        assert_eq!(serde_json::to_string(&Cell::Absent).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Cell::Empty).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&Cell::value("12.50")).unwrap(), "\"12.50\"");
    }
}
