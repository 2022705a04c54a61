//! Per-page crop region and structural mode requested from the extractor
//!
//! Page 1 carries the statement header and summary above the transaction
//! table, so only its lower band is read. Continuation pages are read almost
//! in full and may lack ruled borders.

use serde::{Deserialize, Serialize};

/// Crop rectangle as percentages of the page, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl CropRect {
    pub const fn percent(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

/// How row boundaries are inferred inside the crop region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructuralMode {
    /// Rows follow visible table borders
    #[serde(rename = "lattice")]
    GridLines,
    /// Rows follow text-position clustering
    #[serde(rename = "stream")]
    TextClusters,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRegion {
    pub crop: CropRect,
    pub mode: StructuralMode,
}

const FIRST_PAGE: PageRegion = PageRegion {
    crop: CropRect::percent(45.0, 0.0, 100.0, 100.0),
    mode: StructuralMode::GridLines,
};

const CONTINUATION_PAGE: PageRegion = PageRegion {
    crop: CropRect::percent(5.0, 0.0, 100.0, 100.0),
    mode: StructuralMode::TextClusters,
};

/// Region to request for the 1-based `page_index` of a `total_pages` document.
pub fn region_for(page_index: usize, total_pages: usize) -> PageRegion {
    debug_assert!(page_index >= 1 && page_index <= total_pages.max(1));
    if page_index <= 1 {
        FIRST_PAGE
    } else {
        CONTINUATION_PAGE
    }
}
