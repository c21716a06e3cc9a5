//! Core data types for layout reconstruction.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::utils::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_Y_THRESHOLD};

/// One corner of a detection quad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One recognized text region as produced by a text detector.
///
/// `bounds` holds the four corners in detector-defined order; the quad is not
/// guaranteed to be axis-aligned. `confidence` is the recognizer's score in
/// `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bounds: [Point; 4],
    pub text: String,
    pub confidence: f64,
}

impl Detection {
    pub fn new(bounds: [Point; 4], text: impl Into<String>, confidence: f64) -> Self {
        Self {
            bounds,
            text: text.into(),
            confidence,
        }
    }

    /// Vertical position proxy: mean of the four corner y coordinates.
    pub fn centroid_y(&self) -> f64 {
        self.bounds.iter().map(|p| p.y).sum::<f64>() / self.bounds.len() as f64
    }

    /// Horizontal position proxy: x of the first corner, used as the column
    /// anchor for intra-line ordering.
    pub fn anchor_x(&self) -> f64 {
        self.bounds[0].x
    }
}

/// A left-to-right ordered group of detections judged to share a printed
/// text line. Serializes as a plain array of token strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line {
    pub tokens: Vec<String>,
}

impl Line {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<String>> for Line {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

impl From<Vec<&str>> for Line {
    fn from(tokens: Vec<&str>) -> Self {
        Self {
            tokens: tokens.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Rectangular view of a sequence of lines: the first line as headers, every
/// subsequent line as a row mapping header text to cell text.
///
/// Rows use [`IndexMap`] so header order is preserved and a duplicated header
/// keeps its first position while the last token under that header wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<IndexMap<String, String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Clustering parameters.
///
/// Both thresholds are explicit per-call parameters rather than process-wide
/// state; `Default` carries the standard values. `y_threshold` is in the same
/// units as detection coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub y_threshold: f64,
    pub confidence_threshold: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            y_threshold: DEFAULT_Y_THRESHOLD,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl ClusterConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.y_threshold.is_finite() || self.y_threshold < 0.0 {
            return Err(LayoutError::invalid_configuration(format!(
                "y_threshold must be finite and non-negative, got {}",
                self.y_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(LayoutError::invalid_configuration(format!(
                "confidence_threshold must be in [0, 1], got {}",
                self.confidence_threshold
            )));
        }
        Ok(())
    }
}
