//! Textweave - OCR Layout Reconstruction
//!
//! Textweave reconstructs reading order and tabular structure from unordered
//! OCR detections: text boxes with arbitrary positions, confidences, and no
//! inherent line or column membership.
//!
//! # Quick Start
//!
//! ```rust
//! use textweave::{cluster_lines, lines_to_text, reconstruct_table, ClusterConfig, Detection, Point};
//!
//! let detections = vec![
//!     Detection::new(
//!         [Point::new(5.0, 8.0), Point::new(45.0, 8.0), Point::new(45.0, 18.0), Point::new(5.0, 18.0)],
//!         "Name",
//!         0.97,
//!     ),
//!     Detection::new(
//!         [Point::new(60.0, 9.0), Point::new(90.0, 9.0), Point::new(90.0, 19.0), Point::new(60.0, 19.0)],
//!         "Age",
//!         0.94,
//!     ),
//! ];
//!
//! let lines = cluster_lines(&detections, &ClusterConfig::default());
//! assert_eq!(lines_to_text(&lines), "Name\tAge");
//!
//! let table = reconstruct_table(&lines);
//! assert_eq!(table.headers, vec!["Name", "Age"]);
//! ```
//!
//! # Architecture
//!
//! - **Line clustering** (`cluster`): groups detections into top-to-bottom
//!   lines by sequential vertical proximity, ordering tokens left-to-right
//!   within each line
//! - **Table inference** (`table`): pads clustered lines to a rectangle and
//!   reads the first line as the header row
//! - **Flattening** (`text`): joins lines into plain reading-order text
//!
//! Both stages are pure and stateless: no I/O, no shared mutable state, safe
//! under arbitrary parallel invocation. Image decoding, OCR itself, spell
//! correction, and persistence are the hosting application's concern.

#![deny(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod table;
pub mod text;
pub mod types;
pub mod utils;

pub use cluster::{cluster_blocks, cluster_lines};
pub use error::{LayoutError, Result};
pub use table::{reconstruct_table, table_to_markdown};
pub use text::lines_to_text;
pub use types::{ClusterConfig, Detection, Line, Point, Table};
pub use utils::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_Y_THRESHOLD};
