/// Default vertical clustering tolerance, in the same units as detection
/// coordinates (pixels for typical detector output).
pub const DEFAULT_Y_THRESHOLD: f64 = 15.0;

/// Default minimum confidence for a detection to participate in clustering.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Separator between tokens of a line in flattened reading-order text.
pub const COLUMN_SEPARATOR: char = '\t';

/// Separator between lines in flattened reading-order text.
pub const LINE_SEPARATOR: char = '\n';

/// Table formatting constants
pub const MIN_COLUMN_WIDTH: usize = 3;
