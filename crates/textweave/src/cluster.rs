//! Line clustering: group unordered detections into reading-order lines.
//!
//! Detections arrive with arbitrary positions and no inherent line
//! membership. Clustering projects each detection to a `(y, x)` position
//! proxy, sorts globally top-to-bottom, then walks the sorted sequence
//! comparing each token's vertical position to its immediate predecessor:
//! a gap within `y_threshold` extends the current line, a larger gap closes
//! it. Closed lines are ordered left-to-right by column anchor.
use crate::types::{ClusterConfig, Detection, Line};

/// Projection of a detection that passed the confidence filter.
struct PositionedToken {
    y: f64,
    x: f64,
    text: String,
}

/// Cluster detections into reading-order lines.
///
/// Detections below `config.confidence_threshold` are discarded. The output
/// is ordered top-to-bottom; tokens within each line are ordered ascending by
/// column anchor. Empty input (or input filtered to nothing) yields an empty
/// vector; this function never fails.
///
/// The vertical comparison is sequential: each token is measured against the
/// immediately preceding token in global `(y, x)` order, not against the
/// line's first token. A line can therefore drift past `y_threshold` end to
/// end as long as every consecutive gap stays within it, which keeps tall or
/// slightly skewed text together.
pub fn cluster_lines(detections: &[Detection], config: &ClusterConfig) -> Vec<Line> {
    if detections.is_empty() {
        return Vec::new();
    }

    let mut tokens: Vec<PositionedToken> = detections
        .iter()
        .filter(|det| det.confidence >= config.confidence_threshold)
        .map(|det| PositionedToken {
            y: det.centroid_y(),
            x: det.anchor_x(),
            text: det.text.clone(),
        })
        .collect();

    // Stable sort on (y, x): text never tie-breaks, tokens sharing an exact
    // position keep their input order.
    tokens.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<(f64, String)> = Vec::new();
    let mut last_y: Option<f64> = None;

    for PositionedToken { y, x, text } in tokens {
        match last_y {
            Some(prev) if (y - prev).abs() > config.y_threshold => {
                lines.push(close_line(std::mem::take(&mut current)));
                current.push((x, text));
            }
            _ => current.push((x, text)),
        }
        last_y = Some(y);
    }

    if !current.is_empty() {
        lines.push(close_line(current));
    }

    tracing::debug!(
        detections = detections.len(),
        lines = lines.len(),
        "clustered detections into lines"
    );

    lines
}

/// Cluster grouped detector output.
///
/// Detectors commonly emit detections grouped into blocks or regions; block
/// identity carries no layout signal here, so the groups are flattened and
/// clustered as one sequence.
pub fn cluster_blocks(blocks: &[Vec<Detection>], config: &ClusterConfig) -> Vec<Line> {
    let flattened: Vec<Detection> = blocks.iter().flatten().cloned().collect();
    cluster_lines(&flattened, config)
}

fn close_line(mut tokens: Vec<(f64, String)>) -> Line {
    tokens.sort_by(|a, b| a.0.total_cmp(&b.0));
    Line::new(tokens.into_iter().map(|(_, text)| text).collect())
}
