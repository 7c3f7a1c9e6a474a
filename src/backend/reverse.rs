//! Reverse-video pass over a figure's objects

use std::collections::HashSet;

use tracing::debug;

use crate::color::invert;
use crate::figure::{Drawable, Figure};

/// What a reverse-video pass touched
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReverseStats {
    /// Distinct objects processed
    pub visited: usize,
    /// Objects whose edge color was inverted
    pub edge: usize,
    /// Objects whose face color was inverted
    pub face: usize,
    /// Objects whose unified color was inverted
    pub color: usize,
}

/// Invert the colors of every distinct object in `figure`, once each
///
/// Objects reachable through several parents are only processed the first
/// time they come up.
pub fn reverse_objects(figure: &mut Figure) -> ReverseStats {
    let mut stats = ReverseStats::default();
    let mut seen = HashSet::new();

    for id in figure.find_objects() {
        if !seen.insert(id) {
            continue;
        }
        if let Some(object) = figure.get_mut(id) {
            reverse_object(object, &mut stats);
            stats.visited += 1;
        }
    }

    debug!(
        "reversed {} objects ({} edge, {} face, {} color)",
        stats.visited, stats.edge, stats.face, stats.color
    );
    stats
}

fn reverse_object(object: &mut dyn Drawable, stats: &mut ReverseStats) {
    if let Some(edge) = object.try_edge_color() {
        if object.try_set_edge_color(invert(&edge)) {
            stats.edge += 1;
        }
    }

    let face_set = match object.try_face_color() {
        Some(face) => object.try_set_face_color(invert(&face)),
        None => false,
    };
    if face_set {
        stats.face += 1;
        return;
    }

    // Line-like objects carry one color instead of face and edge
    if let Some(color) = object.try_color() {
        if object.try_set_color(invert(&color)) {
            stats.color += 1;
        }
    }
}
