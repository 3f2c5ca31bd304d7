//! Edge-based merging of adjacent rectangles
//!
//! Rectangles are processed in order from a growing work queue. Each one
//! claims its four edges in an edge map; when a rectangle finds one of its
//! edges already claimed by another rectangle (a joint), both are released
//! and their bounding union is queued for processing, so merges can chain
//! across many rectangles.

use alphamesh_core::{Edge, Error, Rect, Result};
use itertools::Itertools;
use std::collections::HashMap;
use tracing::trace;

/// Coalesce two rectangles that share a full edge.
///
/// The rectangles must be stacked (bottom of one equals top of the other) or
/// side by side (right of one equals left of the other). Any other pairing is
/// reported as [`Error::InvariantViolation`].
pub fn merge_pair(a: &Rect, b: &Rect) -> Result<Rect> {
    let stacked = a.bottom() == b.top() || a.top() == b.bottom();
    let side_by_side = a.right() == b.left() || a.left() == b.right();

    if stacked || side_by_side {
        Ok(a.bounding_union(b))
    } else {
        Err(Error::InvariantViolation(format!(
            "rectangles {} and {} share an edge but are neither stacked nor side by side",
            a, b
        )))
    }
}

/// Greedy joint merger.
///
/// The merger can be reused; every call to [`RegionMerger::merge`] starts
/// from an empty edge map.
#[derive(Debug, Default)]
pub struct RegionMerger {
    claims: HashMap<Edge, Rect>,
    queue: Vec<Rect>,
    joints: usize,
}

impl RegionMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of joints merged by the last run
    pub fn joint_count(&self) -> usize {
        self.joints
    }

    /// Merge `rects` and return the surviving rectangles.
    ///
    /// The result holds no duplicates and keeps work-queue order: input
    /// rectangles first, then merged ones in the order they were produced.
    pub fn merge(&mut self, rects: &[Rect]) -> Result<Vec<Rect>> {
        if let Some(bad) = rects.iter().find(|r| !r.is_valid()) {
            return Err(Error::InvalidData(format!(
                "cannot merge degenerate rectangle {}",
                bad
            )));
        }

        self.claims.clear();
        self.queue.clear();
        self.queue.extend_from_slice(rects);
        self.joints = 0;

        let mut cursor = 0;
        while cursor < self.queue.len() {
            let rect = self.queue[cursor];
            cursor += 1;

            let joint = rect
                .edges()
                .into_iter()
                .find_map(|edge| self.claims.get(&edge).copied().filter(|other| *other != rect));

            match joint {
                None => {
                    for edge in rect.edges() {
                        self.claims.insert(edge, rect);
                    }
                }
                Some(other) => {
                    self.release(&rect);
                    self.release(&other);
                    let merged = merge_pair(&rect, &other)?;
                    trace!(%rect, %other, %merged, "merged joint");
                    self.joints += 1;
                    self.queue.push(merged);
                }
            }
        }

        let claims = &self.claims;
        Ok(self
            .queue
            .iter()
            .filter(|rect| claims.get(&rect.top()) == Some(*rect))
            .copied()
            .unique()
            .collect())
    }

    fn release(&mut self, rect: &Rect) {
        for edge in rect.edges() {
            if self.claims.get(&edge) == Some(rect) {
                self.claims.remove(&edge);
            }
        }
    }
}

/// Merge `rects` with a fresh [`RegionMerger`]
pub fn merge_regions(rects: &[Rect]) -> Result<Vec<Rect>> {
    RegionMerger::new().merge(rects)
}
