//! Quadtree subdivision of an image into occupied rectangles
//!
//! The image is first cut into squares whose side is the shorter image
//! dimension. Each square is then split recursively into quadrants down to
//! the requested depth; a leaf is kept when any of its pixels reaches the
//! alpha threshold. When all four quadrants of a node resolve to exactly one
//! rectangle each, the node is reported as a single rectangle covering its
//! full bounds.

use alphamesh_core::{PixelSource, Rect};
use itertools::iproduct;

/// Clamp a requested subdivision level to the effective depth (at least 1)
pub fn effective_subdivision_level(requested: i32) -> u32 {
    requested.max(1) as u32
}

/// Clamp an alpha threshold into `[0, 1]`; NaN becomes 0
pub fn clamp_alpha_threshold(threshold: f32) -> f32 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// Square tiles fed to the divider, in row-major order.
///
/// The side of each tile is `min(width, height)`. Pixels beyond the last whole
/// tile on the longer axis are not covered; see [`untiled_region`].
pub fn tile_regions(width: u32, height: u32) -> Vec<Rect> {
    let side = width.min(height);
    if side == 0 {
        return Vec::new();
    }

    let cols = width / side;
    let rows = height / side;
    iproduct!(0..rows, 0..cols)
        .map(|(row, col)| Rect::square(col * side, row * side, side))
        .collect()
}

/// The strip of the image left out by [`tile_regions`], if any
pub fn untiled_region(width: u32, height: u32) -> Option<Rect> {
    let side = width.min(height);
    if side == 0 {
        return None;
    }

    let covered_x = (width / side) * side;
    let covered_y = (height / side) * side;
    if covered_x < width {
        Some(Rect::new(covered_x, 0, width, height))
    } else if covered_y < height {
        Some(Rect::new(0, covered_y, width, height))
    } else {
        None
    }
}

/// Recursive quadtree classifier over a pixel source
pub struct QuadtreeDivider<'a, P: PixelSource + ?Sized> {
    source: &'a P,
    alpha_threshold: f32,
}

impl<'a, P: PixelSource + ?Sized> QuadtreeDivider<'a, P> {
    /// Create a divider; the threshold is clamped into `[0, 1]`
    pub fn new(source: &'a P, alpha_threshold: f32) -> Self {
        Self {
            source,
            alpha_threshold: clamp_alpha_threshold(alpha_threshold),
        }
    }

    pub fn alpha_threshold(&self) -> f32 {
        self.alpha_threshold
    }

    /// True when any pixel of `region` reaches the threshold.
    ///
    /// Pixels are visited in row-major order; the parts of `region` outside
    /// the image are ignored.
    pub fn is_occupied(&self, region: &Rect) -> bool {
        let max_x = region.max_x.min(self.source.width());
        let max_y = region.max_y.min(self.source.height());
        (region.min_y..max_y).any(|y| {
            (region.min_x..max_x).any(|x| self.source.alpha_at(x, y) >= self.alpha_threshold)
        })
    }

    /// Classify `region`, descending `levels_remaining` more levels.
    ///
    /// `region` must come from repeatedly halving a square tile. Returns the
    /// occupied rectangles in quadrant order top-left, top-right, bottom-left,
    /// bottom-right, or `[region]` when all four quadrants resolved to one
    /// rectangle each.
    pub fn divide(&self, region: Rect, levels_remaining: u32) -> Vec<Rect> {
        if !region.is_valid() {
            return Vec::new();
        }

        // A single pixel splits into three empty quadrants and itself.
        if levels_remaining == 0 || (region.width() == 1 && region.height() == 1) {
            return if self.is_occupied(&region) {
                vec![region]
            } else {
                Vec::new()
            };
        }

        let children = region
            .quadrants()
            .map(|quadrant| self.divide(quadrant, levels_remaining - 1));

        // Collapse snaps to the full parent bounds, not the union of the children.
        if children.iter().all(|child| child.len() == 1) {
            return vec![region];
        }

        children.into_iter().flatten().collect()
    }

    /// Tile the whole image and divide every tile.
    ///
    /// `subdivision_level` below 1 is treated as 1.
    pub fn divide_image(&self, subdivision_level: i32) -> Vec<Rect> {
        let depth = effective_subdivision_level(subdivision_level);
        tile_regions(self.source.width(), self.source.height())
            .into_iter()
            .flat_map(|tile| self.divide(tile, depth))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphamesh_core::AlphaGrid;

    fn grid_with(width: u32, height: u32, opaque: &[Rect]) -> AlphaGrid {
        let mut grid = AlphaGrid::new(width, height);
        for rect in opaque {
            grid.fill_rect(*rect, 1.0);
        }
        grid
    }

    #[test]
    fn test_effective_subdivision_level() {
        assert_eq!(effective_subdivision_level(-3), 1);
        assert_eq!(effective_subdivision_level(0), 1);
        assert_eq!(effective_subdivision_level(1), 1);
        assert_eq!(effective_subdivision_level(6), 6);
    }

    #[test]
    fn test_clamp_alpha_threshold() {
        assert_eq!(clamp_alpha_threshold(-0.5), 0.0);
        assert_eq!(clamp_alpha_threshold(0.25), 0.25);
        assert_eq!(clamp_alpha_threshold(7.0), 1.0);
        assert_eq!(clamp_alpha_threshold(f32::NAN), 0.0);
    }

    #[test]
    fn test_tile_regions_square() {
        assert_eq!(tile_regions(8, 8), vec![Rect::new(0, 0, 8, 8)]);
        assert_eq!(untiled_region(8, 8), None);
    }

    #[test]
    fn test_tile_regions_row_major() {
        let tiles = tile_regions(4, 8);
        assert_eq!(tiles, vec![Rect::new(0, 0, 4, 4), Rect::new(0, 4, 4, 8)]);

        let tiles = tile_regions(6, 2);
        assert_eq!(
            tiles,
            vec![
                Rect::new(0, 0, 2, 2),
                Rect::new(2, 0, 4, 2),
                Rect::new(4, 0, 6, 2),
            ]
        );
    }

    #[test]
    fn test_trailing_strip_is_not_tiled() {
        let tiles = tile_regions(5, 2);
        assert_eq!(tiles, vec![Rect::new(0, 0, 2, 2), Rect::new(2, 0, 4, 2)]);
        assert_eq!(untiled_region(5, 2), Some(Rect::new(4, 0, 5, 2)));
        assert_eq!(untiled_region(3, 7), Some(Rect::new(0, 6, 3, 7)));
        assert!(tile_regions(0, 4).is_empty());
    }

    #[test]
    fn test_leaf_occupied_and_empty() {
        let grid = grid_with(4, 4, &[Rect::new(3, 3, 4, 4)]);
        let divider = QuadtreeDivider::new(&grid, 0.5);
        assert_eq!(divider.divide(Rect::new(0, 0, 4, 4), 0), vec![Rect::new(0, 0, 4, 4)]);
        assert!(divider.divide(Rect::new(0, 0, 2, 2), 0).is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let grid = AlphaGrid::filled(2, 2, 0.5);
        assert_eq!(QuadtreeDivider::new(&grid, 0.5).divide_image(1).len(), 1);
        assert!(QuadtreeDivider::new(&grid, 0.51).divide_image(1).is_empty());
    }

    #[test]
    fn test_threshold_clamped() {
        let grid = AlphaGrid::filled(2, 2, 1.0);
        let divider = QuadtreeDivider::new(&grid, 2.0);
        assert_eq!(divider.alpha_threshold(), 1.0);
        assert_eq!(divider.divide_image(1), vec![Rect::new(0, 0, 2, 2)]);
    }

    #[test]
    fn test_top_left_block_collapses() {
        let grid = grid_with(4, 4, &[Rect::new(0, 0, 2, 2)]);
        let divider = QuadtreeDivider::new(&grid, 0.5);
        assert_eq!(divider.divide_image(2), vec![Rect::new(0, 0, 2, 2)]);
    }

    #[test]
    fn test_mixed_result_keeps_quadrant_order() {
        // Opaque bottom-right and top-right quadrants
        let grid = grid_with(4, 4, &[Rect::new(2, 2, 4, 4), Rect::new(2, 0, 4, 2)]);
        let divider = QuadtreeDivider::new(&grid, 0.5);
        assert_eq!(
            divider.divide_image(1),
            vec![Rect::new(2, 0, 4, 2), Rect::new(2, 2, 4, 4)]
        );
    }

    #[test]
    fn test_single_pixel_per_leaf_fills_leaf() {
        // One opaque pixel inside each 2x2 leaf is enough to keep every leaf,
        // and four kept leaves collapse into the whole tile.
        let grid = grid_with(
            4,
            4,
            &[
                Rect::new(0, 0, 1, 1),
                Rect::new(3, 0, 4, 1),
                Rect::new(0, 3, 1, 4),
                Rect::new(3, 3, 4, 4),
            ],
        );
        let divider = QuadtreeDivider::new(&grid, 0.5);
        assert_eq!(divider.divide_image(1), vec![Rect::new(0, 0, 4, 4)]);

        // At pixel depth each quadrant keeps one pixel, which still counts as
        // one rectangle per quadrant.
        assert_eq!(divider.divide_image(2), vec![Rect::new(0, 0, 4, 4)]);
    }

    #[test]
    fn test_collapse_expands_past_single_child_rects() {
        // Each 4x4 quadrant holds a single occupied 2x2 leaf. Every quadrant
        // therefore reports exactly one rectangle, and the root collapses to
        // the full 8x8 tile even though only four 2x2 leaves were occupied.
        let grid = grid_with(
            8,
            8,
            &[
                Rect::new(0, 0, 1, 1),
                Rect::new(4, 0, 5, 1),
                Rect::new(0, 4, 1, 5),
                Rect::new(4, 4, 5, 5),
            ],
        );
        let divider = QuadtreeDivider::new(&grid, 0.5);
        assert_eq!(divider.divide_image(2), vec![Rect::new(0, 0, 8, 8)]);
    }

    #[test]
    fn test_three_quadrants_do_not_collapse() {
        let grid = grid_with(4, 4, &[Rect::new(0, 0, 4, 2), Rect::new(0, 2, 2, 4)]);
        let divider = QuadtreeDivider::new(&grid, 0.5);
        assert_eq!(
            divider.divide_image(2),
            vec![
                Rect::new(0, 0, 2, 2),
                Rect::new(2, 0, 4, 2),
                Rect::new(0, 2, 2, 4),
            ]
        );
    }

    #[test]
    fn test_depth_beyond_pixel_resolution() {
        let grid = grid_with(4, 4, &[Rect::new(1, 1, 2, 2), Rect::new(2, 2, 3, 3)]);
        let divider = QuadtreeDivider::new(&grid, 0.5);
        assert_eq!(divider.divide_image(2), divider.divide_image(8));
        assert_eq!(
            divider.divide_image(8),
            vec![Rect::new(1, 1, 2, 2), Rect::new(2, 2, 3, 3)]
        );
    }

    #[test]
    fn test_depth_zero_matches_depth_one() {
        let grid = grid_with(4, 4, &[Rect::new(0, 0, 2, 2), Rect::new(3, 3, 4, 4)]);
        let divider = QuadtreeDivider::new(&grid, 0.5);
        assert_eq!(divider.divide_image(0), divider.divide_image(1));
        assert_eq!(divider.divide_image(-2), divider.divide_image(1));
    }

    #[test]
    fn test_non_square_image_tiles_independently() {
        let grid = grid_with(8, 4, &[Rect::new(0, 0, 4, 4), Rect::new(4, 0, 6, 2)]);
        let divider = QuadtreeDivider::new(&grid, 0.5);
        assert_eq!(
            divider.divide_image(1),
            vec![Rect::new(0, 0, 4, 4), Rect::new(4, 0, 6, 2)]
        );
    }

    #[test]
    fn test_untiled_strip_is_ignored() {
        let grid = grid_with(5, 2, &[Rect::new(4, 0, 5, 2)]);
        let divider = QuadtreeDivider::new(&grid, 0.5);
        assert!(divider.divide_image(3).is_empty());
    }

    #[test]
    fn test_is_occupied_clips_to_image() {
        let grid = AlphaGrid::filled(2, 2, 1.0);
        let divider = QuadtreeDivider::new(&grid, 0.5);
        assert!(divider.is_occupied(&Rect::new(1, 1, 4, 4)));
        assert!(!divider.is_occupied(&Rect::new(2, 2, 4, 4)));
    }

    #[test]
    fn test_huge_depth_stops_at_single_pixels() {
        let grid = grid_with(4, 4, &[Rect::new(0, 0, 1, 1), Rect::new(2, 1, 4, 4)]);
        let divider = QuadtreeDivider::new(&grid, 0.5);
        assert_eq!(divider.divide_image(100_000), divider.divide_image(2));
        assert_eq!(
            divider.divide(Rect::new(3, 3, 4, 4), u32::MAX),
            vec![Rect::new(3, 3, 4, 4)]
        );
    }
}
