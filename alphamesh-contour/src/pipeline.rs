//! End-to-end contour generation
//!
//! [`QuadtreeContour`] validates the pixel source, clamps its parameters,
//! divides the image, optionally merges the resulting rectangles and
//! assembles the mesh.

use crate::assemble::MeshAssembler;
use crate::divide::{
    clamp_alpha_threshold, effective_subdivision_level, tile_regions, untiled_region,
    QuadtreeDivider,
};
use crate::merge::RegionMerger;
use alphamesh_core::{ContourMesh, Error, PixelSource, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Configuration for quadtree contour generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourConfig {
    /// Quadtree depth; values below 1 are treated as 1
    pub subdivision_level: i32,
    /// Minimum alpha for a pixel to count as opaque; clamped to `[0, 1]`
    pub alpha_threshold: f32,
    /// Whether to merge rectangles that share a full edge
    pub optimize: bool,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            subdivision_level: 1,
            alpha_threshold: 0.5,
            optimize: false,
        }
    }
}

impl ContourConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(subdivision_level: i32, alpha_threshold: f32, optimize: bool) -> Self {
        Self {
            subdivision_level,
            alpha_threshold,
            optimize,
        }
    }

    pub fn with_subdivision_level(mut self, subdivision_level: i32) -> Self {
        self.subdivision_level = subdivision_level;
        self
    }

    pub fn with_alpha_threshold(mut self, alpha_threshold: f32) -> Self {
        self.alpha_threshold = alpha_threshold;
        self
    }

    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    /// Depth actually used by the divider
    pub fn effective_subdivision_level(&self) -> u32 {
        effective_subdivision_level(self.subdivision_level)
    }

    /// Threshold actually used by the divider
    pub fn effective_alpha_threshold(&self) -> f32 {
        clamp_alpha_threshold(self.alpha_threshold)
    }
}

/// Counters collected while building a contour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourStats {
    /// Side of the square tiles, `min(width, height)`
    pub tile_size: u32,
    pub tile_count: usize,
    pub subdivision_level: u32,
    pub alpha_threshold: f32,
    /// Rectangles reported by the divider
    pub divided_rects: usize,
    /// Rectangles handed to the assembler
    pub final_rects: usize,
    /// Joints merged; zero when optimization is off
    pub joints_merged: usize,
    pub vertex_count: usize,
    pub triangle_count: usize,
}

/// Mesh plus the statistics of the build that produced it
#[derive(Debug, Clone)]
pub struct ContourOutput {
    pub mesh: ContourMesh,
    pub stats: ContourStats,
}

/// Quadtree contour generator
#[derive(Debug, Clone, Default)]
pub struct QuadtreeContour {
    pub config: ContourConfig,
}

impl QuadtreeContour {
    pub fn new(config: ContourConfig) -> Self {
        Self { config }
    }

    /// Build the contour mesh of `source`
    pub fn build<P: PixelSource + ?Sized>(&self, source: &P) -> Result<ContourMesh> {
        self.build_detailed(source).map(|output| output.mesh)
    }

    /// Build the contour mesh of `source` and report per-stage counts
    pub fn build_detailed<P: PixelSource + ?Sized>(&self, source: &P) -> Result<ContourOutput> {
        let (width, height) = (source.width(), source.height());
        if width == 0 || height == 0 {
            return Err(Error::InvalidData(format!(
                "Image must have non-zero dimensions, got {}x{}",
                width, height
            )));
        }

        let depth = self.config.effective_subdivision_level();
        if self.config.subdivision_level < 1 {
            warn!(
                requested = self.config.subdivision_level,
                "subdivision level must be >= 1, clamping to 1"
            );
        }

        let threshold = self.config.effective_alpha_threshold();
        if threshold != self.config.alpha_threshold {
            warn!(
                requested = self.config.alpha_threshold,
                clamped = threshold,
                "alpha threshold outside [0, 1], clamping"
            );
        }

        if let Some(strip) = untiled_region(width, height) {
            debug!(%strip, "image is not a whole number of square tiles, strip left uncovered");
        }

        let tiles = tile_regions(width, height);
        let divider = QuadtreeDivider::new(source, threshold);
        let divided: Vec<_> = tiles
            .iter()
            .flat_map(|tile| divider.divide(*tile, depth))
            .collect();
        let divided_rects = divided.len();
        debug!(tiles = tiles.len(), rects = divided_rects, depth, "divided image");

        let mut joints_merged = 0;
        let rects = if self.config.optimize {
            let mut merger = RegionMerger::new();
            let merged = merger.merge(&divided)?;
            joints_merged = merger.joint_count();
            debug!(
                before = divided_rects,
                after = merged.len(),
                joints = joints_merged,
                "merged regions"
            );
            merged
        } else {
            divided
        };

        let mesh = MeshAssembler::new(width, height).assemble(&rects);
        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.face_count(),
            "assembled contour mesh"
        );

        let stats = ContourStats {
            tile_size: width.min(height),
            tile_count: tiles.len(),
            subdivision_level: depth,
            alpha_threshold: threshold,
            divided_rects,
            final_rects: rects.len(),
            joints_merged,
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.face_count(),
        };

        Ok(ContourOutput { mesh, stats })
    }
}
