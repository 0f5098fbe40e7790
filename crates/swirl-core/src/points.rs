//! Point dataset parsing and the demo generator.
//!
//! The dataset transport (HTTP fetch, file read) is the frontends' concern;
//! this module only defines the byte-buffer contract: a flat sequence of
//! little-endian f32 triples `(x, y, energy)` with no length header.

use crate::constants::MAX_POINTS;
use crate::error::PointDataError;
use rand::prelude::*;

/// One point as it lives in the GPU instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub energy: f32,
}

/// Immutable point set, uploaded once per dataset load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointBuffer {
    points: Vec<Point>,
}

impl PointBuffer {
    /// Parse a raw byte buffer of f32 triples.
    ///
    /// Point count is `buffer.len() / 12`; trailing bytes or an oversized
    /// dataset are rejected and leave the caller's current buffer in place.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PointDataError> {
        const STRIDE: usize = 3 * std::mem::size_of::<f32>();
        if bytes.len() % STRIDE != 0 {
            return Err(PointDataError::Malformed(bytes.len()));
        }
        let count = bytes.len() / STRIDE;
        if count > MAX_POINTS {
            return Err(PointDataError::TooManyPoints(count, MAX_POINTS));
        }
        // Decode explicitly; the incoming buffer has no alignment guarantee.
        let f32_at = |c: &[u8], i: usize| {
            f32::from_le_bytes([c[i * 4], c[i * 4 + 1], c[i * 4 + 2], c[i * 4 + 3]])
        };
        let points = bytes
            .chunks_exact(STRIDE)
            .map(|c| Point {
                x: f32_at(c, 0),
                y: f32_at(c, 1),
                energy: f32_at(c, 2),
            })
            .collect();
        log::debug!("parsed {} points from {} bytes", count, bytes.len());
        Ok(Self { points })
    }

    pub fn from_points(points: Vec<Point>) -> Result<Self, PointDataError> {
        if points.len() > MAX_POINTS {
            return Err(PointDataError::TooManyPoints(points.len(), MAX_POINTS));
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Deterministic stand-in dataset for when no point source is reachable.
///
/// Gaussian-ish clusters inside the [-1, 1] square with energy loosely tied
/// to the cluster, so the hue mapping is visible without real data.
pub fn demo_points(count: usize, seed: u64) -> PointBuffer {
    let count = count.min(MAX_POINTS);
    let mut rng = StdRng::seed_from_u64(seed);
    let centers: [(f32, f32); 4] = [(-0.5, -0.4), (0.4, 0.5), (0.5, -0.5), (-0.3, 0.4)];
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let (cx, cy) = centers[i % centers.len()];
        let x = (cx + rng.gen_range(-0.35..0.35)).clamp(-1.0, 1.0);
        let y = (cy + rng.gen_range(-0.35..0.35)).clamp(-1.0, 1.0);
        let energy = ((i % centers.len()) as f32 * 0.25 + rng.gen_range(0.0..0.25)).clamp(0.0, 1.0);
        points.push(Point { x, y, energy });
    }
    PointBuffer { points }
}
