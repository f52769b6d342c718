//! Inverse radial warp from destination pixels to source sampling positions.

use std::f64::consts::PI;

use crate::domain::coordinate::{NormalizedCoordinate, SourceCoordinate};
use crate::domain::sphereify_params::SphereifyParams;

#[derive(Debug, Clone, Copy)]
pub struct RadialRemap {
    shrink: f64,
}

impl RadialRemap {
    pub fn new(params: &SphereifyParams) -> Self {
        Self {
            shrink: params.shrink(),
        }
    }

    /// Maps pixel `(x, y)` onto `[-1, 1)` per axis, with the image center at the origin.
    pub fn normalize(x: usize, y: usize, width: usize, height: usize) -> NormalizedCoordinate {
        NormalizedCoordinate {
            u: (x as f64 / width as f64) * 2.0 - 1.0,
            v: (y as f64 / height as f64) * 2.0 - 1.0,
        }
    }

    /// Remapped distance from the center for a point at `radius`.
    ///
    /// Inside the unit circle the radius goes through `asin(r) / (π / shrink)`; on or beyond
    /// the rim it passes through unchanged.
    pub fn warp_radius(&self, radius: f64) -> f64 {
        if radius < 1.0 {
            radius.asin() / (PI / self.shrink)
        } else {
            radius
        }
    }

    /// Source position to sample for destination pixel `(x, y)`, clamped to the image.
    pub fn source_coordinate(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> SourceCoordinate {
        let normalized = Self::normalize(x, y, width, height);

        let (radius, warped) = match normalized.radius() {
            // The exact center has no direction to scale along.
            r if r == 0.0 => (1.0, 1.0),
            r => (r, self.warp_radius(r)),
        };

        SourceCoordinate::new(
            rescale(normalized.u / radius * warped, width),
            rescale(normalized.v / radius * warped, height),
        )
    }
}

fn rescale(normalized: f64, extent: usize) -> f64 {
    let max = extent.saturating_sub(1) as f64;
    ((normalized + 1.0) / 2.0 * extent as f64).clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remap(shrink: f64) -> RadialRemap {
        RadialRemap::new(&SphereifyParams::new(shrink).unwrap())
    }

    #[test]
    fn test_normalize_puts_center_at_origin() {
        let n = RadialRemap::normalize(2, 2, 4, 4);
        assert_eq!(n, NormalizedCoordinate { u: 0.0, v: 0.0 });
        let n = RadialRemap::normalize(0, 3, 4, 4);
        assert_eq!(n, NormalizedCoordinate { u: -1.0, v: 0.5 });
    }

    #[test]
    fn test_center_pixel_maps_to_itself() {
        let remap = remap(2.75);
        assert_eq!(remap.source_coordinate(2, 2, 4, 4), SourceCoordinate::new(2.0, 2.0));
        assert_eq!(remap.source_coordinate(1, 1, 2, 2), SourceCoordinate::new(1.0, 1.0));
        assert_eq!(remap.source_coordinate(8, 5, 16, 10), SourceCoordinate::new(8.0, 5.0));
    }

    #[test]
    fn test_rim_and_beyond_is_identity() {
        let remap = remap(2.75);
        let (width, height) = (12, 9);
        let mut checked = 0;
        for y in 0..height {
            for x in 0..width {
                if RadialRemap::normalize(x, y, width, height).radius() < 1.0 {
                    continue;
                }
                let source = remap.source_coordinate(x, y, width, height);
                assert!((source.x - x as f64).abs() < 1e-9, "x drifted at ({x}, {y})");
                assert!((source.y - y as f64).abs() < 1e-9, "y drifted at ({x}, {y})");
                checked += 1;
            }
        }
        assert!(checked > 0);
        assert_eq!(remap.source_coordinate(0, 0, 4, 4), SourceCoordinate::new(0.0, 0.0));
    }

    #[test]
    fn test_source_coordinates_stay_inside_image() {
        for shrink in [0.5, 1.0, 2.75, 6.0] {
            let remap = remap(shrink);
            for (width, height) in [(1, 1), (2, 2), (3, 7), (16, 9), (31, 31)] {
                for y in 0..height {
                    for x in 0..width {
                        let source = remap.source_coordinate(x, y, width, height);
                        assert!((0.0..=(width - 1) as f64).contains(&source.x));
                        assert!((0.0..=(height - 1) as f64).contains(&source.y));
                    }
                }
            }
        }
    }

    #[test]
    fn test_warp_is_strictly_increasing_inside_unit_circle() {
        for shrink in [1.0, 2.75, 4.0] {
            let remap = remap(shrink);
            let mut previous = remap.warp_radius(1e-6);
            for step in 1..1000 {
                let current = remap.warp_radius(step as f64 / 1000.0);
                assert!(current > previous, "warp folded at r = {}", step as f64 / 1000.0);
                previous = current;
            }
        }
    }

    #[test]
    fn test_warp_pulls_points_toward_the_rim() {
        let remap = remap(2.75);
        // asin(0.5) = π/6, so r' = 2.75 / 6
        assert!((remap.warp_radius(0.5) - 2.75 / 6.0).abs() < 1e-12);
        assert_eq!(remap.warp_radius(1.0), 1.0);
        assert_eq!(remap.warp_radius(1.3), 1.3);
    }
}
