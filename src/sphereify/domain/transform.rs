use crate::domain::bilinear;
use crate::domain::image::Image;
use crate::domain::radial_remap::RadialRemap;
use crate::domain::sphereify_params::SphereifyParams;

/// Warps `source` as if it were projected onto a sphere.
///
/// Every destination pixel depends only on `source` and its own position, so the result has
/// the same dimensions as the input and does not depend on iteration order.
pub fn sphereify(source: &Image, params: &SphereifyParams) -> Image {
    let remap = RadialRemap::new(params);
    let (width, height) = (source.width(), source.height());

    Image::from_fn(width, height, |x, y| {
        let at = remap.source_coordinate(x, y, width, height);
        bilinear::sample(source, at)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::Color;

    const RED: Color = Color::new(255, 0, 0);

    fn gradient(width: usize, height: usize) -> Image {
        Image::from_fn(width, height, |x, y| {
            Color::new((x * 255 / width) as u8, (y * 255 / height) as u8, ((x + y) % 256) as u8)
        })
    }

    #[test]
    fn test_solid_red_stays_solid_red() {
        let source = Image::filled(4, 4, RED);
        let result = sphereify(&source, &SphereifyParams::default());
        assert_eq!(result, source);
    }

    #[test]
    fn test_uniform_images_of_several_sizes_are_unchanged() {
        for (width, height) in [(2, 2), (3, 5), (7, 3), (16, 9), (10, 10)] {
            let source = Image::filled(width, height, RED);
            let result = sphereify(&source, &SphereifyParams::default());
            assert_eq!(result, source, "{width}x{height} changed");
        }
    }

    #[test]
    fn test_keeps_dimensions() {
        let source = gradient(13, 7);
        let result = sphereify(&source, &SphereifyParams::default());
        assert_eq!((result.width(), result.height()), (13, 7));
    }

    #[test]
    fn test_center_and_corners_are_fixed_points() {
        let source = gradient(8, 8);
        let result = sphereify(&source, &SphereifyParams::default());
        assert_eq!(result[(4, 4)], source[(4, 4)]);
        assert_eq!(result[(0, 0)], source[(0, 0)]);
    }

    #[test]
    fn test_two_by_two_center_pixel_reads_bottom_right() {
        // Pixel (1, 1) normalizes to the origin and samples itself.
        let source = Image::new(
            2,
            2,
            vec![
                Color::new(255, 0, 0),
                Color::new(0, 255, 0),
                Color::new(0, 0, 255),
                Color::new(255, 255, 255),
            ],
        )
        .unwrap();
        let result = sphereify(&source, &SphereifyParams::default());
        assert_eq!(result[(1, 1)], Color::new(255, 255, 255));
    }

    #[test]
    fn test_is_deterministic() {
        let source = gradient(17, 11);
        let params = SphereifyParams::new(3.1).unwrap();
        assert_eq!(sphereify(&source, &params), sphereify(&source, &params));
    }

    #[test]
    fn test_shrink_changes_the_result() {
        let source = gradient(32, 32);
        let weak = sphereify(&source, &SphereifyParams::new(1.0).unwrap());
        let strong = sphereify(&source, &SphereifyParams::new(2.75).unwrap());
        assert_ne!(weak, strong);
    }

    #[test]
    fn test_empty_image_produces_empty_image() {
        let source = Image::filled(0, 0, RED);
        let result = sphereify(&source, &SphereifyParams::default());
        assert!(result.pixels().is_empty());
    }
}
