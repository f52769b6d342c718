//! Bilinear sampling of an [`Image`] at continuous coordinates.

use crate::domain::color::Color;
use crate::domain::coordinate::SourceCoordinate;
use crate::domain::image::Image;

pub fn lerp(first: f64, second: f64, t: f64) -> f64 {
    first * (1.0 - t) + second * t
}

fn lerp_channels(first: [f64; 3], second: [f64; 3], t: f64) -> [f64; 3] {
    [
        lerp(first[0], second[0], t),
        lerp(first[1], second[1], t),
        lerp(first[2], second[2], t),
    ]
}

/// Blends the four pixels around `at`: first down each column, then across.
///
/// `at` must lie within `[0, width-1] x [0, height-1]`. Channels stay in floating point until
/// the final blend and are truncated, not rounded.
pub fn sample(image: &Image, at: SourceCoordinate) -> Color {
    let (lower_x, upper_x) = (at.x.floor(), at.x.ceil());
    let (lower_y, upper_y) = (at.y.floor(), at.y.ceil());
    let weight_x = at.x - lower_x;
    let weight_y = at.y - lower_y;

    let (lx, ux) = (lower_x as usize, upper_x as usize);
    let (ly, uy) = (lower_y as usize, upper_y as usize);

    let lower_column = lerp_channels(
        image[(lx, ly)].channels(),
        image[(lx, uy)].channels(),
        weight_y,
    );
    let upper_column = lerp_channels(
        image[(ux, ly)].channels(),
        image[(ux, uy)].channels(),
        weight_y,
    );

    Color::from_channels_truncated(lerp_channels(lower_column, upper_column, weight_x))
}
