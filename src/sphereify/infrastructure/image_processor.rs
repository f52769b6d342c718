use crate::domain::color::Color;
use crate::domain::image::Image as DomainImage;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::sphereify_params::SphereifyParams;
use crate::domain::transform;
use super::error::InfrastructureError;
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// [`ImageProcessor`] backed by the `image` crate.
pub struct DefaultImageProcessor;

impl DefaultImageProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProcessor for DefaultImageProcessor {
    fn sphereify_image(
        &self,
        image_bytes: Vec<u8>,
        output_format: ImageFormat,
        params: &SphereifyParams,
    ) -> Result<Vec<u8>, InfrastructureError> {
        let reader = image::io::Reader::new(Cursor::new(image_bytes))
            .with_guessed_format()
            .map_err(InfrastructureError::IoError)?;
        tracing::debug!("decoding input as {:?}", reader.format());

        // Indexed, grayscale and alpha sources are all flattened to plain RGB.
        let decoded = reader.decode().map_err(InfrastructureError::ImageLibError)?.to_rgb8();
        tracing::debug!("decoded {}x{} image", decoded.width(), decoded.height());

        let source = to_domain_image(&decoded)?;
        let sphereified = transform::sphereify(&source, params);
        let output = to_rgb_image(&sphereified)?;

        let mut buffer = Cursor::new(Vec::new());
        output
            .write_to(&mut buffer, output_format)
            .map_err(InfrastructureError::ImageLibError)?;
        Ok(buffer.into_inner())
    }
}

fn to_domain_image(image: &RgbImage) -> Result<DomainImage, InfrastructureError> {
    let pixels = image.pixels().map(|&Rgb(rgb)| Color::from(rgb)).collect();
    Ok(DomainImage::new(
        image.width() as usize,
        image.height() as usize,
        pixels,
    )?)
}

fn to_rgb_image(image: &DomainImage) -> Result<RgbImage, InfrastructureError> {
    let raw: Vec<u8> = image
        .pixels()
        .iter()
        .flat_map(|&color| <[u8; 3]>::from(color))
        .collect();
    RgbImage::from_raw(image.width() as u32, image.height() as u32, raw).ok_or_else(|| {
        InfrastructureError::ImageProcessingError(format!(
            "pixel buffer does not fit a {}x{} RGB image",
            image.width(),
            image.height()
        ))
    })
}
