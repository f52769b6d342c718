use image::ImageFormat;

use crate::domain::sphereify_params::SphereifyParams;
use crate::infrastructure::error::InfrastructureError;

/// Turns encoded image bytes into encoded, sphereified image bytes.
#[cfg_attr(test, mockall::automock)]
pub trait ImageProcessor {
    fn sphereify_image(
        &self,
        image_bytes: Vec<u8>,
        output_format: ImageFormat,
        params: &SphereifyParams,
    ) -> Result<Vec<u8>, InfrastructureError>;
}
