pub mod bilinear;
pub mod color;
pub mod console_trait;
pub mod coordinate;
pub mod error;
pub mod image;
pub mod image_processor_trait;
pub mod radial_remap;
pub mod sphereify_params;
pub mod transform;
