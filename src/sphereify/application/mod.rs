pub mod error;
pub mod sphereify_service;
