use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::ImageFormat;

use super::error::ApplicationError;
use crate::domain::console_trait::Console;
use crate::domain::error::DomainError;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::sphereify_params::SphereifyParams;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::file_storage::LocalFileStorage;

pub const PROMPT: &str = "Which file do you wanna sphereify?\n:";
pub const SUCCESS_MESSAGE: &str = "Successfully sphereified the image.";
pub const DEFAULT_OUTPUT_PREFIX: &str = "sphereified_";

pub struct SphereifyService {
    image_processor: Arc<dyn ImageProcessor + Send + Sync>,
    file_storage: LocalFileStorage,
    params: SphereifyParams,
    output_prefix: String,
}

impl SphereifyService {
    pub fn new(
        image_processor: Arc<dyn ImageProcessor + Send + Sync>,
        file_storage: LocalFileStorage,
        params: SphereifyParams,
        output_prefix: impl Into<String>,
    ) -> Self {
        Self {
            image_processor,
            file_storage,
            params,
            output_prefix: output_prefix.into(),
        }
    }

    /// The output lives next to the input, with the prefix in front of its file name.
    pub fn output_path_for(&self, input: &Path) -> Result<PathBuf, ApplicationError> {
        let file_name = input.file_name().ok_or_else(|| {
            DomainError::InvalidInput(format!("{} does not name a file", input.display()))
        })?;
        let mut output_name = OsString::from(&self.output_prefix);
        output_name.push(file_name);
        Ok(input.with_file_name(output_name))
    }

    pub fn output_format_for(&self, output: &Path) -> Result<ImageFormat, ApplicationError> {
        Ok(ImageFormat::from_path(output).map_err(InfrastructureError::ImageLibError)?)
    }

    /// Sphereifies the image at `input` and returns where the result was written.
    ///
    /// Nothing is written unless the whole image was transformed and encoded.
    pub async fn sphereify_file(&self, input: &Path) -> Result<PathBuf, ApplicationError> {
        let output = self.output_path_for(input)?;
        let output_format = self.output_format_for(&output)?;
        tracing::debug!("{} will be encoded as {:?}", output.display(), output_format);

        let image_bytes = self.file_storage.read_image(input).await?;

        let processor = Arc::clone(&self.image_processor);
        let params = self.params;
        let encoded = tokio::task::spawn_blocking(move || {
            processor.sphereify_image(image_bytes, output_format, &params)
        })
        .await
        .map_err(|e| ApplicationError::SphereifyFailed(format!("transform task did not finish: {e}")))??;

        self.file_storage.save_image(&output, &encoded).await?;
        tracing::info!("wrote {} ({} bytes)", output.display(), encoded.len());
        Ok(output)
    }

    /// Asks for a file name, sphereifies that file and reports progress on `console`.
    pub async fn run_interactive(
        &self,
        console: &mut dyn Console,
    ) -> Result<PathBuf, ApplicationError> {
        let answer = console.prompt(PROMPT)?;
        if answer.is_empty() {
            return Err(DomainError::InvalidInput("no file name was given".to_string()).into());
        }
        let input = PathBuf::from(answer);

        let output = self.output_path_for(&input)?;
        console.announce(&format!("Output file will be: {}", output.display()))?;

        self.sphereify_file(&input).await?;
        console.announce(SUCCESS_MESSAGE)?;

        Ok(output)
    }
}
