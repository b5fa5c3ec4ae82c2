use thiserror::Error;

/// Why a picked or dropped file was not added to the custom design request.
/// The `Display` text is shown to the visitor as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Maximum {max} files allowed.")]
    TooManyFiles { max: usize },
    #[error("\"{name}\" is not an image file.")]
    NotAnImage { name: String },
    #[error("\"{name}\" exceeds {limit_mb}MB limit.")]
    TooLarge { name: String, limit_mb: u64 },
}

impl UploadError {
    /// Whether the rest of the batch should still be looked at.
    pub fn skips_only_this_file(&self) -> bool {
        !matches!(self, UploadError::TooManyFiles { .. })
    }
}
