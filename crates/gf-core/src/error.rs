use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Style name absent from the registry.
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// Zalgo intensity other than `mini`, `normal` or `maxi`.
    #[error("Unknown zalgo intensity: {0}")]
    UnknownIntensity(String),

    /// Text is required and must not be empty.
    #[error("Text is required and must not be empty")]
    EmptyText,

    /// Text exceeds the configured character ceiling.
    #[error("Text too long : {len} characters (max {max})")]
    TextTooLong {
        /// Length of the rejected text, in Unicode scalar values.
        len: usize,
        /// Configured ceiling.
        max: usize,
    },

    /// Batch request carried no item.
    #[error("Items array is required and must not be empty")]
    EmptyBatch,

    /// Batch request exceeds the configured item ceiling.
    #[error("Too many batch items : {len} (max {max})")]
    BatchTooLarge {
        /// Number of submitted items.
        len: usize,
        /// Configured ceiling.
        max: usize,
    },
}
