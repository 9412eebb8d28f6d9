/// Errors raised while converting cell markup.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("Failed to parse sanitized HTML: {source}")]
    Html {
        #[from]
        source: roxmltree::Error,
    },
}
