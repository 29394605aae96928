use thiserror::Error;

/// Reasons the dashboard content document is rejected at load time.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("section `{section}` has no entries")]
    EmptySection { section: &'static str },

    #[error("`{owner}` contains an empty tag")]
    EmptyTag { owner: String },

    #[error("`{owner}` lists tag `{tag}` more than once")]
    DuplicateTag { owner: String, tag: String },

    #[error("business metric `{label}` has value `{value}`, expected a signed percentage like +23% or -12%")]
    InvalidSignedPercent { label: String, value: String },
}
