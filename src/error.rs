//! Failures surfaced to the browsing client

use crate::model::Category;

#[derive(Debug, thiserror::Error)]
pub enum BrowseError {
    /// The id matches no static node, dynamic category or compound form
    #[error("bad value: no node matches id `{0}`")]
    BadValue(String),
    /// The id decodes under a category whose detail view is not built yet
    #[error("detail view of `{key}` under {category} is not implemented")]
    Unimplemented { category: Category, key: String },
    #[error("media browser used before initialize()")]
    NotInitialized,
    #[error("data source request failed: {0:#}")]
    Source(#[from] anyhow::Error),
}

pub type BrowseResult<T> = std::result::Result<T, BrowseError>;
