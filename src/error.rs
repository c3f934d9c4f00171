use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP response arrived but the status says the resource failed to load.
    #[error("failed to fetch {resource}: {status}")]
    Remote { resource: &'static str, status: u16 },
    /// The request never completed (connection refused, DNS failure, etc.);
    /// the underlying error passes through unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
