use thiserror::Error;

/// Failures of the resolution chain. All are terminal for the current
/// invocation; nothing is retried.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The requested service selector is not in the registry. Raised before
    /// any network call is made.
    #[error("invalid service {0:?} (run `whip services` for the supported list)")]
    InvalidService(String),

    /// The aggregator could not be reached, answered with an error status,
    /// or returned a payload without a usable canonical URL.
    #[error("aggregator lookup failed: {0}")]
    Upstream(String),

    /// The aggregator page loaded fine but carries no link button for the
    /// requested service. The track simply isn't listed there.
    #[error("no {service} link found on {page}")]
    LinkNotFound { service: &'static str, page: String },
}
