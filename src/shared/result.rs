/// Crate-wide result type.
///
/// Domain failures are raised as [`EnrichError`](crate::shared::error::EnrichError)
/// and travel inside `anyhow::Error`; callers that need the variant use
/// `downcast_ref::<EnrichError>()`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
