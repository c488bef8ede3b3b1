use postboard_core::storage::RepositoryError;

/// Turns a storage failure into the error returned by a resolver.
///
/// The message is the storage error's message, with no extra code.
pub fn storage_failure(
    operation: &'static str,
) -> impl FnOnce(RepositoryError) -> async_graphql::Error {
    move |err| {
        tracing::error!(operation, error = %err, "Storage operation failed");
        async_graphql::Error::new(err.to_string())
    }
}
