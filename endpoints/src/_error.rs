/// An error raised when the endpoints listing,
/// or one of the endpoint URLs it contains,
/// does not have the expected shape.
///
/// This is a data-format error, distinct from any network or HTTP failure.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// The text could not be parsed as a list literal at all
    #[error("failed to parse endpoints response as a literal list (at byte {position}): {reason}")]
    Literal {
        /// Byte offset where parsing failed
        position: usize,
        /// What went wrong
        reason: String,
    },
    /// The text was parsed, but is not a list of strings
    #[error("endpoints response did not parse to a list of strings (got {0})")]
    NotAListOfStrings(String),
    /// An endpoint URL does not follow the `/api/v1/jena/<dataset>[/sparql]` layout
    #[error("unexpected SPARQL endpoint format: {0}")]
    UnexpectedEndpoint(String),
}
