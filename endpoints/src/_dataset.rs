use super::FormatError;

/// Extract the dataset name from an Ontodocker/Fuseki SPARQL endpoint URL.
///
/// The URL path must have the form `/api/v1/jena/<dataset>/sparql`
/// or `/api/v1/jena/<dataset>`;
/// scheme, authority, query and fragment are ignored.
/// The path is taken as written: no percent-encoding, decoding
/// or dot-segment removal is applied to the returned name.
///
/// # Errors
///
/// [`FormatError::UnexpectedEndpoint`], naming `endpoint`,
/// if the path of the URL does not follow that layout.
pub fn dataset_name(endpoint: &str) -> Result<String, FormatError> {
    let segments: Vec<&str> = endpoint_path(endpoint)
        .trim_end_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    match segments.as_slice() {
        // modern deployments append `/sparql`, some configurations do not
        ["api", "v1", "jena", dataset, .., "sparql"] | ["api", "v1", "jena", dataset, ..] => {
            Ok((*dataset).to_string())
        }
        _ => Err(FormatError::UnexpectedEndpoint(endpoint.to_string())),
    }
}

/// Extract the dataset names of all `endpoints`, in order.
///
/// # Errors
///
/// Fails on the first malformed endpoint; no entry is skipped.
/// See [`dataset_name`].
pub fn extract_dataset_names<S: AsRef<str>>(endpoints: &[S]) -> Result<Vec<String>, FormatError> {
    endpoints
        .iter()
        .map(|endpoint| dataset_name(endpoint.as_ref()))
        .collect()
}

/// The raw path of `endpoint`, after `scheme:` and `//authority`, up to `?` or `#`.
fn endpoint_path(endpoint: &str) -> &str {
    let rest = endpoint.trim();
    let rest = match rest.split_once(':') {
        Some((scheme, tail)) if is_scheme(scheme) => tail,
        _ => rest,
    };
    let rest = match rest.strip_prefix("//") {
        Some(tail) => &tail[tail.find(['/', '?', '#']).unwrap_or(tail.len())..],
        None => rest,
    };
    &rest[..rest.find(['?', '#']).unwrap_or(rest.len())]
}

fn is_scheme(candidate: &str) -> bool {
    candidate.starts_with(|c: char| c.is_ascii_alphabetic())
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
