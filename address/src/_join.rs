use super::ValidationError;

/// Join path segments onto a base URL.
///
/// Trailing slashes are stripped from `base`,
/// leading and trailing slashes are stripped from each segment,
/// and segments that become empty are dropped,
/// so that exactly one `/` separates each component.
/// If no segment survives, `base` (without its trailing slashes) is returned.
///
/// # Errors
///
/// [`ValidationError`] is returned if `base` is blank.
pub fn join_url<S: AsRef<str>>(base: &str, segments: &[S]) -> Result<String, ValidationError> {
    if base.trim().is_empty() {
        return Err(ValidationError("base must be a non-empty URL".into()));
    }
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.as_ref().trim_matches('/');
        if !segment.is_empty() {
            url.push('/');
            url.push_str(segment);
        }
    }
    Ok(url)
}
