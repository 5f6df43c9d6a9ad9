use super::{legacy, rectify_endpoints, FormatError};
use serde_json::Value;

/// Parse the raw response of the `/api/v1/endpoints` API into a list of endpoint URLs.
///
/// If `rectify` is true, [`rectify_endpoints`] is applied to `raw` first.
///
/// The (possibly rectified) text is decoded as a JSON array of strings.
/// Older deployments emit a Python literal instead of JSON;
/// if the text is not valid JSON, it is handed to the [`legacy`] shim.
///
/// # Errors
///
/// [`FormatError::Literal`] if the text is neither JSON nor a valid literal,
/// [`FormatError::NotAListOfStrings`] if it decodes to anything but a list of strings.
pub fn parse_endpoints_response(raw: &str, rectify: bool) -> Result<Vec<String>, FormatError> {
    let rectified;
    let text = if rectify {
        rectified = rectify_endpoints(raw);
        if rectified != raw {
            log::warn!("rewrote legacy endpoints listing into https://<host>/api/v1/jena/... form");
        }
        rectified.as_str()
    } else {
        raw
    };
    match serde_json::from_str::<Value>(text) {
        Ok(value) => {
            log::debug!("endpoints listing decoded as JSON");
            from_json(value)
        }
        Err(err) => {
            log::debug!("endpoints listing is not JSON ({err}), trying legacy literal syntax");
            legacy::parse_string_list(text)
        }
    }
}

fn from_json(value: Value) -> Result<Vec<String>, FormatError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(FormatError::NotAListOfStrings(format!(
                    "JSON array containing {}",
                    json_kind(&other)
                ))),
            })
            .collect(),
        other => Err(FormatError::NotAListOfStrings(format!(
            "JSON {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
