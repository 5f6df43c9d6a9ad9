/// Textual substitutions repairing endpoint listings of older Ontodocker builds,
/// applied in this order.
pub const LEGACY_SUBSTITUTIONS: [(&str, &str); 3] = [
    ("http:", "https:"),
    (":None/api/jena", "/api/v1/jena"),
    (":443/api/jena", "/api/v1/jena"),
];

/// Rewrite a raw `/api/v1/endpoints` response produced by an older Ontodocker build.
///
/// Those builds emit `http:` URLs for services exposed over HTTPS,
/// omit the `/v1` version segment,
/// and insert a spurious port (`:None` or `:443`) before `/api/jena`.
/// The result uses the `https://<host>/api/v1/jena/<dataset>/...` form.
///
/// Well-formed responses served over HTTPS are left unchanged.
pub fn rectify_endpoints(raw: &str) -> String {
    LEGACY_SUBSTITUTIONS
        .iter()
        .fold(raw.to_string(), |text, &(from, to)| text.replace(from, to))
}
