//! Test module for `ontodocker`.
use super::config::{ENV_ADDRESS, ENV_CA_BUNDLE, ENV_INSECURE, ENV_TOKEN};
use super::transport::{Body, Request, Response};
use super::*;
use reqwest::Method;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;
use test_case::test_case;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const BASE: &str = "https://h";
const DS1: &str = "https://h/api/v1/jena/ds1/sparql";
const DS2: &str = "https://h/api/v1/jena/ds2";

/// A [`Transport`] answering with scripted responses, and recording what it was asked.
#[derive(Default)]
struct MockTransport {
    responses: RefCell<VecDeque<(u16, String)>>,
    results: RefCell<VecDeque<Value>>,
    requests: RefCell<Vec<Request>>,
    queries: RefCell<Vec<(String, String)>>,
}

impl MockTransport {
    fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back((status, body.into()));
        self
    }

    fn answer(self, results: Value) -> Self {
        self.results.borrow_mut().push_back(results);
        self
    }

    fn requests(&self) -> Vec<(Method, String)> {
        self.requests
            .borrow()
            .iter()
            .map(|r| (r.method.clone(), r.url.clone()))
            .collect()
    }

    fn client(&self) -> OntodockerClient<&Self> {
        OntodockerClient::with_transport(BaseUrl::new_unchecked(BASE), self)
    }
}

impl Transport for MockTransport {
    fn send(&self, request: Request) -> Result<Response> {
        let url = request.url.clone();
        self.requests.borrow_mut().push(request);
        let (status, body) = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or((500, "no scripted response".into()));
        Ok(Response { status, url, body })
    }

    fn sparql(&self, endpoint: &str, query: &str) -> Result<Value> {
        self.queries
            .borrow_mut()
            .push((endpoint.into(), query.into()));
        Ok(self.results.borrow_mut().pop_front().unwrap_or(Value::Null))
    }
}

fn listing() -> String {
    format!("['{DS1}', '{DS2}']")
}

fn bindings() -> Value {
    json!({
        "head": {"vars": ["s", "p"]},
        "results": {"bindings": [
            {"s": {"type": "uri", "value": "tag:a"}, "p": {"type": "literal", "value": "b"}},
            {"s": {"type": "uri", "value": "tag:c"}, "p": {"type": "literal", "value": "d"}}
        ]}
    })
}

// endpoints

#[test]
fn endpoints_list_raw() -> TestResult {
    let mock = MockTransport::default().respond(200, &listing());
    assert_eq!(mock.client().endpoints().list_raw()?, vec![DS1, DS2]);
    assert_eq!(
        mock.requests(),
        vec![(Method::GET, "https://h/api/v1/endpoints".to_string())]
    );
    Ok(())
}

#[test]
fn endpoints_list() -> TestResult {
    let mock = MockTransport::default().respond(200, &listing());
    let infos = mock.client().endpoints().list()?;
    assert_eq!(
        infos,
        vec![
            EndpointInfo::from_endpoint(DS1)?,
            EndpointInfo::from_endpoint(DS2)?
        ]
    );
    assert_eq!(infos[0].dataset(), "ds1");
    assert_eq!(infos[1].sparql_endpoint(), DS2);
    Ok(())
}

#[test]
fn endpoints_rectified_by_default() -> TestResult {
    let mock = MockTransport::default().respond(200, "['http://h:None/api/jena/ds1/sparql']");
    assert_eq!(mock.client().endpoints().list_raw()?, vec![DS1]);
    Ok(())
}

#[test]
fn endpoints_rectification_disabled() -> TestResult {
    let mock = MockTransport::default().respond(200, "['http://h:None/api/jena/ds1/sparql']");
    let client = mock.client().with_legacy_rectification(false);
    assert_eq!(
        client.endpoints().list_raw()?,
        vec!["http://h:None/api/jena/ds1/sparql"]
    );
    Ok(())
}

#[test]
fn endpoints_garbage_is_a_format_error() {
    let mock = MockTransport::default().respond(200, "<html>oops</html>");
    assert!(matches!(
        mock.client().endpoints().list_raw(),
        Err(Error::Format(FormatError::Literal { .. }))
    ));
}

#[test]
fn endpoints_bad_url_is_a_format_error() {
    let mock = MockTransport::default().respond(200, "['https://h/api/v2/jena/ds1/sparql']");
    assert!(matches!(
        mock.client().endpoints().list(),
        Err(Error::Format(FormatError::UnexpectedEndpoint(url))) if url == "https://h/api/v2/jena/ds1/sparql"
    ));
}

#[test]
fn endpoints_http_error() {
    let mock = MockTransport::default().respond(503, "maintenance");
    let err = mock.client().endpoints().list_raw().unwrap_err();
    let Error::Http(err) = err else {
        panic!("expected an HTTP error, got {err:?}");
    };
    assert_eq!(err.method, "GET");
    assert_eq!(err.url, "https://h/api/v1/endpoints");
    assert_eq!(err.status, Some(503));
    assert_eq!(err.body.as_deref(), Some("maintenance"));
    assert_eq!(
        err.to_string(),
        "GET https://h/api/v1/endpoints | status=503 | 503 Server Error: Service Unavailable"
    );
}

// datasets

#[test]
fn datasets_list_sorted_and_unique() -> TestResult {
    let raw = format!("['{DS2}', '{DS1}', 'https://h/api/v1/jena/ds1/query']");
    let mock = MockTransport::default().respond(200, &raw);
    let names: Vec<_> = mock.client().datasets().list()?.into_iter().collect();
    assert_eq!(names, vec!["ds1", "ds2"]);
    Ok(())
}

#[test]
fn datasets_list_two_endpoints() -> TestResult {
    let mock = MockTransport::default().respond(200, &listing());
    let names: Vec<_> = mock.client().datasets().list()?.into_iter().collect();
    assert_eq!(names, vec!["ds1", "ds2"]);
    Ok(())
}

#[test_case(Method::PUT; "create")]
#[test_case(Method::DELETE; "delete")]
#[test_case(Method::GET; "download")]
fn datasets_call(method: Method) -> TestResult {
    let mock = MockTransport::default().respond(200, "done");
    let client = mock.client();
    let datasets = client.datasets();
    let text = if method == Method::PUT {
        datasets.create(" ds1 ")?
    } else if method == Method::DELETE {
        datasets.delete(" ds1 ")?
    } else {
        datasets.download_turtle(" ds1 ")?
    };
    assert_eq!(text, "done");
    assert_eq!(
        mock.requests(),
        vec![(method, "https://h/api/v1/jena/ds1".to_string())]
    );
    Ok(())
}

#[test_case(""; "empty")]
#[test_case("  \t"; "blank")]
#[test_case("a/b"; "slash")]
fn datasets_invalid_name(name: &str) {
    let mock = MockTransport::default().respond(200, "done");
    assert!(matches!(
        mock.client().datasets().create(name),
        Err(Error::Validation(_))
    ));
    assert!(mock.requests().is_empty());
}

#[test]
fn datasets_create_conflict() {
    let mock = MockTransport::default().respond(409, "dataset exists");
    match mock.client().datasets().create("ds1") {
        Err(Error::Http(err)) => {
            assert_eq!(err.method, "PUT");
            assert_eq!(err.status, Some(409));
            assert_eq!(err.message.as_deref(), Some("409 Client Error: Conflict"));
            assert_eq!(err.body.as_deref(), Some("dataset exists"));
        }
        other => panic!("expected an HTTP error, got {other:?}"),
    }
}

#[test]
fn datasets_download_to_file() -> TestResult {
    let turtle = "<tag:s> <tag:p> <tag:o> .\n";
    let mock = MockTransport::default().respond(200, turtle);
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("out.ttl");
    let written = mock.client().datasets().download_turtle_to("ds1", Some(&path))?;
    assert_eq!(written, path);
    assert_eq!(std::fs::read_to_string(&path)?, turtle);
    Ok(())
}

#[test]
fn datasets_failed_download_writes_nothing() -> TestResult {
    let mock = MockTransport::default().respond(404, "not found");
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("out.ttl");
    let res = mock.client().datasets().download_turtle_to("ds1", Some(&path));
    assert!(matches!(res, Err(Error::Http(_))));
    assert!(!path.exists());
    Ok(())
}

#[test]
fn datasets_upload() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("data.ttl");
    std::fs::write(&path, "<tag:s> <tag:p> <tag:o> .\n")?;
    let mock = MockTransport::default().respond(200, "uploaded");
    assert_eq!(
        mock.client().datasets().upload_turtlefile("ds1", &path)?,
        "uploaded"
    );
    let requests = mock.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].url, "https://h/api/v1/jena/ds1");
    assert_eq!(
        requests[0].body,
        Body::File {
            field: "file".into(),
            file_name: "data.ttl".into(),
            content: b"<tag:s> <tag:p> <tag:o> .\n".to_vec(),
        }
    );
    Ok(())
}

#[test]
fn datasets_upload_missing_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mock = MockTransport::default().respond(200, "uploaded");
    let res = mock
        .client()
        .datasets()
        .upload_turtlefile("ds1", dir.path().join("missing.ttl"));
    assert!(matches!(res, Err(Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound));
    assert!(mock.requests().is_empty());
    Ok(())
}

// sparql

#[test_case("ds1", "https://h/api/v1/jena/ds1/sparql"; "plain")]
#[test_case(" ds1\n", "https://h/api/v1/jena/ds1/sparql"; "trimmed")]
fn sparql_endpoint(dataset: &str, expected: &str) -> TestResult {
    let mock = MockTransport::default();
    assert_eq!(mock.client().sparql().endpoint(dataset)?, expected);
    assert!(mock.requests().is_empty());
    Ok(())
}

#[test]
fn sparql_endpoint_blank() {
    let mock = MockTransport::default();
    assert!(matches!(
        mock.client().sparql().endpoint(" "),
        Err(Error::Validation(_))
    ));
}

#[test]
fn sparql_query() -> TestResult {
    let mock = MockTransport::default().answer(bindings());
    let table = mock
        .client()
        .sparql()
        .query("ds1", "SELECT ?s ?p { ?s ?p [] }", &["s", "p"])?;
    assert_eq!(table.columns(), ["s", "p"]);
    assert_eq!(table.rows(), [vec!["tag:a", "b"], vec!["tag:c", "d"]]);
    assert_eq!(
        *mock.queries.borrow(),
        vec![(DS1.to_string(), "SELECT ?s ?p { ?s ?p [] }".to_string())]
    );
    Ok(())
}

#[test]
fn sparql_query_raw() -> TestResult {
    let mock = MockTransport::default().answer(json!({"head": {}, "boolean": true}));
    let value = mock.client().sparql().query_raw("ds1", "ASK {}")?;
    assert_eq!(value["boolean"], json!(true));
    Ok(())
}

#[test]
fn sparql_shape_mismatch() {
    let mock = MockTransport::default().answer(bindings());
    assert!(matches!(
        mock.client().sparql().query("ds1", "SELECT * {}", &["s", "p", "o"]),
        Err(Error::Table(TableError::ShapeMismatch {
            row: 0,
            expected: 3,
            found: 2
        }))
    ));
}

#[test_case("ds1", " ", &["s"], "query must be non-empty"; "blank query")]
#[test_case("ds1", "SELECT * {}", &[], "columns must be non-empty"; "no column")]
#[test_case("", "SELECT * {}", &["s"], "dataset name must be non-empty"; "blank dataset")]
#[test_case("", "", &[], "query must be non-empty"; "query checked first")]
#[test_case("", "SELECT * {}", &[], "columns must be non-empty"; "columns checked before dataset")]
fn sparql_query_invalid(dataset: &str, query: &str, columns: &[&str], message: &str) {
    let mock = MockTransport::default().answer(bindings());
    match mock.client().sparql().query(dataset, query, columns) {
        Err(Error::Validation(err)) => assert_eq!(err.0, message),
        other => panic!("expected a validation error, got {other:?}"),
    }
    assert!(mock.queries.borrow().is_empty());
}

// errors

#[test]
fn sparql_status_becomes_http_error() {
    let err: Error = sparql_client::Error::Status {
        url: DS1.into(),
        status: 401,
        body: Some("unauthorized".into()),
    }
    .into();
    match err {
        Error::Http(err) => {
            assert_eq!(err.method, "POST");
            assert_eq!(err.url, DS1);
            assert_eq!(err.status, Some(401));
            assert_eq!(err.body.as_deref(), Some("unauthorized"));
        }
        other => panic!("expected an HTTP error, got {other:?}"),
    }
}

#[test]
fn sparql_unsupported_stays_sparql_error() {
    let err: Error = sparql_client::Error::Unsupported("text/html".into()).into();
    assert!(matches!(err, Error::Sparql(_)));
}

#[test_case(None, None, "GET https://h/x"; "bare")]
#[test_case(Some(404), None, "GET https://h/x | status=404"; "status only")]
#[test_case(Some(404), Some("not here"), "GET https://h/x | status=404 | not here"; "status and message")]
#[test_case(None, Some(""), "GET https://h/x"; "empty message")]
fn http_error_display(status: Option<u16>, message: Option<&str>, expected: &str) {
    let err = HttpError {
        method: "GET".into(),
        url: "https://h/x".into(),
        status,
        message: message.map(Into::into),
        body: None,
    };
    assert_eq!(err.to_string(), expected);
}

// config and client construction

#[test]
fn config_defaults() {
    let config = ClientConfig::new("h");
    assert_eq!(config.token, None);
    assert_eq!(config.tls, Tls::Verify);
    assert_eq!(config.connect_timeout, Duration::from_secs(30));
    assert_eq!(config.read_timeout, Duration::from_secs(30));
    assert!(config.rectify_legacy);
    assert_eq!(config.normalize.default_scheme, "https");
    assert_eq!(config.normalize.allowed_schemes, ["http", "https"]);
}

#[test]
fn config_blank_token_is_no_token() {
    assert_eq!(ClientConfig::new("h").with_token("  ").token, None);
    assert_eq!(
        ClientConfig::new("h").with_token(" t0k3n ").token.as_deref(),
        Some("t0k3n")
    );
}

#[test]
fn config_debug_redacts_token() {
    let debug = format!("{:?}", ClientConfig::new("h").with_token("s3cr3t"));
    assert!(!debug.contains("s3cr3t"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn config_from_vars() -> TestResult {
    let vars: HashMap<&str, &str> = [
        (ENV_ADDRESS, "h:8080"),
        (ENV_TOKEN, "t0k3n"),
        (ENV_INSECURE, "true"),
    ]
    .into_iter()
    .collect();
    let config = ClientConfig::from_vars(|name| vars.get(name).map(|v| v.to_string()))?;
    assert_eq!(config.address, "h:8080");
    assert_eq!(config.token.as_deref(), Some("t0k3n"));
    assert_eq!(config.tls, Tls::Insecure);
    Ok(())
}

#[test]
fn config_from_vars_ca_bundle() -> TestResult {
    let config = ClientConfig::from_vars(|name| match name {
        ENV_ADDRESS => Some("h".into()),
        ENV_CA_BUNDLE => Some("/etc/ssl/ca.pem".into()),
        ENV_INSECURE => Some("0".into()),
        _ => None,
    })?;
    assert_eq!(config.tls, Tls::CaBundle("/etc/ssl/ca.pem".into()));
    assert_eq!(config.token, None);
    Ok(())
}

#[test]
fn config_from_vars_requires_address() {
    assert!(matches!(
        ClientConfig::from_vars(|_| None),
        Err(Error::Validation(_))
    ));
}

#[test]
fn client_normalizes_address() -> TestResult {
    let client = OntodockerClient::new(&ClientConfig::new("Ontodocker.Example.org:8443/"))?;
    assert_eq!(client.base_url(), "https://ontodocker.example.org:8443");
    let client = OntodockerClient::new(&ClientConfig::new("h").with_default_scheme("http"))?;
    assert_eq!(client.base_url(), "http://h");
    Ok(())
}

#[test_case(""; "empty")]
#[test_case("ftp://h"; "scheme")]
#[test_case("h/foo"; "path")]
fn client_invalid_address(address: &str) {
    assert!(matches!(
        OntodockerClient::from_address(address),
        Err(Error::InvalidAddress(_))
    ));
}

#[test]
fn client_restricted_schemes() {
    let config = ClientConfig::new("http://h").with_allowed_schemes(["https"]);
    assert!(matches!(
        OntodockerClient::new(&config),
        Err(Error::InvalidAddress(_))
    ));
}

#[test]
fn http_transport_rejects_invalid_token() {
    let config = ClientConfig::new("h").with_token("bad\ntoken");
    assert!(matches!(
        HttpTransport::new(&config),
        Err(Error::Validation(_))
    ));
}

#[test]
fn http_transport_missing_ca_bundle() -> TestResult {
    let dir = tempfile::tempdir()?;
    let config = ClientConfig::new("h").with_tls(Tls::CaBundle(dir.path().join("missing.pem")));
    assert!(matches!(HttpTransport::new(&config), Err(Error::Io(_))));
    Ok(())
}

#[test]
fn http_transport_builds() -> TestResult {
    let config = ClientConfig::new("h")
        .with_token("t0k3n")
        .with_tls(Tls::Insecure)
        .with_connect_timeout(Duration::from_secs(5))
        .with_read_timeout(Duration::from_secs(60))
        .with_user_agent("test-agent");
    HttpTransport::new(&config)?;
    Ok(())
}

// live server

fn live_client() -> std::result::Result<OntodockerClient, Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()
        .map_err(|_| format!("Please set {ENV_ADDRESS} (and {ENV_TOKEN}) to a running server"))?;
    Ok(OntodockerClient::new(&config)?)
}

#[test]
#[ignore = "requires a running Ontodocker server"]
fn live_endpoints_match_datasets() -> TestResult {
    let client = live_client()?;
    let infos = client.endpoints().list()?;
    let datasets = client.datasets().list()?;
    for info in &infos {
        assert!(datasets.contains(info.dataset()));
    }
    Ok(())
}

#[test]
#[ignore = "requires a running Ontodocker server"]
fn live_dataset_lifecycle() -> TestResult {
    let client = live_client()?;
    let name = "ontodocker-rs-test";
    client.datasets().create(name)?;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("data.ttl");
    std::fs::write(&path, "<tag:s> <tag:p> \"o\" .\n")?;
    client.datasets().upload_turtlefile(name, &path)?;
    let table = client
        .sparql()
        .query(name, "SELECT ?s ?o { ?s <tag:p> ?o }", &["s", "o"])?;
    assert_eq!(table.get(0, "o"), Some("o"));
    assert!(client.datasets().download_turtle(name)?.contains("tag:p"));
    client.datasets().delete(name)?;
    Ok(())
}
