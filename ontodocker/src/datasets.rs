use crate::client::dataset_name;
use crate::transport::{Body, Request, Transport};
use crate::{OntodockerClient, Result};
use ontodocker_address::ValidationError;
use reqwest::Method;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// The datasets of an Ontodocker server (`/api/v1/jena/{dataset}`).
///
/// Dataset names are trimmed, and must be neither blank nor contain `/`.
#[derive(Debug)]
pub struct Datasets<'a, T> {
    client: &'a OntodockerClient<T>,
}

impl<'a, T: Transport> Datasets<'a, T> {
    pub(crate) fn new(client: &'a OntodockerClient<T>) -> Self {
        Datasets { client }
    }

    /// The names of all datasets exposing a SPARQL endpoint, sorted and deduplicated.
    pub fn list(&self) -> Result<BTreeSet<String>> {
        Ok(self
            .client
            .endpoints()
            .list()?
            .into_iter()
            .map(|info| info.into_parts().0)
            .collect())
    }

    /// Create the dataset `name`, returning the server's answer.
    pub fn create(&self, name: &str) -> Result<String> {
        self.call(Method::PUT, name)
    }

    /// Delete the dataset `name`, returning the server's answer.
    pub fn delete(&self, name: &str) -> Result<String> {
        self.call(Method::DELETE, name)
    }

    /// The content of dataset `name`, as Turtle.
    pub fn download_turtle(&self, name: &str) -> Result<String> {
        self.call(Method::GET, name)
    }

    /// Write the content of dataset `name` as Turtle into `path`,
    /// or into `<name>.ttl` in the current directory if `path` is `None`.
    ///
    /// Returns the path of the written file.
    /// Nothing is written if the download fails.
    pub fn download_turtle_to(&self, name: &str, path: Option<&Path>) -> Result<PathBuf> {
        let name = dataset_name(name)?;
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = std::env::current_dir()?.join(format!("{name}.ttl"));
                log::warn!("no download path given, writing to {}", path.display());
                path
            }
        };
        let turtle = self.download_turtle(name)?;
        fs::write(&path, turtle)?;
        Ok(path)
    }

    /// Upload the Turtle file at `path` into dataset `name`, returning the server's answer.
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) if the file can not be read.
    pub fn upload_turtlefile<P: AsRef<Path>>(&self, name: &str, path: P) -> Result<String> {
        let name = dataset_name(name)?;
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ValidationError("path must be non-empty".into()).into());
        }
        let content = fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{name}.ttl"));
        let request = Request::new(Method::POST, self.client.dataset_url(name)).with_body(Body::File {
            field: "file".into(),
            file_name,
            content,
        });
        self.client.request_text(request)
    }

    fn call(&self, method: Method, name: &str) -> Result<String> {
        let name = dataset_name(name)?;
        self.client
            .request_text(Request::new(method, self.client.dataset_url(name)))
    }
}
