//! Immutable request descriptor and its builder

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Query and body parameter mapping
pub type Params = Map<String, Value>;

/// Immutable description of one planned HTTP call.
///
/// Built through [`ApiRequestBuilder`]; fields that were never set are
/// absent (`None`), never defaulted to an empty string or map, so the
/// execution layer can distinguish "no body" from "empty body".
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    scheme: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    version: Option<String>,
    path: Option<String>,
    headers: Option<HashMap<String, String>>,
    query_parameters: Option<Params>,
    body_parameters: Option<Params>,
}

impl ApiRequest {
    /// Start building a request
    pub fn builder() -> ApiRequestBuilder {
        ApiRequestBuilder::new()
    }

    /// URI scheme, e.g. `https`
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Target host
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Target port
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// API version segment, e.g. `v2`
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Resource path, carrying its own leading `/`
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// All headers, keys exactly as stored (no normalization)
    pub fn headers(&self) -> Option<&HashMap<String, String>> {
        self.headers.as_ref()
    }

    /// A single header value, looked up by its exact name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref()?.get(name).map(String::as_str)
    }

    /// Query parameters, if any were set
    pub fn query_parameters(&self) -> Option<&Params> {
        self.query_parameters.as_ref()
    }

    /// Body parameters, if any were set
    pub fn body_parameters(&self) -> Option<&Params> {
        self.body_parameters.as_ref()
    }

    /// Assemble the request URI on demand:
    /// `{scheme}://{host}[:{port}][/{version}]{path}`.
    ///
    /// The port is omitted when it is the scheme's well-known default and the
    /// version segment is omitted when absent or empty. Missing scheme/host
    /// render as empty segments; the builder is a data accumulator and does
    /// not validate (the vendor factory always seeds usable values).
    pub fn uri(&self) -> String {
        let scheme = self.scheme.as_deref().unwrap_or("");
        let host = self.host.as_deref().unwrap_or("");
        let mut uri = format!("{scheme}://{host}");
        if let Some(port) = self.port {
            if !is_default_port(scheme, port) {
                uri.push_str(&format!(":{port}"));
            }
        }
        if let Some(version) = self.version.as_deref() {
            if !version.is_empty() {
                uri.push('/');
                uri.push_str(version);
            }
        }
        if let Some(path) = self.path.as_deref() {
            uri.push_str(path);
        }
        uri
    }
}

fn is_default_port(scheme: &str, port: u16) -> bool {
    matches!((scheme, port), ("http", 80) | ("https", 443))
}

/// Chainable builder for [`ApiRequest`].
///
/// Scalar setters replace their field; the `headers`, `query_parameters` and
/// `body_parameters` setters merge key by key, so calling one twice
/// adds/overwrites individual entries rather than replacing the whole map.
/// Nothing is validated.
#[derive(Debug, Clone, Default)]
pub struct ApiRequestBuilder {
    scheme: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    version: Option<String>,
    path: Option<String>,
    headers: Option<HashMap<String, String>>,
    query_parameters: Option<Params>,
    body_parameters: Option<Params>,
}

impl ApiRequestBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URI scheme
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Set the host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the API version segment
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the resource path (with its leading `/`)
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Merge headers into the accumulated header map
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = self.headers.get_or_insert_with(HashMap::new);
        for (name, value) in headers {
            map.insert(name.into(), value.into());
        }
        self
    }

    /// Merge query parameters into the accumulated map
    pub fn query_parameters<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let map = self.query_parameters.get_or_insert_with(Params::new);
        for (key, value) in parameters {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Merge body parameters into the accumulated map
    pub fn body_parameters<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let map = self.body_parameters.get_or_insert_with(Params::new);
        for (key, value) in parameters {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Snapshot the accumulated state into an immutable descriptor
    pub fn build(self) -> ApiRequest {
        ApiRequest {
            scheme: self.scheme,
            host: self.host,
            port: self.port,
            version: self.version,
            path: self.path,
            headers: self.headers,
            query_parameters: self.query_parameters,
            body_parameters: self.body_parameters,
        }
    }
}
