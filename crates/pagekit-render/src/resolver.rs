//! Page URL resolution strategies.

use std::fmt;
use std::sync::Arc;

use http::{Request, Uri};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use pagekit_core::error::{AppError, ErrorKind};

/// Query parameter overridden with the target page number.
pub const PAGE_PARAMETER: &str = "page";

/// Separator between query pairs. Escaped because the URL ends up in an HTML attribute.
const QUERY_SEPARATOR: &str = "&amp;";

/// Bytes left as-is by HTML form encoding. Spaces are turned into `+` afterwards.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b' ');

/// Produces the URL of a page.
pub trait LinkResolver: Send + Sync {
    /// Return the URL that shows `page`.
    fn resolve(&self, page: u64) -> String;
}

/// Resolver backed by a caller supplied closure.
pub struct FunctionResolver {
    generator: Box<dyn Fn(u64) -> String + Send + Sync>,
}

impl FunctionResolver {
    /// Wrap a closure mapping a page number to its URL.
    pub fn new<F>(generator: F) -> Self
    where
        F: Fn(u64) -> String + Send + Sync + 'static,
    {
        Self {
            generator: Box::new(generator),
        }
    }
}

impl LinkResolver for FunctionResolver {
    fn resolve(&self, page: u64) -> String {
        (self.generator)(page)
    }
}

impl fmt::Debug for FunctionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionResolver").finish_non_exhaustive()
    }
}

/// Resolver that keeps the current request path and query, replacing only the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDerivedResolver {
    path: String,
    query: Vec<(String, String)>,
}

impl RequestDerivedResolver {
    /// Build from a path (any query string is dropped) and ordered query pairs.
    pub fn new(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        let mut path = path.into();
        if let Some(pos) = path.find('?') {
            path.truncate(pos);
        }
        Self { path, query }
    }

    /// Build from a request URI.
    pub fn from_uri(uri: &Uri) -> Self {
        let query = uri.query().map(parse_query).unwrap_or_default();
        Self::new(uri.path(), query)
    }

    /// Build from an inbound HTTP request.
    pub fn from_request<B>(request: &Request<B>) -> Self {
        Self::from_uri(request.uri())
    }

    /// Parse a request URI such as `/files?sort=name&page=2`.
    pub fn parse(uri: &str) -> Result<Self, AppError> {
        let uri: Uri = uri.parse().map_err(|e| {
            AppError::with_source(
                ErrorKind::InvalidInput,
                format!("Invalid request URI '{uri}'"),
                e,
            )
        })?;
        Ok(Self::from_uri(&uri))
    }

    /// Request path without its query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs of the inbound request, in order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Query pairs with the page parameter set to `page`.
    ///
    /// Each key appears once, at the position of its first occurrence and
    /// with its last value. An existing page parameter keeps its position;
    /// otherwise it is appended.
    fn merged_query(&self, page: u64) -> Vec<(&str, String)> {
        let mut merged: Vec<(&str, String)> = Vec::with_capacity(self.query.len() + 1);

        for (key, value) in &self.query {
            let value = if key == PAGE_PARAMETER {
                page.to_string()
            } else {
                value.clone()
            };

            match merged.iter_mut().find(|(existing, _)| *existing == key.as_str()) {
                Some(slot) => slot.1 = value,
                None => merged.push((key.as_str(), value)),
            }
        }

        if !merged.iter().any(|(key, _)| *key == PAGE_PARAMETER) {
            merged.push((PAGE_PARAMETER, page.to_string()));
        }

        merged
    }
}

impl LinkResolver for RequestDerivedResolver {
    fn resolve(&self, page: u64) -> String {
        let query = self
            .merged_query(page)
            .into_iter()
            .map(|(key, value)| format!("{}={}", form_encode(key), form_encode(&value)))
            .collect::<Vec<_>>()
            .join(QUERY_SEPARATOR);

        format!("{}?{}", self.path, query)
    }
}

/// Where page URLs come from, chosen explicitly at construction.
#[derive(Clone)]
pub enum LinkSource {
    /// A caller supplied function of the page number.
    Function(Arc<FunctionResolver>),
    /// The current request with the page parameter overridden.
    Request(RequestDerivedResolver),
    /// Any other resolver implementation.
    Custom(Arc<dyn LinkResolver>),
}

impl LinkSource {
    /// Use a closure as URL generator.
    pub fn function<F>(generator: F) -> Self
    where
        F: Fn(u64) -> String + Send + Sync + 'static,
    {
        Self::Function(Arc::new(FunctionResolver::new(generator)))
    }

    /// Derive URLs from an inbound request.
    pub fn request<B>(request: &Request<B>) -> Self {
        Self::Request(RequestDerivedResolver::from_request(request))
    }

    /// Turn the source into a shareable resolver.
    pub fn into_resolver(self) -> Arc<dyn LinkResolver> {
        let resolver: Arc<dyn LinkResolver> = match self {
            Self::Function(resolver) => resolver,
            Self::Request(resolver) => Arc::new(resolver),
            Self::Custom(resolver) => resolver,
        };
        resolver
    }
}

impl fmt::Debug for LinkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("LinkSource::Function"),
            Self::Request(resolver) => f.debug_tuple("LinkSource::Request").field(resolver).finish(),
            Self::Custom(_) => f.write_str("LinkSource::Custom"),
        }
    }
}

impl From<RequestDerivedResolver> for LinkSource {
    fn from(resolver: RequestDerivedResolver) -> Self {
        Self::Request(resolver)
    }
}

impl From<FunctionResolver> for LinkSource {
    fn from(resolver: FunctionResolver) -> Self {
        Self::Function(Arc::new(resolver))
    }
}

/// Split a raw query string into decoded, ordered pairs.
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (form_decode(key), form_decode(value)),
            None => (form_decode(pair), String::new()),
        })
        .collect()
}

fn form_decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    percent_decode_str(&raw).decode_utf8_lossy().into_owned()
}

fn form_encode(raw: &str) -> String {
    utf8_percent_encode(raw, FORM_ENCODE_SET)
        .to_string()
        .replace(' ', "+")
}
