use http::Method;
use serde::Serialize;

use crate::AuthLevel;

/// A Discogs API resource: method, path relative to the API root and the
/// authorization level it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub required_level: AuthLevel,
}

impl Endpoint {
    pub fn new<T: Into<String>>(method: Method, path: T) -> Self {
        Endpoint {
            method,
            path: path.into(),
            required_level: AuthLevel::None,
        }
    }

    pub fn get<T: Into<String>>(path: T) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn put<T: Into<String>>(path: T) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete<T: Into<String>>(path: T) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn level(self, required_level: AuthLevel) -> Self {
        Endpoint {
            required_level,
            ..self
        }
    }

    /// Absolute url under `base_url`, e.g. `https://api.discogs.com`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

/// Paging and ordering parameters accepted by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Pagination {
    pub fn page(page: u32, per_page: u32) -> Self {
        Pagination {
            page: Some(page),
            per_page: Some(per_page),
            ..Default::default()
        }
    }

    pub fn sort<T: Into<String>>(self, sort: T, sort_order: SortOrder) -> Self {
        Pagination {
            sort: Some(sort.into()),
            sort_order: Some(sort_order),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}
