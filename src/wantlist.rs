//! Wantlist resources.

use http::Method;
use serde::Serialize;

use crate::encode::{add_params, percent_encode};
use crate::{AuthLevel, Endpoint, Pagination, Result};

/// Notes and rating attached to a wantlist entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WantlistNotes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// 0 to 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

fn release_path(user: &str, release: u64) -> String {
    format!("/users/{}/wants/{}", percent_encode(user), release)
}

fn release_endpoint(
    method: Method,
    user: &str,
    release: u64,
    notes: Option<&WantlistNotes>,
) -> Result<Endpoint> {
    let path = release_path(user, release);
    let path = match notes {
        Some(notes) => add_params(&path, notes)?,
        None => path,
    };
    Ok(Endpoint::new(method, path).level(AuthLevel::AccessToken))
}

/// Releases on the wantlist of `user`.
pub fn releases(user: &str, pagination: Option<&Pagination>) -> Result<Endpoint> {
    let path = format!("/users/{}/wants", percent_encode(user));
    let path = match pagination {
        Some(pagination) => add_params(&path, pagination)?,
        None => path,
    };
    Ok(Endpoint::get(path))
}

pub fn add_release(user: &str, release: u64, notes: Option<&WantlistNotes>) -> Result<Endpoint> {
    release_endpoint(Method::PUT, user, release, notes)
}

pub fn edit_notes(user: &str, release: u64, notes: &WantlistNotes) -> Result<Endpoint> {
    release_endpoint(Method::PUT, user, release, Some(notes))
}

pub fn remove_release(user: &str, release: u64) -> Endpoint {
    Endpoint::delete(release_path(user, release)).level(AuthLevel::AccessToken)
}
