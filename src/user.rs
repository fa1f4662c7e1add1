//! User profile resources.

use crate::encode::{add_params, percent_encode};
use crate::{AuthLevel, Endpoint, Pagination, Result};

fn user_path(user: &str) -> String {
    format!("/users/{}", percent_encode(user))
}

fn paged(path: String, pagination: Option<&Pagination>) -> Result<Endpoint> {
    let path = match pagination {
        Some(pagination) => add_params(&path, pagination)?,
        None => path,
    };
    Ok(Endpoint::get(path))
}

/// The profile of `user`.
pub fn profile(user: &str) -> Endpoint {
    Endpoint::get(user_path(user))
}

/// Items `user` has for sale.
pub fn inventory(user: &str, pagination: Option<&Pagination>) -> Result<Endpoint> {
    paged(format!("{}/inventory", user_path(user)), pagination)
}

pub fn contributions(user: &str, pagination: Option<&Pagination>) -> Result<Endpoint> {
    paged(format!("{}/contributions", user_path(user)), pagination)
}

pub fn submissions(user: &str, pagination: Option<&Pagination>) -> Result<Endpoint> {
    paged(format!("{}/submissions", user_path(user)), pagination)
}

pub fn lists(user: &str, pagination: Option<&Pagination>) -> Result<Endpoint> {
    paged(format!("{}/lists", user_path(user)), pagination)
}

/// The user the session is authorized for.
pub fn identity() -> Endpoint {
    Endpoint::get("/oauth/identity").level(AuthLevel::AccessToken)
}
