//! The seam between the index page and whatever layer knows who is signed in.
//!
//! Nothing in this crate validates sessions. An [`Identity`] is asked for the
//! current user on each request and its answer is passed to the view as-is.

use axum::http::HeaderMap;

use crate::html::User;

pub trait Identity: Send + Sync {
    /// The user making this request, if any.
    fn user(&self, headers: &HeaderMap) -> Option<User>;
}

/// Every request is logged out.
#[derive(Debug, Default, Clone, Copy)]
pub struct Anonymous;

impl Identity for Anonymous {
    fn user(&self, _headers: &HeaderMap) -> Option<User> {
        None
    }
}

/// Every request is made by the same user. Used to preview the signed-in page.
#[derive(Debug, Clone)]
pub struct Preview(pub User);

impl Identity for Preview {
    fn user(&self, _headers: &HeaderMap) -> Option<User> {
        Some(self.0.clone())
    }
}
