//! URL query-string boundary for [`PaginationRequest`].
//!
//! The host keeps the request in its URL; this module is the only place that
//! turns those key/value pairs into a typed request and back.

use url::{form_urlencoded, Url};

use crate::{primitives::*, PaginatorError};

pub const AFTER_KEY: &str = "after";
pub const BEFORE_KEY: &str = "before";

/// Builds a request from decoded key/value pairs. Unknown keys are ignored,
/// empty values count as absent and a repeated key keeps its last value.
pub fn request_from_pairs<I, K, V>(pairs: I) -> PaginationRequest
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut request = PaginationRequest::default();
    for (key, value) in pairs {
        let value = value.as_ref();
        let cursor = (!value.is_empty()).then(|| Cursor::from(value));
        match key.as_ref() {
            AFTER_KEY => request.after = cursor,
            BEFORE_KEY => request.before = cursor,
            _ => (),
        }
    }
    request
}

/// Parses an `application/x-www-form-urlencoded` query, with or without the
/// leading `?`.
pub fn request_from_query(query: &str) -> PaginationRequest {
    request_from_pairs(form_urlencoded::parse(strip_question_mark(query).as_bytes()))
}

pub fn request_from_url(url: &str) -> Result<PaginationRequest, PaginatorError> {
    let url = Url::parse(url)?;
    Ok(request_from_pairs(url.query_pairs()))
}

/// Rewrites `existing` so that it carries `request`, keeping every other
/// parameter in its original order.
pub fn merge_into_query(existing: &str, request: &PaginationRequest) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(strip_question_mark(existing).as_bytes()) {
        if key != AFTER_KEY && key != BEFORE_KEY {
            serializer.append_pair(&key, &value);
        }
    }
    if let Some(after) = &request.after {
        serializer.append_pair(AFTER_KEY, after.as_str());
    }
    if let Some(before) = &request.before {
        serializer.append_pair(BEFORE_KEY, before.as_str());
    }
    serializer.finish()
}

pub fn to_query(request: &PaginationRequest) -> String {
    merge_into_query("", request)
}

fn strip_question_mark(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}
