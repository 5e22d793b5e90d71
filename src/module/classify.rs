//! Response classification
//!
//! Content type is checked before the status code: some proxies answer errors with
//! HTML or plain text, others with JSON, so a non-JSON body is never decoded.

use reqwest::StatusCode;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Handling path for a proxy response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// 2xx with a JSON body: decode a `ModuleInfo`
    SuccessJson,
    /// Non-2xx with a JSON body: decode for diagnostics, then fail
    ErrorJson,
    /// Anything without a JSON content type, whatever the status
    Unrecognized,
}

impl ResponseKind {
    pub fn classify(status: StatusCode, content_type: Option<&str>) -> Self {
        let is_json = content_type.is_some_and(is_json_media_type);
        let is_2xx = status.is_success();

        match (is_json, is_2xx) {
            (true, true) => ResponseKind::SuccessJson,
            (true, false) => ResponseKind::ErrorJson,
            (false, _) => ResponseKind::Unrecognized,
        }
    }
}

/// Compares the media type only, ignoring parameters such as `charset`
fn is_json_media_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
}
