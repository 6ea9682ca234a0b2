//! Backend endpoint paths, relative to the API base URL.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Header carrying the caller identity on list and Q&A calls.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Multipart field name of the uploaded PDF.
pub const UPLOAD_FIELD: &str = "file";

#[must_use]
pub fn contracts() -> String {
    "/contracts".to_owned()
}

#[must_use]
pub fn contract(id: &str) -> String {
    format!("/contracts/{}", encode_segment(id))
}

#[must_use]
pub fn results(id: &str) -> String {
    format!("/results/{}", encode_segment(id))
}

#[must_use]
pub fn upload() -> String {
    "/upload".to_owned()
}

#[must_use]
pub fn reanalyze(id: &str) -> String {
    format!("/reanalyze/{}", encode_segment(id))
}

#[must_use]
pub fn qa(id: &str) -> String {
    format!("/qa/{}", encode_segment(id))
}

#[must_use]
pub fn summarize() -> String {
    "/summarize".to_owned()
}

#[must_use]
pub fn pdf(id: &str) -> String {
    format!("/pdf/{}", encode_segment(id))
}

/// Join a base URL and an endpoint path without doubling slashes.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Percent-encode the characters that would change the meaning of a path
/// segment. Identifiers are opaque, so anything outside the unreserved set is
/// escaped.
fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
