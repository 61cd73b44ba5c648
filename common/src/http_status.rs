//! HTTP status code utilities for availability replies.

/// HTTP status code of an availability reply.
///
/// Stored directly so callers can tell an exact `200` apart from any `2xx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    pub const OK: HttpStatusCode = HttpStatusCode(200);

    /// Exactly `200 OK`.
    pub fn is_ok(&self) -> bool {
        self.0 == 200
    }

    /// Any `2xx`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
