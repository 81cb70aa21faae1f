//! Pagination through the `Range` header.
//!
//! List endpoints page through results with a header of the form
//!
//! ```text
//! Range: <field> <first_id>..<last_id>; max=<max>, order=desc
//! ```
//!
//! Every part except the `..` boundary is optional.

use crate::{Error, Result};
use reqwest::header::{HeaderValue, RANGE};
use reqwest::Request;
use std::fmt;

/// Window of a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRange {
    /// Field results are ordered and bounded by; empty for the default order.
    pub field: String,
    /// Maximum number of results; zero leaves the page size to the server.
    pub max: u32,
    /// Whether results come back in descending order.
    pub descending: bool,
    /// Lower boundary; empty starts from the beginning.
    pub first_id: String,
    /// Upper boundary; empty runs to the end.
    pub last_id: String,
}

impl ListRange {
    /// Create an unbounded range.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Order and bound results by the given field.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Limit the number of results.
    #[must_use]
    pub const fn with_max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    /// Request descending order.
    #[must_use]
    pub const fn descending(mut self) -> Self {
        self.descending = true;
        self
    }

    /// Set both boundaries.
    #[must_use]
    pub fn between(mut self, first_id: impl Into<String>, last_id: impl Into<String>) -> Self {
        self.first_id = first_id.into();
        self.last_id = last_id.into();
        self
    }

    /// Start after the given boundary, as when resuming from the last item seen.
    #[must_use]
    pub fn starting_at(mut self, first_id: impl Into<String>) -> Self {
        self.first_id = first_id.into();
        self
    }

    /// Encode the range as a header value.
    #[must_use]
    pub fn header_value(&self) -> String {
        self.to_string()
    }

    /// Set the `Range` header of a request, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if a boundary or field contains
    /// characters not allowed in a header.
    pub fn apply(&self, request: &mut Request) -> Result<()> {
        let value = HeaderValue::from_str(&self.header_value())
            .map_err(|err| Error::InvalidRequest(format!("Invalid range header: {err}")))?;
        request.headers_mut().insert(RANGE, value);
        Ok(())
    }
}

impl fmt::Display for ListRange {
    // With both max and descending set the separator is written twice
    // (`; max=5, , order=desc`). The wire form must stay byte-identical.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.field.is_empty() {
            write!(f, "{} ", self.field)?;
        }
        write!(f, "{}..{}", self.first_id, self.last_id)?;
        if self.max != 0 {
            write!(f, "; max={}", self.max)?;
            if self.descending {
                f.write_str(", ")?;
            }
        }
        if self.descending {
            f.write_str(", order=desc")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn range(field: &str, first: &str, last: &str, max: u32, descending: bool) -> ListRange {
        ListRange {
            field: field.to_string(),
            max,
            descending,
            first_id: first.to_string(),
            last_id: last.to_string(),
        }
    }

    #[test]
    fn bare_boundaries() {
        assert_eq!(range("", "", "", 0, false).header_value(), "..");
        assert_eq!(range("", "", "abc123", 0, false).header_value(), "..abc123");
        assert_eq!(range("", "xyz", "", 0, false).header_value(), "xyz..");
        assert_eq!(range("", "a", "b", 0, false).header_value(), "a..b");
    }

    #[test]
    fn field_and_max() {
        assert_eq!(
            range("seq", "10", "20", 5, false).header_value(),
            "seq 10..20; max=5"
        );
    }

    #[test]
    fn max_and_descending_keeps_double_separator() {
        assert_eq!(
            range("seq", "10", "20", 5, true).header_value(),
            "seq 10..20; max=5, , order=desc"
        );
    }

    #[test]
    fn descending_without_max() {
        assert_eq!(
            range("name", "a", "z", 0, true).header_value(),
            "name a..z, order=desc"
        );
        assert_eq!(range("", "", "", 0, true).header_value(), ".., order=desc");
    }

    #[test]
    fn builder_matches_literal() {
        let built = ListRange::new()
            .with_field("id")
            .with_max(200)
            .starting_at("01234567-89ab-cdef-0123-456789abcdef");
        assert_eq!(
            built.header_value(),
            "id 01234567-89ab-cdef-0123-456789abcdef..; max=200"
        );
        assert_eq!(
            ListRange::new().between("1", "2").descending(),
            range("", "1", "2", 0, true)
        );
    }

    #[test]
    fn apply_overwrites_previous_value() {
        let url = "https://api.heroku.com/apps".parse().unwrap();
        let mut request = Request::new(Method::GET, url);

        range("name", "", "", 10, false).apply(&mut request).unwrap();
        range("name", "", "", 10, false).apply(&mut request).unwrap();
        assert_eq!(request.headers().get_all(RANGE).iter().count(), 1);

        range("id", "", "", 0, true).apply(&mut request).unwrap();
        let values: Vec<_> = request.headers().get_all(RANGE).iter().collect();
        assert_eq!(values, vec!["id .., order=desc"]);
    }

    #[test]
    fn apply_rejects_control_characters() {
        let url = "https://api.heroku.com/apps".parse().unwrap();
        let mut request = Request::new(Method::GET, url);
        let err = range("na\nme", "", "", 0, false)
            .apply(&mut request)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
        assert!(request.headers().get(RANGE).is_none());
    }
}
