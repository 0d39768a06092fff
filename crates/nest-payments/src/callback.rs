//! Payment Callback
//!
//! What comes back from the hosted payment page.

/// Pull `reference` out of a `/payment-success` query string.
///
/// Accepts the query with or without its leading `?`. Empty values are
/// treated as absent.
pub fn reference_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "reference")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_from_query() {
        assert_eq!(
            reference_from_query("?reference=DN_1_2&trxref=DN_1_2"),
            Some("DN_1_2".into())
        );
        assert_eq!(reference_from_query("trxref=x&reference=abc%20d"), Some("abc d".into()));
    }

    #[test]
    fn test_missing_reference() {
        assert_eq!(reference_from_query(""), None);
        assert_eq!(reference_from_query("?trxref=x"), None);
        assert_eq!(reference_from_query("?reference="), None);
    }
}
