//! Delivery timestamp formatting.
//!
//! The provider requires `deliveryTimeStamp` in `dd/MM/yyyy HH:mm:ss GMT`,
//! always UTC, with a literal `GMT` suffix.

use chrono::Utc;

/// chrono format string for `deliveryTimeStamp`.
pub const DELIVERY_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S GMT";

/// Current instant in the provider's timestamp format.
///
/// Reads the real-time clock at call time.
pub fn delivery_timestamp() -> String {
    Utc::now().format(DELIVERY_TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_timestamp_shape() {
        let ts = delivery_timestamp();

        // dd/MM/yyyy HH:mm:ss GMT
        assert_eq!(ts.len(), 23);
        assert!(ts.ends_with(" GMT"));
        assert_eq!(&ts[2..3], "/");
        assert_eq!(&ts[5..6], "/");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
        assert_eq!(&ts[16..17], ":");
    }

    #[test]
    fn test_timestamp_is_current_utc() {
        let ts = delivery_timestamp();

        let parsed = NaiveDateTime::parse_from_str(&ts, DELIVERY_TIMESTAMP_FORMAT)
            .expect("timestamp must round-trip through its own format");
        let drift = (Utc::now().naive_utc() - parsed).num_seconds().abs();

        assert!(drift <= 2, "timestamp drifted {drift}s from now: {ts}");
    }
}
