//! Lexical classifier for MySQL server error messages.
//!
//! The driver renders server errors as `Error NNNN (sqlstate): message`.
//! Collection logic only needs to know whether a failure carries one of a
//! couple of well-known codes, so this matches the shape positionally
//! instead of parsing the whole message.

/// Returns true if `message` has the shape `Error NNNN (sqlstate): ...`
/// and its 4-digit code equals `wanted`.
///
/// A message that does not match the shape is a normal outcome, not a
/// fault: the result is simply `false`.
///
/// `Error 1109 (42S02): Unknown table 'GLOBAL_VARIABLES' in information_schema`
pub fn is_server_error(message: &str, wanted: u16) -> bool {
    let bytes = message.as_bytes();
    if bytes.len() < 19 {
        return false;
    }
    if !message.starts_with("Error ") {
        return false;
    }
    if bytes[10] != b' ' || bytes[18] != b':' {
        return false;
    }
    // bytes 6..10 are ASCII here (checked boundaries), so the slice is valid.
    match std::str::from_utf8(&bytes[6..10])
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
    {
        Some(code) => code == wanted,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISABLED_3167: &str = "Error 3167 (HY000): The 'INFORMATION_SCHEMA.GLOBAL_VARIABLES' feature is disabled; see the documentation for 'show_compatibility_56'";
    const UNKNOWN_1109: &str =
        "Error 1109 (42S02): Unknown table 'GLOBAL_VARIABLES' in information_schema";

    #[test]
    fn matches_wanted_code() {
        assert!(is_server_error(DISABLED_3167, 3167));
        assert!(is_server_error(UNKNOWN_1109, 1109));
    }

    #[test]
    fn rejects_other_codes() {
        assert!(!is_server_error(DISABLED_3167, 1109));
        assert!(!is_server_error(UNKNOWN_1109, 3167));
        assert!(!is_server_error(DISABLED_3167, 0));
    }

    #[test]
    fn rejects_short_messages() {
        assert!(!is_server_error("", 3167));
        assert!(!is_server_error("Error 3167 (HY00):", 3167));
    }

    #[test]
    fn rejects_wrong_prefix() {
        assert!(!is_server_error("ERROR 3167 (HY000): feature disabled", 3167));
        assert!(!is_server_error("error 3167 (HY000): feature disabled", 3167));
        assert!(!is_server_error("Fatal 3167 (HY000): feature disabled", 3167));
    }

    #[test]
    fn rejects_misplaced_separators() {
        // no space at byte 10
        assert!(!is_server_error("Error 31671 (HY00): feature disabled", 3167));
        // no colon at byte 18
        assert!(!is_server_error("Error 3167 (HY000)  feature disabled", 3167));
    }

    #[test]
    fn rejects_non_numeric_code() {
        assert!(!is_server_error("Error abcd (HY000): feature disabled", 3167));
        assert!(!is_server_error("Error 3x67 (HY000): feature disabled", 3167));
    }

    #[test]
    fn handles_multibyte_text_without_panicking() {
        assert!(!is_server_error("Error ΩΩΩΩ (HY000): nope", 3167));
    }
}
