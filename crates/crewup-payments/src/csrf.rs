//! CSRF Token Lookup
//!
//! The server sets a `csrftoken` cookie; requests echo it back in the
//! `X-CSRFToken` header.

/// Cookie holding the CSRF token
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header the server reads the token from
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Find a cookie's value in a `document.cookie` style string.
///
/// The value is percent-decoded; a value that doesn't decode is returned raw.
pub fn parse_cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(|value| {
            urlencoding::decode(value).map_or_else(|_| value.to_string(), |v| v.into_owned())
        })
}

/// CSRF token from a cookie string
pub fn csrf_token(cookies: &str) -> Option<String> {
    parse_cookie_value(cookies, CSRF_COOKIE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie_value() {
        let cookies = "sessionid=abc123; csrftoken=xyz789; other=value";
        assert_eq!(csrf_token(cookies), Some("xyz789".into()));
        assert_eq!(parse_cookie_value(cookies, "sessionid"), Some("abc123".into()));
        assert_eq!(parse_cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn test_prefix_names_do_not_match() {
        assert_eq!(csrf_token("csrftokenx=nope; xcsrftoken=nope"), None);
    }

    #[test]
    fn test_value_is_decoded() {
        assert_eq!(csrf_token("csrftoken=a%2Bb%3D"), Some("a+b=".into()));
        // Keeps everything after the first '='
        assert_eq!(csrf_token("csrftoken=a=b"), Some("a=b".into()));
    }

    #[test]
    fn test_empty_cookie_string() {
        assert_eq!(csrf_token(""), None);
    }
}
