use axum::http::{header, HeaderMap};

/// Extract the credential token from the request's `Cookie` headers.
///
/// Every `Cookie` header is scanned (HTTP/2 clients may split them). Headers
/// that are not valid UTF-8 and pairs without `=` are skipped, so a malformed
/// cookie reads the same as a missing one.
pub fn token_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == cookie_name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
}

/// Whether `value` can be stored as a cookie value without quoting.
///
/// RFC 6265 cookie-octets: visible ASCII except `"`, `,`, `;` and `\`.
pub fn is_cookie_value(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E))
}

/// `Set-Cookie` value storing the credential token for the whole site
pub fn set_token_cookie(cookie_name: &str, token: &str, secure: bool) -> String {
    let mut cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", cookie_name, token);
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that expires the credential token immediately
pub fn clear_token_cookie(cookie_name: &str, secure: bool) -> String {
    let mut cookie = format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", cookie_name);
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
