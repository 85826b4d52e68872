//! Cookie fixtures.
//!
//! Issues cookies with fixed attributes and reports the cookies a client
//! sends back. Nothing is stored between requests.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::http::response::{typed, TEXT_PLAIN};

const HELLO: &str = "Hello\n";

/// 2045-05-13T18:52:00Z
const FIXTURE_EXPIRY_SECS: u64 = 2_378_314_320;

/// A `Set-Cookie` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: &'static str,
    pub value: &'static str,
    pub expires: SystemTime,
    pub path: &'static str,
    pub domain: &'static str,
    pub secure: bool,
    pub http_only: bool,
}

impl SetCookie {
    /// A cookie carrying the attributes shared by every fixture cookie.
    pub fn fixture(name: &'static str, value: &'static str, path: &'static str) -> Self {
        Self {
            name,
            value,
            expires: UNIX_EPOCH + Duration::from_secs(FIXTURE_EXPIRY_SECS),
            path,
            domain: "localhost",
            secure: false,
            http_only: true,
        }
    }

    pub fn header_value(&self) -> HeaderValue {
        // Fixture names, values, paths and domains are visible ASCII.
        HeaderValue::from_str(&self.to_string()).unwrap_or_else(|_| HeaderValue::from_static(""))
    }
}

/// Attribute order is `Domain`, `Expires`, `Secure`, `HttpOnly`, `Path`.
impl fmt::Display for SetCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}; Domain={}; Expires={}",
            self.name,
            self.value,
            self.domain,
            httpdate::fmt_http_date(self.expires)
        )?;
        if self.secure {
            f.write_str("; Secure")?;
        }
        if self.http_only {
            f.write_str("; HttpOnly")?;
        }
        write!(f, "; Path={}", self.path)
    }
}

pub fn user_id_cookie() -> SetCookie {
    SetCookie::fixture("userID", "1234", "/get/calendar")
}

pub fn konqi_cookie() -> SetCookie {
    SetCookie::fixture("konqi", "Yo", "/get/text")
}

pub fn routes() -> Router {
    Router::new()
        .route("/cookies/none", get(cookies_none))
        .route("/cookies/somecookie", get(cookies_somecookie))
        .route("/cookies/twocookies", get(cookies_twocookies))
        .route("/cookies/showsent", get(cookies_showsent))
}

fn hello_with_cookies(cookies: &[SetCookie]) -> Response {
    let mut res = typed(StatusCode::OK, TEXT_PLAIN, HELLO);
    for cookie in cookies {
        res.headers_mut()
            .append(header::SET_COOKIE, cookie.header_value());
    }
    res
}

async fn cookies_none() -> Response {
    hello_with_cookies(&[])
}

async fn cookies_somecookie() -> Response {
    hello_with_cookies(&[user_id_cookie()])
}

async fn cookies_twocookies() -> Response {
    hello_with_cookies(&[user_id_cookie(), konqi_cookie()])
}

async fn cookies_showsent(headers: HeaderMap) -> impl IntoResponse {
    let body: String = parse_cookies(&headers)
        .into_iter()
        .map(|(name, value)| format!("{name}:{value}\n"))
        .collect();

    typed(StatusCode::OK, TEXT_PLAIN, body)
}

/// Cookies from every `Cookie` header, in wire order.
///
/// A name seen twice keeps its first value. Values wrapped in double quotes
/// are unquoted. Pairs without `=` are skipped.
pub fn parse_cookies(headers: &HeaderMap) -> Vec<(String, String)> {
    let mut cookies: Vec<(String, String)> = Vec::new();

    let pairs = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'));

    for pair in pairs {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        let name = name.trim();
        if name.is_empty() || cookies.iter().any(|(n, _)| n == name) {
            continue;
        }

        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);

        cookies.push((name.to_string(), value.to_string()));
    }

    cookies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::testing::{get_request, send};
    use axum::{body::Body, http::Request};

    const USER_ID: &str =
        "userID=1234; Domain=localhost; Expires=Sat, 13 May 2045 18:52:00 GMT; HttpOnly; Path=/get/calendar";
    const KONQI: &str =
        "konqi=Yo; Domain=localhost; Expires=Sat, 13 May 2045 18:52:00 GMT; HttpOnly; Path=/get/text";

    fn set_cookies(headers: &HeaderMap) -> Vec<&str> {
        headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect()
    }

    #[test]
    fn test_cookie_rendering() {
        assert_eq!(user_id_cookie().to_string(), USER_ID);

        let mut secure = konqi_cookie();
        secure.secure = true;
        secure.http_only = false;
        assert_eq!(
            secure.to_string(),
            "konqi=Yo; Domain=localhost; Expires=Sat, 13 May 2045 18:52:00 GMT; Secure; Path=/get/text"
        );
    }

    #[tokio::test]
    async fn test_no_cookies() {
        let res = send(routes(), get_request("/cookies/none")).await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body, "Hello\n");
        assert_eq!(res.headers[header::CONTENT_TYPE], TEXT_PLAIN);
        assert!(set_cookies(&res.headers).is_empty());
    }

    #[tokio::test]
    async fn test_one_cookie() {
        let res = send(routes(), get_request("/cookies/somecookie")).await;
        assert_eq!(res.body, "Hello\n");
        assert_eq!(set_cookies(&res.headers), vec![USER_ID]);
    }

    #[tokio::test]
    async fn test_two_cookies_in_order() {
        let res = send(routes(), get_request("/cookies/twocookies")).await;
        assert_eq!(set_cookies(&res.headers), vec![USER_ID, KONQI]);
    }

    #[tokio::test]
    async fn test_showsent_lists_received_cookies() {
        let req = Request::builder()
            .uri("/cookies/showsent")
            .header(header::COOKIE, "a=1; b=2")
            .body(Body::empty())
            .unwrap();

        let res = send(routes(), req).await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body, "a:1\nb:2\n");
    }

    #[tokio::test]
    async fn test_showsent_lists_bare_cookie_names() {
        let req = Request::builder()
            .uri("/cookies/showsent")
            .header(header::COOKIE, "flag; a=1")
            .body(Body::empty())
            .unwrap();

        let res = send(routes(), req).await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body, "flag:\na:1\n");
    }

    #[tokio::test]
    async fn test_showsent_without_cookies_is_empty() {
        let res = send(routes(), get_request("/cookies/showsent")).await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.is_empty());
    }

    #[test]
    fn test_parse_cookies_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("userID=1234; konqi=\"Yo\""));
        headers.append(header::COOKIE, HeaderValue::from_static("userID=9; flag; z=last"));

        assert_eq!(
            parse_cookies(&headers),
            vec![
                ("userID".to_string(), "1234".to_string()),
                ("konqi".to_string(), "Yo".to_string()),
                ("flag".to_string(), String::new()),
                ("z".to_string(), "last".to_string()),
            ]
        );
    }
}
