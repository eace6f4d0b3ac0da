//! Cookie codec for `document.cookie` strings.
//!
//! Reading takes the whole cookie header the browser exposes; writing produces
//! one `Set-Cookie`-style assignment to hand back to `document.cookie`.

use chrono::{DateTime, Duration, Utc};

const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Convert a dashed key to camelCase: `my-tabs` -> `myTabs`.
///
/// Only a dash followed by a non-digit is folded, `tab-1` stays as is.
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if !next.is_ascii_digit() {
                    chars.next();
                    out.extend(next.to_uppercase());
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

/// Look up `name` in a `k=v; k2=v2` cookie string and URL-decode its value.
pub fn read_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim_start().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, raw)| match urlencoding::decode(raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => raw.to_string(),
        })
}

/// A single cookie assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieWrite {
    pub name: String,
    pub value: String,
    /// Lifetime in days, `0` means a session cookie.
    pub duration_days: u32,
    pub path: String,
}

impl CookieWrite {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            duration_days: 0,
            path: "/".to_string(),
        }
    }

    pub fn with_duration_days(mut self, days: u32) -> Self {
        self.duration_days = days;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Render the assignment, computing `expires` relative to `now`.
    pub fn to_header(&self, now: DateTime<Utc>) -> String {
        let mut header = format!("{}={}", self.name, urlencoding::encode(&self.value));

        if self.duration_days > 0 {
            let expires = now + Duration::days(i64::from(self.duration_days));
            header.push_str("; expires=");
            header.push_str(&expires.format(EXPIRES_FORMAT).to_string());
        }

        header.push_str("; path=");
        header.push_str(&self.path);
        header
    }
}

/// Assignment that makes the browser drop `name` immediately.
pub fn expire_cookie(name: &str, path: &str) -> String {
    format!("{}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path={}", name, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("tabs"), "tabs");
        assert_eq!(camel_case("my-tabs"), "myTabs");
        assert_eq!(camel_case("profile-side-tabs"), "profileSideTabs");
        assert_eq!(camel_case("tab-1"), "tab-1");
        assert_eq!(camel_case("trailing-"), "trailing-");
    }

    #[test]
    fn test_read_cookie() {
        let header = "theme=dark; titon.tabs.myTabs=2; other=a%20b";
        assert_eq!(read_cookie(header, "titon.tabs.myTabs").as_deref(), Some("2"));
        assert_eq!(read_cookie(header, "other").as_deref(), Some("a b"));
        assert_eq!(read_cookie(header, "missing"), None);
        assert_eq!(read_cookie("", "theme"), None);
    }

    #[test]
    fn test_read_cookie_exact_name() {
        let header = "xtiton.tabs.main=9; titon.tabs.main=1";
        assert_eq!(read_cookie(header, "titon.tabs.main").as_deref(), Some("1"));
    }

    #[test]
    fn test_write_with_expiry() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        let header = CookieWrite::new("titon.tabs.main", "1")
            .with_duration_days(30)
            .to_header(now);
        assert_eq!(
            header,
            "titon.tabs.main=1; expires=Sun, 14 Apr 2024 14:02:26 GMT; path=/"
        );
    }

    #[test]
    fn test_write_session_cookie() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let header = CookieWrite::new("k", "a b").with_path("/docs").to_header(now);
        assert_eq!(header, "k=a%20b; path=/docs");
    }

    #[test]
    fn test_expire_cookie() {
        assert_eq!(
            expire_cookie("titon.tabs.main", "/"),
            "titon.tabs.main=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/"
        );
    }
}
