use axum_extra::extract::cookie::{Cookie, SignedCookieJar};

pub const FLASH_COOKIE: &str = "flash";

/// One-shot notice surfaced by the next catalog view. Only the level travels
/// in the cookie; every error collapses to the same generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Success,
    Error,
}

impl Flash {
    pub fn as_str(self) -> &'static str {
        match self {
            Flash::Success => "success",
            Flash::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Flash::Success),
            "error" => Some(Flash::Error),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::Success => "Item added to cart successfully!",
            Flash::Error => "Something went wrong. Please try again.",
        }
    }

    pub fn set(self, jar: SignedCookieJar) -> SignedCookieJar {
        let mut cookie = Cookie::new(FLASH_COOKIE, self.as_str());
        cookie.set_path("/");
        cookie.set_http_only(true);
        jar.add(cookie)
    }

    /// Consumes the pending notice, leaving a removal cookie in the jar.
    pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<Flash>) {
        match jar.get(FLASH_COOKIE) {
            Some(cookie) => {
                let flash = Self::parse(cookie.value());
                let mut removal = Cookie::new(FLASH_COOKIE, "");
                removal.set_path("/");
                (jar.remove(removal), flash)
            }
            None => (jar, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_round_trip_through_cookie_values() {
        assert_eq!(Flash::parse(Flash::Success.as_str()), Some(Flash::Success));
        assert_eq!(Flash::parse(Flash::Error.as_str()), Some(Flash::Error));
        assert_eq!(Flash::parse("warning"), None);
    }
}
