//! Chat-open flag kept in a signed cookie.
//!
//! The widget reports whether its panel is open; replies arriving while it is
//! closed are flagged unread. The cookie is signed so visitors cannot forge it.

use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, Key, SameSite};
use sha2::{Digest, Sha512};

pub(super) const CHAT_OPEN_COOKIE: &str = "chat_open";

/// Derive a 64-byte cookie signing key from an arbitrary-length secret.
pub(super) fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Missing, unsigned, or tampered cookies read as closed.
pub(super) fn is_chat_open(jar: &SignedCookieJar) -> bool {
    jar.get(CHAT_OPEN_COOKIE)
        .is_some_and(|cookie| cookie.value() == "true")
}

pub(super) fn set_chat_open(jar: SignedCookieJar, open: bool) -> SignedCookieJar {
    let value = if open { "true" } else { "false" };
    jar.add(
        Cookie::build((CHAT_OPEN_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}
