//! The session token cookie.
//!
//! The cookie has no expiry, so it lives as long as the browser session,
//! the same lifetime the token has in the console.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;

pub fn session_cookie(name: &str, token: &str) -> Cookie<'static> {
    Cookie::build(name.to_string(), token.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// A cookie that tells the browser to drop the session token.
pub fn removal_cookie(name: &str) -> Cookie<'static> {
    let mut cookie = session_cookie(name, "");
    cookie.make_removal();
    cookie
}

/// The stored token, if the browser sent one.
pub fn read_token(req: &HttpRequest, name: &str) -> Option<String> {
    req.cookie(name).map(|cookie| cookie.value().to_string())
}
