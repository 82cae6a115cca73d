use actix_web::cookie::{Cookie, SameSite};
use uuid::Uuid;

use crate::modules::gate::domain::SESSION_COOKIE;

/// Browser-session cookie: no Max-Age, so it ends with the browser session.
pub fn session_cookie(session: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, session.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .finish();
    cookie.make_removal();
    cookie
}
