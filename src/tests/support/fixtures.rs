use actix_web::cookie::Cookie;
use actix_web::web;
use uuid::Uuid;

use crate::modules::gate::domain::SESSION_COOKIE;
use crate::AppState;

pub const TEST_ADMIN_USERNAME: &str = "site-owner";
pub const TEST_ADMIN_PASSWORD: &str = "correct horse battery staple";

/// Opens a session on the state's gate and unlocks it.
pub async fn unlocked_session(state: &web::Data<AppState>) -> Uuid {
    state
        .gate
        .unlock(None, TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
        .await
        .expect("test credentials unlock the gate")
}

pub fn admin_cookie(session: Uuid) -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, session.to_string())
}
