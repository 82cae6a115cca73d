pub mod get_session;
pub mod login;
pub mod logout;

pub use get_session::get_session_handler;
pub use login::login_handler;
pub use logout::logout_handler;
