pub mod admin_auth;
pub mod database;
pub mod repositories;
pub mod time;
pub mod util;
