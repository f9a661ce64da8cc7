mod auth;
mod rate_limit;

pub use auth::{AuthUser, require_auth};
pub use rate_limit::{RATE_LIMIT_MESSAGE, rate_limit_middleware};
