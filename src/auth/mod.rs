pub mod cookie;
pub mod credentials;
pub mod password;
pub mod session;
pub mod token;

pub use cookie::{CookieSettings, SESSION_COOKIE};
pub use credentials::{authenticate_user, create_user, seed_users};
pub use session::{LoginOutcome, SessionManager};
pub use token::{SessionClaims, TokenSigner};
