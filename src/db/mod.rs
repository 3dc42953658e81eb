pub mod connection;
pub mod schema;
pub mod users;
pub mod scan_history;
pub mod vulnerabilities;

pub use connection::Database;
