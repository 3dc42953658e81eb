pub mod finding;
pub mod history;
pub mod osint;
pub mod scan_result;
pub mod user;

pub use finding::*;
pub use history::*;
pub use osint::*;
pub use scan_result::*;
pub use user::*;
