pub mod types;
pub mod classification;

pub use types::OstrichError;
pub use classification::ErrorClassification;
