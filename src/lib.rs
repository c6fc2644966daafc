pub mod error;
pub mod ml;
pub mod stats;

// Re-export commonly used types
pub use error::{Error, Result};
pub use ml::models::{LogisticRegression, LogisticRegressionConfig};
pub use stats::{Median, MedianElement, Mode};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
