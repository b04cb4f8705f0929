mod metrics;
mod record;
mod types;

pub use metrics::*;
pub use record::*;
pub use types::*;
