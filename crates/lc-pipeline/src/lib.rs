pub mod label_studio;
pub mod quality;
pub mod report;
pub mod samples;
pub mod tabular;

pub use label_studio::*;
pub use quality::*;
pub use report::*;
pub use samples::*;
pub use tabular::*;
