pub mod chart;
pub mod directory;
pub mod histogram;

pub use chart::ChartOptions;
pub use directory::DirectorySink;
pub use histogram::{bucket_counts, Bucket};
