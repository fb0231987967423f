pub mod draws;
pub mod error;
pub mod report;
pub mod sink;
pub mod stats;
pub mod tally;
pub mod verdict;

pub use draws::{load_draws, normalize_path, output_dir_for};
pub use error::{LottoError, LottoResult};
pub use report::format_report;
pub use sink::{ArtifactSink, BAR_CHART_FILE, HISTOGRAM_FILE, REPORT_FILE};
pub use stats::{chi_square_uniform, TestResult};
pub use tally::{is_valid_draw, tally, ObservedCounts, MAX_NUMBER};
pub use verdict::{Verdict, DEFAULT_SIGNIFICANCE};
