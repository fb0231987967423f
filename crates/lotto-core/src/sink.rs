use std::path::PathBuf;

use crate::error::LottoResult;
use crate::tally::ObservedCounts;

pub const REPORT_FILE: &str = "lottery_analysis_output.txt";
pub const BAR_CHART_FILE: &str = "observed_vs_expected_frequencies.png";
pub const HISTOGRAM_FILE: &str = "frequency_distribution_of_observed_counts.png";

/// Destination for the derived outputs of one analysis run.
/// Each method writes one artifact and returns where it went.
pub trait ArtifactSink {
    fn write_report(&self, contents: &str) -> LottoResult<PathBuf>;
    fn render_frequency_chart(
        &self,
        observed: &ObservedCounts,
        expected_frequency: f64,
    ) -> LottoResult<PathBuf>;
    fn render_count_histogram(&self, observed: &ObservedCounts) -> LottoResult<PathBuf>;
}
