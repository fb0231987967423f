//! One analysis run: load, tally, test, then write artifacts.
//!
//! Nothing here touches the console, so a run can be driven from tests with
//! any [`ArtifactSink`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use lotto_core::{
    chi_square_uniform, format_report, load_draws, tally, ArtifactSink, LottoResult,
    ObservedCounts, TestResult, Verdict, DEFAULT_SIGNIFICANCE,
};

#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    pub significance: f64,
    pub render_charts: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
            render_charts: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Analysis {
    pub input: PathBuf,
    pub observed: ObservedCounts,
    pub total: u64,
    pub result: TestResult,
    pub verdict: Verdict,
    pub report_path: PathBuf,
    pub bar_chart_path: Option<PathBuf>,
    pub histogram_path: Option<PathBuf>,
}

/// Analyse the draw file at `input` and write its artifacts to `sink`.
///
/// Nothing is written unless the file loads and holds at least one valid draw.
pub fn run_analysis(
    input: &Path,
    sink: &dyn ArtifactSink,
    options: &AnalysisOptions,
) -> LottoResult<Analysis> {
    let values = load_draws(input)?;
    info!("loaded {} numeric values from {}", values.len(), input.display());

    let observed = tally(&values);
    let total = observed.total();
    let result = chi_square_uniform(&observed)?;
    let verdict = Verdict::from_p_value(result.p_value, options.significance);

    let report_path = sink.write_report(&format_report(&observed, &result))?;

    let (bar_chart_path, histogram_path) = if options.render_charts {
        let bar = sink.render_frequency_chart(&observed, result.expected_frequency)?;
        let hist = sink.render_count_histogram(&observed)?;
        (Some(bar), Some(hist))
    } else {
        info!("chart rendering disabled");
        (None, None)
    };

    Ok(Analysis {
        input: input.to_path_buf(),
        observed,
        total,
        result,
        verdict,
        report_path,
        bar_chart_path,
        histogram_path,
    })
}
