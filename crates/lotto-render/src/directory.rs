use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use lotto_core::sink::{BAR_CHART_FILE, HISTOGRAM_FILE, REPORT_FILE};
use lotto_core::{ArtifactSink, LottoResult, ObservedCounts};

use crate::chart::{draw_count_histogram, draw_frequency_chart, ChartOptions};

/// Writes every artifact under one directory using the fixed file names.
pub struct DirectorySink {
    dir: PathBuf,
    charts: ChartOptions,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>, charts: ChartOptions) -> Self {
        Self {
            dir: dir.into(),
            charts,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    fn write_report(&self, contents: &str) -> LottoResult<PathBuf> {
        let path = self.dir.join(REPORT_FILE);
        let mut out = BufWriter::new(File::create(&path)?);
        out.write_all(contents.as_bytes())?;
        out.flush()?;
        info!("report written to {}", path.display());
        Ok(path)
    }

    fn render_frequency_chart(
        &self,
        observed: &ObservedCounts,
        expected_frequency: f64,
    ) -> LottoResult<PathBuf> {
        let path = self.dir.join(BAR_CHART_FILE);
        draw_frequency_chart(&path, observed, expected_frequency, &self.charts)?;
        Ok(path)
    }

    fn render_count_histogram(&self, observed: &ObservedCounts) -> LottoResult<PathBuf> {
        let path = self.dir.join(HISTOGRAM_FILE);
        draw_count_histogram(&path, observed, &self.charts)?;
        Ok(path)
    }
}
