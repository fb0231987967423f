//! PNG charts drawn with the plotters bitmap backend.

use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use lotto_core::{LottoError, LottoResult, ObservedCounts, MAX_NUMBER};

use crate::histogram::bucket_counts;

const FONT: &str = "sans-serif";

/// Size and bucketing of the rendered charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub histogram_buckets: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 800,
            histogram_buckets: 10,
        }
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> LottoError {
    LottoError::Render(e.to_string())
}

/// Leave headroom above the tallest bar so it doesn't touch the caption.
fn y_ceiling(top: f64) -> f64 {
    if top <= 0.0 {
        1.0
    } else {
        top * 1.1
    }
}

/// Bar per number with a dashed line at the uniform expectation.
pub fn draw_frequency_chart(
    path: &Path,
    observed: &ObservedCounts,
    expected_frequency: f64,
    options: &ChartOptions,
) -> LottoResult<()> {
    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let x_range = 0.5..(MAX_NUMBER as f64 + 0.5);
    let y_max = y_ceiling((observed.max() as f64).max(expected_frequency));

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Observed vs. Expected Frequencies of Lottery Numbers",
            (FONT, 32),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.clone(), 0.0..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(MAX_NUMBER)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .x_desc("Numbers")
        .y_desc("Frequency")
        .label_style((FONT, 16))
        .axis_desc_style((FONT, 22))
        .draw()
        .map_err(render_err)?;

    let bar_style = BLUE.mix(0.6).filled();
    chart
        .draw_series(observed.as_slice().iter().enumerate().map(|(i, &c)| {
            let x = (i + 1) as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, c as f64)], bar_style)
        }))
        .map_err(render_err)?
        .label("Observed")
        .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], bar_style));

    chart
        .draw_series(DashedLineSeries::new(
            vec![
                (x_range.start, expected_frequency),
                (x_range.end, expected_frequency),
            ],
            10,
            6,
            RED.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("Expected")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT, 18))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    debug!("frequency chart written to {}", path.display());
    Ok(())
}

/// Histogram of how many numbers fall into each range of counts.
pub fn draw_count_histogram(
    path: &Path,
    observed: &ObservedCounts,
    options: &ChartOptions,
) -> LottoResult<()> {
    let buckets = bucket_counts(observed.as_slice(), options.histogram_buckets);
    let (Some(first), Some(last)) = (buckets.first(), buckets.last()) else {
        return Err(LottoError::Render("histogram needs at least one bucket".into()));
    };
    let x_range = first.lo..last.hi;
    let tallest = buckets.iter().map(|b| b.count).max().unwrap_or(0);

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Frequency Distribution of Observed Counts", (FONT, 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, 0.0..y_ceiling(tallest as f64))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Observed Counts")
        .y_desc("Frequency")
        .label_style((FONT, 16))
        .axis_desc_style((FONT, 22))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(buckets.iter().map(|b| {
            Rectangle::new([(b.lo, 0.0), (b.hi, b.count as f64)], BLUE.mix(0.7).filled())
        }))
        .map_err(render_err)?;
    chart
        .draw_series(buckets.iter().map(|b| {
            Rectangle::new([(b.lo, 0.0), (b.hi, b.count as f64)], BLACK.stroke_width(1))
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    debug!("count histogram written to {}", path.display());
    Ok(())
}
