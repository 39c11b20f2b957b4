use chrono::NaiveDate;
use plotters::prelude::*;
use sentimeter_core::{CoreError, PostRecord, RenderError, SentimentLabel, SentimentSummary};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Palette shared by every chart: green / grey / red.
pub fn color_for(label: SentimentLabel) -> RGBColor {
    match label {
        SentimentLabel::Positive => RGBColor(46, 204, 113),
        SentimentLabel::Neutral => RGBColor(149, 165, 166),
        SentimentLabel::Negative => RGBColor(231, 76, 60),
    }
}

fn chart_err<E: std::fmt::Display>(e: E) -> CoreError {
    RenderError::Chart {
        details: e.to_string(),
    }
    .into()
}

/// Render the sentiment distribution as a pie chart PNG.
pub fn render_pie_chart(summary: &SentimentSummary, path: &Path) -> Result<(), CoreError> {
    let root = BitMapBackend::new(path, (800, 640)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    let root = root
        .titled("Sentiment Distribution", ("sans-serif", 32))
        .map_err(chart_err)?;

    let center = (400, 320);
    let radius = 230.0;
    let sizes: Vec<f64> = SentimentLabel::ALL
        .iter()
        .map(|label| summary.percentage_for(*label))
        .collect();
    let colors: Vec<RGBColor> = SentimentLabel::ALL
        .iter()
        .map(|label| color_for(*label))
        .collect();
    let labels: Vec<&str> = SentimentLabel::ALL
        .iter()
        .map(|label| label.as_str())
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 20).into_font());
    pie.percentages(("sans-serif", 18).into_font().color(&BLACK));
    root.draw(&pie).map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!("Pie chart saved to {}", path.display());
    Ok(())
}

/// Render per-label post counts as a bar chart PNG.
pub fn render_bar_chart(summary: &SentimentSummary, path: &Path) -> Result<(), CoreError> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let max_count = SentimentLabel::ALL
        .iter()
        .map(|label| summary.count_for(*label))
        .max()
        .unwrap_or(0)
        .max(1) as u32;

    let mut chart = ChartBuilder::on(&root)
        .caption("Sentiment Analysis Results", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0usize..3usize).into_segmented(), 0u32..max_count + 1)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(3)
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) if *i < 3 => {
                SentimentLabel::ALL[*i].to_string()
            }
            _ => String::new(),
        })
        .y_desc("Number of Posts")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(SentimentLabel::ALL.iter().enumerate().map(|(i, label)| {
            let count = summary.count_for(*label) as u32;
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0u32),
                    (SegmentValue::Exact(i + 1), count),
                ],
                color_for(*label).filled(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!("Bar chart saved to {}", path.display());
    Ok(())
}

fn label_index(label: SentimentLabel) -> usize {
    match label {
        SentimentLabel::Positive => 0,
        SentimentLabel::Neutral => 1,
        SentimentLabel::Negative => 2,
    }
}

/// Per-day post counts, one slot per label in [`SentimentLabel::ALL`]
/// order. Ordered by date.
fn daily_counts(records: &[PostRecord]) -> BTreeMap<NaiveDate, [u32; 3]> {
    let mut daily: BTreeMap<NaiveDate, [u32; 3]> = BTreeMap::new();
    for record in records {
        let counts = daily.entry(record.created_at.date_naive()).or_default();
        counts[label_index(record.sentiment)] += 1;
    }
    daily
}

/// Render per-label daily post counts as a line chart PNG, one series
/// per sentiment label.
pub fn render_time_series(records: &[PostRecord], path: &Path) -> Result<(), CoreError> {
    let daily = daily_counts(records);
    let (first, last) = match (daily.keys().next(), daily.keys().next_back()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => {
            info!("No time data available, skipping time series plot");
            return Ok(());
        }
    };
    let end = last.succ_opt().unwrap_or(last);

    let max_count = daily
        .values()
        .flat_map(|counts| counts.iter())
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Sentiment Trends Over Time", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(50)
        .build_cartesian_2d(first..end, 0u32..max_count + 1)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|date| date.format("%Y-%m-%d").to_string())
        .x_desc("Date")
        .y_desc("Number of Posts")
        .draw()
        .map_err(chart_err)?;

    for label in SentimentLabel::ALL {
        let idx = label_index(label);
        let color = color_for(label);
        chart
            .draw_series(LineSeries::new(
                daily.iter().map(|(date, counts)| (*date, counts[idx])),
                color.stroke_width(2),
            ))
            .map_err(chart_err)?
            .label(label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        chart
            .draw_series(
                daily
                    .iter()
                    .map(|(date, counts)| Circle::new((*date, counts[idx]), 3, color.filled())),
            )
            .map_err(chart_err)?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!("Time series plot saved to {}", path.display());
    Ok(())
}
