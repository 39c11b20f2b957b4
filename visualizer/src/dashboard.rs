use sentimeter_core::{CoreError, PostRecord, RenderError, SentimentSummary};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

const MAX_TABLE_ROWS: usize = 50;

/// Write a static HTML dashboard with the summary numbers and a table of
/// analyzed posts.
pub fn write_dashboard(
    records: &[PostRecord],
    summary: &SentimentSummary,
    path: &Path,
) -> Result<(), CoreError> {
    let html = build_html(records, summary);
    fs::write(path, html).map_err(RenderError::Io)?;
    info!("Dashboard saved to {}", path.display());
    Ok(())
}

fn build_html(records: &[PostRecord], summary: &SentimentSummary) -> String {
    let mut rows = String::new();
    for record in records.iter().take(MAX_TABLE_ROWS) {
        let _ = write!(
            rows,
            "<tr class=\"{label}\"><td>{id}</td><td>{platform}</td>\
             <td>{text}</td><td>{polarity:.3}</td><td>{label}</td></tr>\n",
            id = escape(&record.id),
            platform = record.platform,
            text = escape(&record.text),
            polarity = record.polarity,
            label = record.sentiment,
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Sentiment Analysis Dashboard</title>
<style>
body {{ font-family: sans-serif; margin: 2em; }}
.cards {{ display: flex; gap: 1em; }}
.card {{ border: 1px solid #ccc; border-radius: 6px; padding: 1em; min-width: 9em; text-align: center; }}
.card .value {{ font-size: 1.8em; font-weight: bold; }}
table {{ border-collapse: collapse; margin-top: 2em; width: 100%; }}
td, th {{ border: 1px solid #ddd; padding: 0.4em; text-align: left; }}
tr.positive td {{ background: #eafaf1; }}
tr.negative td {{ background: #fdedec; }}
</style>
</head>
<body>
<h1>Sentiment Analysis Dashboard</h1>
<div class="cards">
<div class="card"><div class="value">{total}</div>Total posts</div>
<div class="card"><div class="value">{positive} ({positive_pct:.1}%)</div>Positive</div>
<div class="card"><div class="value">{neutral} ({neutral_pct:.1}%)</div>Neutral</div>
<div class="card"><div class="value">{negative} ({negative_pct:.1}%)</div>Negative</div>
<div class="card"><div class="value">{mean:.3}</div>Average polarity</div>
</div>
<table>
<tr><th>Id</th><th>Platform</th><th>Text</th><th>Polarity</th><th>Sentiment</th></tr>
{rows}</table>
</body>
</html>
"#,
        total = summary.total_posts,
        positive = summary.positive_count,
        positive_pct = summary.positive_percentage,
        neutral = summary.neutral_count,
        neutral_pct = summary.neutral_percentage,
        negative = summary.negative_count,
        negative_pct = summary.negative_percentage,
        mean = summary.average_polarity,
        rows = rows,
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
