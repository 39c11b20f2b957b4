mod collector;

use analysis::SentimentAnalyzer;
use collector::Collector;
use sentimeter_core::{AppConfig, CoreError, ErrorExt, PostRecord};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter("sentimeter=info,twitter_client=info,reddit_client=info,analysis=info")
        .init();

    fs::create_dir_all("data")?;
    fs::create_dir_all("output")?;

    println!("=== Social Media Sentiment Analyzer ===\n");

    let query = prompt("Enter search topic/keyword: ")?;
    let platform = prompt("Choose platform (twitter/reddit/both): ")?.to_lowercase();
    let (use_twitter, use_reddit) = match platform.as_str() {
        "twitter" => (true, false),
        "reddit" => (false, true),
        "both" => (true, true),
        other => {
            println!("Unknown platform '{}'. Expected twitter, reddit or both.", other);
            return Ok(());
        }
    };

    let config = AppConfig::from_env()?;
    let collector = Collector::new(&config);
    let analyzer = SentimentAnalyzer::new();
    let mut all_records: Vec<PostRecord> = Vec::new();

    if use_twitter {
        println!("\nCollecting tweets about '{}'...", query);
        let tweets = collector.collect_tweets(&query).await;
        if tweets.is_empty() {
            println!("No tweets collected");
        } else {
            storage::save_raw_json(&tweets, Path::new("data/tweets.json"))?;
            let records = analyzer.analyze_tweets(&tweets)?;
            println!("Analyzed {} tweets", records.len());
            all_records.extend(records);
        }
    }

    if use_reddit {
        let subreddit = match prompt("Enter subreddit name (default: all): ")?.as_str() {
            "" => "all".to_string(),
            name => name.to_string(),
        };
        println!(
            "\nCollecting Reddit posts about '{}' from r/{}...",
            query, subreddit
        );
        let posts = collector.collect_reddit_posts(&subreddit, &query).await;
        if posts.is_empty() {
            println!("No Reddit posts collected");
        } else {
            storage::save_raw_json(&posts, Path::new("data/reddit_posts.json"))?;
            let records = analyzer.analyze_reddit_posts(&posts)?;
            println!("Analyzed {} Reddit posts", records.len());
            all_records.extend(records);
        }
    }

    let Some(summary) = analyzer.summary(&all_records) else {
        println!("No data collected. Please check your API credentials and try again.");
        return Ok(());
    };

    println!("\n=== SENTIMENT ANALYSIS RESULTS ===");
    println!("Total posts analyzed: {}", summary.total_posts);
    println!(
        "Positive: {} ({:.1}%)",
        summary.positive_count, summary.positive_percentage
    );
    println!(
        "Neutral: {} ({:.1}%)",
        summary.neutral_count, summary.neutral_percentage
    );
    println!(
        "Negative: {} ({:.1}%)",
        summary.negative_count, summary.negative_percentage
    );
    println!("Average sentiment score: {:.3}", summary.average_polarity);

    storage::save_records_csv(&all_records, Path::new("output/sentiment_results.csv"))?;
    println!("\nDetailed results saved to output/sentiment_results.csv");

    println!("\nGenerating visualizations...");
    report_render_failure(visualizer::render_pie_chart(
        &summary,
        Path::new("output/sentiment_pie.png"),
    ));
    report_render_failure(visualizer::render_bar_chart(
        &summary,
        Path::new("output/sentiment_bar.png"),
    ));
    report_render_failure(visualizer::render_time_series(
        &all_records,
        Path::new("output/time_series.png"),
    ));
    report_render_failure(visualizer::write_dashboard(
        &all_records,
        &summary,
        Path::new("output/dashboard.html"),
    ));

    println!("\n=== Analysis Complete! ===");
    println!("Check the 'output' folder for all visualizations and results.");
    Ok(())
}

/// Rendering is best-effort: a failed chart is reported and skipped.
fn report_render_failure(result: Result<(), CoreError>) {
    if let Err(e) = result {
        e.log_warn();
        println!("{}", e.user_friendly_message());
    }
}

fn prompt(message: &str) -> Result<String, CoreError> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
