use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use tagclip_core::{ClipOutcome, Settings, SystemRunner, fetch_clip, play_clip};

#[derive(Parser)]
#[command(name = "tagclip")]
#[command(about = "Cut, cache, and replay tagged clips from online videos")]
struct Cli {
    /// Tag matching a record in the clip config file
    tag: String,

    /// Clip config file, one `tag,timestamp,duration,url` record per line
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding produced clips
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Re-produce the clip even if a cached copy exists
    #[arg(short, long)]
    force: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = match Settings::resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    if let Some(config) = cli.config {
        settings.config_file = config;
    }
    if let Some(cache_dir) = cli.cache_dir {
        settings.cache_dir = cache_dir;
    }
    settings.use_cache = !cli.force;

    println!(
        "\n{}  {}\n",
        style("tagclip").cyan().bold(),
        style("Clip Player").dim()
    );

    let runner = SystemRunner;

    // Produce the clip (or pick it up from the cache)
    let spinner = create_spinner("Preparing clip...");
    let outcome = match fetch_clip(&settings, &cli.tag, &runner).await {
        Ok(outcome) => outcome,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };
    match &outcome {
        ClipOutcome::Cached(path) => spinner.finish_with_message(format!(
            "{} Clip ready: {} {}",
            style("✓").green().bold(),
            style(path.display()).dim(),
            style("(cached)").dim()
        )),
        ClipOutcome::Produced(path) => spinner.finish_with_message(format!(
            "{} Clip produced: {}",
            style("✓").green().bold(),
            style(path.display()).dim()
        )),
    }

    // Playback failure is reported but never undoes a produced clip
    if let Err(e) = play_clip(outcome.path(), &runner).await {
        eprintln!("{} {}", style("Warning:").yellow().bold(), e);
    }

    Ok(())
}
