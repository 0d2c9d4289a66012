use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use ytfrag_core::{LoaderConfig, LoaderRegistry, register_fragment_loaders};

mod logging;

#[derive(Parser)]
#[command(name = "ytfrag")]
#[command(about = "Turn a YouTube video into a transcript fragment for LLM prompts")]
struct Cli {
    /// Fragment reference, e.g. yt:https://www.youtube.com/watch?v=ID
    #[arg(required_unless_present = "list")]
    reference: Option<String>,

    /// Transcript language, in order of preference (repeatable). Defaults to "en".
    #[arg(short, long = "lang")]
    langs: Vec<String>,

    /// yt-dlp executable used for video metadata
    #[arg(long = "yt-dlp", value_name = "PATH")]
    ytdlp: Option<String>,

    /// Retries yt-dlp performs while extracting metadata
    #[arg(long)]
    retries: Option<u32>,

    /// Print the registered fragment tags and exit
    #[arg(long)]
    list: bool,

    /// Hide the progress spinner
    #[arg(short, long)]
    quiet: bool,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn loader_config(&self) -> LoaderConfig {
        let mut config = LoaderConfig::from_env();
        if !self.langs.is_empty() {
            config.transcript_languages = self.langs.clone();
        }
        if let Some(program) = &self.ytdlp {
            config.ytdlp_program = program.clone();
        }
        if let Some(retries) = self.retries {
            config.ytdlp_retries = retries;
        }
        config
    }
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

async fn run(cli: Cli) -> Result<()> {
    let config = cli.loader_config();
    let mut registry = LoaderRegistry::new();
    register_fragment_loaders(&mut registry, &config)?;

    if cli.list {
        for tag in registry.tags() {
            println!("{}", tag);
        }
        return Ok(());
    }

    let Some(reference) = cli.reference else {
        anyhow::bail!("missing fragment reference");
    };

    let spinner = (!cli.quiet).then(|| create_spinner("Fetching transcript and metadata..."));
    let result = registry.load(&reference).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let fragment = result?;
    tracing::info!(source = %fragment.source, bytes = fragment.content.len(), "fragment loaded");
    println!("{}", fragment);

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
