use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use urlpick::{scan, PickerConfig};

#[cfg(target_os = "macos")]
const DEFAULT_OPENER: &str = "open";
#[cfg(windows)]
const DEFAULT_OPENER: &str = "cmd /C start";
#[cfg(not(any(target_os = "macos", windows)))]
const DEFAULT_OPENER: &str = "xdg-open";

/// Option appended so the user can leave without opening anything.
const EXIT_OPTION: &str = "Exit";

#[derive(Parser)]
#[command(
    version,
    about = "Pick a URL from piped text and open it",
    long_about = "Pick a URL from piped text and open it

Keys:
  Tab / Down          next entry
  Shift+Tab / Up      previous entry
  0-9                 jump to an entry by its index
  Enter               open the highlighted entry
  q / Esc             quit

Examples:
  git log | urlpick
  urlpick --print < notes.md
"
)]
struct Cli {
    /// milliseconds to wait for another digit before jumping
    #[arg(long, default_value_t = 200)]
    debounce_ms: u64,

    /// print the chosen URL instead of opening it
    #[arg(short, long)]
    print: bool,

    /// do not add an "Exit" entry
    #[arg(long)]
    no_exit: bool,

    /// program used to open the chosen URL
    #[arg(long, default_value = DEFAULT_OPENER)]
    opener: String,

    /// write logs to this file (filter with URLPICK_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut urls = scan::scan(io::stdin().lock()).context("failed to read standard input")?;
    if urls.is_empty() {
        bail!("no URLs found in input");
    }
    info!(count = urls.len(), "scanned input");
    if !cli.no_exit {
        urls.push(EXIT_OPTION.to_string());
    }

    let config = PickerConfig::default().with_debounce(Duration::from_millis(cli.debounce_ms));
    let cancel_index = urls
        .iter()
        .position(|url| config.cancel_labels.contains(url));

    let outcome = urlpick::pick(urls, config).context("picker failed")?;
    if !outcome.is_confirmed() || outcome.index == cancel_index {
        return Ok(());
    }

    if cli.print {
        println!("{}", outcome.value);
        return Ok(());
    }
    open(&cli.opener, &outcome.value)
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env("URLPICK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!("failed to install logger: {err}"))?;
    Ok(())
}

/// Launch `opener` on `target`. Bare host names are opened over https.
fn open(opener: &str, target: &str) -> anyhow::Result<()> {
    let target = if target.contains("://") {
        target.to_string()
    } else {
        format!("https://{target}")
    };
    info!(%opener, %target, "opening");

    let mut cmd = execute::command(opener);
    cmd.arg(&target)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit());

    let status = cmd
        .status()
        .with_context(|| format!("failed to run {opener}"))?;
    if !status.success() {
        let code_str = status
            .code()
            .map_or_else(|| "unknown".to_string(), |c| c.to_string());
        bail!("{opener} exited with non-zero status (err={code_str})");
    }
    Ok(())
}
