//! adcom-inspect: decode an AdCOM object, re-encode it and report which
//! input fields the typed model did not keep.

use adcom_core::config::AppConfig;
use adcom_core::{Codec, ObjectKind};
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "adcom-inspect")]
#[command(about = "Decode, validate and re-encode AdCOM objects")]
#[command(version)]
struct Cli {
    /// Object held by the payload (ad, placement, channel, site, app, dooh,
    /// publisher, content, user, device, geo, regs, restrictions,
    /// native-format, audit)
    #[arg(long)]
    kind: ObjectKind,

    /// Payload file, or `-` for stdin
    #[arg(long, default_value = "-")]
    input: PathBuf,

    /// TOML config file
    #[arg(long, env = "ADCOM_CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print the re-encoded payload (overrides config)
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Emit logs as JSON (overrides config)
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    /// Largest accepted payload in bytes (overrides config)
    #[arg(long, env = "ADCOM__CODEC__MAX_INPUT_BYTES")]
    max_input_bytes: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let (mut config, load_error) = match &cli.config {
        Some(path) => (
            AppConfig::load_from(Some(path.as_path()))
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None,
        ),
        None => match AppConfig::load() {
            Ok(config) => (config, None),
            Err(e) => (AppConfig::default(), Some(e)),
        },
    };

    // Apply CLI overrides
    if cli.pretty {
        config.codec.pretty = true;
    }
    if cli.json_logs {
        config.log.json = true;
    }
    if let Some(max) = cli.max_input_bytes {
        config.codec.max_input_bytes = max;
    }

    init_tracing(&config);
    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    let codec = Codec::new(config.codec.clone());
    let payload = read_input(&codec, &cli.input)?;
    info!(
        kind = %cli.kind,
        bytes = payload.len(),
        pretty = config.codec.pretty,
        "Inspecting payload"
    );

    let inspection = codec
        .inspect(cli.kind, &payload)
        .with_context(|| format!("Payload is not a valid {}", cli.kind))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", inspection.output)?;

    if inspection.dropped.is_empty() {
        info!(kind = %inspection.kind, "Payload round-trips without loss");
    } else {
        info!(
            kind = %inspection.kind,
            dropped = inspection.dropped.len(),
            "Payload decoded; some fields are outside the model"
        );
    }
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log.filter.as_str().into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_input(codec: &Codec, path: &Path) -> anyhow::Result<Vec<u8>> {
    if path == Path::new("-") {
        codec
            .read_bounded(std::io::stdin().lock())
            .context("Failed to read payload from stdin")
    } else {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        codec
            .read_bounded(file)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}
