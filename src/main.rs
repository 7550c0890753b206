// yturl CLI entry point

use clap::Parser;
use tracing_subscriber::EnvFilter;

use yturl::{ApiStreamExtractor, NetworkConfig, QualitySpec, ResolveError, Resolver};

/// YouTube videos on the command line
#[derive(Parser)]
#[command(name = "yturl", version, about = "YouTube videos on the command line")]
struct Cli {
    /// low/medium/high or an itag
    #[arg(short, long, default_value = "medium")]
    quality: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// SOCKS5/HTTP proxy URL (e.g. socks5://127.0.0.1:1080)
    #[arg(long)]
    proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Video URL or bare video ID
    #[arg(value_name = "video_id/url")]
    video: String,
}

async fn run(cli: &Cli) -> Result<(), ResolveError> {
    let quality: QualitySpec = cli.quality.parse()?;
    let config = NetworkConfig {
        proxy: cli.proxy.clone(),
        timeout: Some(cli.timeout),
    };

    let extractor = ApiStreamExtractor::new(&config)?;
    let resolver = Resolver::new(Box::new(extractor));
    let resolution = resolver.resolve(quality, &cli.video).await?;

    // Keep stdout clean: only the URL goes there, so output can be piped
    // straight into a player.
    eprintln!("Using format {}.", resolution.itag);
    println!("{}", resolution.url);
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&cli).await {
        eprintln!("fatal: {}", err);
        std::process::exit(err.exit_code());
    }
}
