use std::process::ExitCode;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use flashfetch::app::App;
use flashfetch::config::ConfigLoader;
use flashfetch::domain::GameSlug;
use flashfetch::error::FetchError;
use flashfetch::flashpoint::FlashpointHttpClient;
use flashfetch::output::ConsoleOutput;
use flashfetch::retrieve::DirectHttpClient;
use flashfetch::store::Store;
use flashfetch::wayback::WaybackHttpClient;

#[derive(Parser)]
#[command(name = "flashfetch")]
#[command(about = "Download .swf game assets via Flashpoint, with a Wayback Machine fallback")]
#[command(version, author)]
struct Cli {
    /// Path to a JSON config file (default: flashfetch.json if present)
    #[arg(long)]
    config: Option<String>,

    /// Directory the .swf files are written to
    #[arg(long)]
    games_dir: Option<String>,

    /// Restrict the run to these slugs (repeatable)
    #[arg(long)]
    only: Vec<String>,

    /// Pause between requests, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print the slug -> search title table and exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(fetch) = report.downcast_ref::<FetchError>() {
            return ExitCode::from(map_exit_code(fetch));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &FetchError) -> u8 {
    match error {
        FetchError::ConfigRead(_) | FetchError::ConfigParse(_) | FetchError::InvalidSlug(_) => 2,
        FetchError::CatalogHttp(_)
        | FetchError::CatalogStatus { .. }
        | FetchError::WaybackHttp(_)
        | FetchError::WaybackStatus { .. }
        | FetchError::DirectHttp(_)
        | FetchError::DirectStatus { .. } => 3,
        FetchError::Filesystem(_) => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut resolved = ConfigLoader::resolve(cli.config.as_deref()).into_diagnostic()?;

    if let Some(games_dir) = cli.games_dir {
        resolved.games_dir = Utf8PathBuf::from(games_dir);
    }
    if let Some(delay_ms) = cli.delay_ms {
        resolved.delay = Duration::from_millis(delay_ms);
    }
    if !cli.only.is_empty() {
        resolved.games = cli
            .only
            .iter()
            .map(|slug| slug.parse::<GameSlug>())
            .collect::<Result<Vec<_>, _>>()
            .into_diagnostic()?;
    }

    if cli.list {
        for slug in &resolved.games {
            println!("{slug}\t{}", slug.search_title());
        }
        return Ok(());
    }

    println!("flashfetch — {} games\n", resolved.games.len());

    let store = Store::new(resolved.games_dir.clone());
    let catalog = FlashpointHttpClient::new().into_diagnostic()?;
    let direct = DirectHttpClient::new().into_diagnostic()?;
    let archive = WaybackHttpClient::new().into_diagnostic()?;
    let app = App::new(store, catalog, direct, archive, resolved.delay);

    let summary = app.run(&resolved.games, &ConsoleOutput).into_diagnostic()?;
    ConsoleOutput::print_summary(&summary).into_diagnostic()?;
    Ok(())
}
