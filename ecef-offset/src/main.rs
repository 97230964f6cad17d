//! Point d'entrée CLI pour ecef-offset

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use ecef_offset::Settings;

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::Commands;

/// Décaler une position ECEF en altitude et mesurer le déplacement
#[derive(Parser)]
#[command(name = "ecef-offset")]
#[command(author, version)]
#[command(about = "Conversion ECEF ↔ LLA et décalage d'altitude le long de la normale à l'ellipsoïde")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Ellipsoïde de référence: grs80, wgs84 (défaut : env ECEF_ELLIPSOID / grs80)
    #[arg(long, global = true)]
    ellipsoid: Option<String>,

    /// Décimales à l'affichage (défaut : env ECEF_PRECISION / 8)
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    let settings = Settings::from_env().with_overrides(cli.ellipsoid.as_deref(), cli.precision)?;

    match cli.command {
        Commands::ToLla { x, y, z } => {
            info!(x, y, z, ellipsoid = %settings.ellipsoid, "Conversion ECEF → LLA");
            cli::cmd_to_lla(&settings, x, y, z)?;
        }
        Commands::ToEcef { lat, lon, alt } => {
            info!(lat, lon, alt, ellipsoid = %settings.ellipsoid, "Conversion LLA → ECEF");
            cli::cmd_to_ecef(&settings, lat, lon, alt)?;
        }
        Commands::Offset {
            site,
            x,
            y,
            z,
            delta,
            sites,
            report,
            geojson,
        } => {
            cli::cmd_offset(
                &settings,
                site.as_deref(),
                x,
                y,
                z,
                delta,
                sites.as_deref(),
                report.as_deref(),
                geojson.as_deref(),
            )?;
        }
        Commands::Sites { sites } => {
            cli::cmd_sites(sites.as_deref())?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
