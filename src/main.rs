use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use relman::cli::add;
use relman::ReleaseSource;
use relman::Result;
use std::io;
use std::path::PathBuf;

// No propagate_version here: the release subcommands carry a positional
// `version`, which shares its argument id with the injected version flag.
#[derive(Parser)]
#[command(name = "relman")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Release manifest updater for the Jellyfin Alexa Skill plugin", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a release artifact and append its record to manifest.json
    FromArtifact {
        /// Release version (also names the release tag and artifact)
        version: String,

        /// Path to the packaged skill archive to hash
        artifact: PathBuf,
    },

    /// Append a record using a precomputed MD5 checksum
    FromChecksum {
        /// Release version
        version: String,

        /// Hex-encoded MD5 digest of the release artifact
        checksum: String,
    },

    /// Append a record using a precomputed checksum and an explicit download URL
    FromUrl {
        /// Release version
        version: String,

        /// Hex-encoded MD5 digest of the release artifact
        checksum: String,

        /// Download URL recorded as sourceUrl
        source_url: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Wrong argument shapes exit 1 with the usage message; --help and
    // --version render on stdout and exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::FromArtifact { version, artifact } => {
            println!("{}", format!("🔐 Hashing {}", artifact.display()).cyan());
            add::run(&version, ReleaseSource::FromArtifactFile { path: artifact })?;
        }

        Commands::FromChecksum { version, checksum } => {
            add::run(&version, ReleaseSource::FromChecksum { value: checksum })?;
        }

        Commands::FromUrl {
            version,
            checksum,
            source_url,
        } => {
            add::run(
                &version,
                ReleaseSource::FromChecksumAndUrl {
                    value: checksum,
                    url: source_url,
                },
            )?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "relman", &mut io::stdout());
        }
    }

    Ok(())
}
