use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
mod auth;
use saltpass::{CredentialDigest, DEFAULT_SALT_LENGTH, StoredCredential};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "saltpass")]
#[command(
    version,
    about = "Generate and verify salted SHA-256 digests of a secret.",
    long_about = "Generate and verify salted SHA-256 digests of a secret.\n\n\
                  The secret is read from SALTPASS_SECRET, piped stdin, or a prompt."
)]
struct Cli {
    /// Log operations to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a secret with a fresh random salt and prints the stored form as JSON
    Generate {
        /// Number of random salt bytes
        #[arg(
            long,
            env = "SALTPASS_SALT_LENGTH",
            default_value_t = DEFAULT_SALT_LENGTH as u16,
            value_parser = clap::value_parser!(u16).range(1..)
        )]
        salt_length: u16,

        /// Write the JSON record to PATH instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Checks a secret against a stored digest and salt
    #[command(arg_required_else_help = true)]
    Verify {
        /// Stored digest (hex)
        #[arg(long, requires = "salt", conflicts_with = "record")]
        digest: Option<String>,

        /// Stored salt (hex)
        #[arg(long, requires = "digest")]
        salt: Option<String>,

        /// JSON record written by `generate`
        #[arg(long, value_name = "PATH", required_unless_present = "digest")]
        record: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn load_record(path: &Path) -> Result<StoredCredential> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read record {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to parse record {}", path.display()))
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Generate { salt_length, out } => {
            let secret = auth::read_secret()?;
            let mut cd = CredentialDigest::new().with_salt_length(usize::from(salt_length));
            cd.generate(&secret).context("failed to generate digest")?;
            drop(secret);

            let json = serde_json::to_string_pretty(&cd.to_record())?;
            match out {
                Some(path) => {
                    fs::write(&path, json + "\n")
                        .with_context(|| format!("failed to write record {}", path.display()))?;
                    println!("record written to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
        Commands::Verify {
            digest,
            salt,
            record,
        } => {
            let record = match (digest, salt, record) {
                (Some(digest), Some(salt), _) => StoredCredential::new(digest, salt),
                (_, _, Some(path)) => load_record(&path)?,
                _ => anyhow::bail!("either --digest and --salt or --record is required"),
            };

            let secret = auth::read_secret()?;
            CredentialDigest::from_record(&record).verify(&secret)?;
            println!("secret verified");
        }
    }

    Ok(())
}
