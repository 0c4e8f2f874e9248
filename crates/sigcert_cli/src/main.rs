//! SIGCERT CLI
//!
//! Issue, co-sign, verify and inspect certificate files. Keys are supplied by
//! the caller as hex; this tool never generates them.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod commands;
mod config;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use config::CliConfig;
use sigcert_certify::CertificateVerifier;
use sigcert_core::{Clock, Duration, ExpirationHours, FixedClock, SystemClock};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sigcert")]
#[command(about = "SIGCERT - deterministic signed certificates", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a new certificate
    Create {
        /// Hex signing key (32-byte seed or 64-byte keypair)
        #[arg(long, env = "SIGCERT_SIGNING_KEY", hide_env_values = true)]
        signing_key: String,
        /// Hex payload to certify
        #[arg(short, long)]
        payload: String,
        /// Certificate type
        #[arg(short = 't', long = "type")]
        cert_type: Option<String>,
        /// Absolute expiration, hours since the Unix epoch
        #[arg(long, conflicts_with = "valid_for_hours")]
        expiration_hours: Option<u64>,
        /// Expiration relative to now, in hours
        #[arg(long)]
        valid_for_hours: Option<u64>,
        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Append a signature to an existing certificate
    Cosign {
        /// Hex signing key (32-byte seed or 64-byte keypair)
        #[arg(long, env = "SIGCERT_SIGNING_KEY", hide_env_values = true)]
        signing_key: String,
        /// Certificate file
        #[arg(long)]
        cert: PathBuf,
        /// Output file, defaults to rewriting the input
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Verify a certificate against a public key
    Verify {
        /// Hex public key
        #[arg(long)]
        public_key: String,
        /// Certificate file
        #[arg(long)]
        cert: PathBuf,
        /// Check only the signature from this key, allowing co-signers
        #[arg(long)]
        multi: bool,
        /// Evaluate expiration at this Unix time instead of now
        #[arg(long)]
        now: Option<u64>,
    },
    /// Print a certificate as JSON
    Inspect {
        /// Certificate file
        #[arg(long)]
        cert: PathBuf,
    },
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_verify<C: Clock>(
    clock: C,
    public_key: &str,
    cert: &std::path::Path,
    multi: bool,
) -> Result<()> {
    let key = commands::parse_public_key(public_key)?;
    let outcome = commands::verify(&CertificateVerifier::new(clock), &key, cert, multi)?;
    println!("{}", outcome);
    if outcome.is_valid() {
        Ok(())
    } else {
        Err(eyre!("certificate not endorsed by {}: {}", key, outcome))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;
    init_tracing(&config);

    match cli.command {
        Commands::Create {
            signing_key,
            payload,
            cert_type,
            expiration_hours,
            valid_for_hours,
            out,
        } => {
            let signer = commands::parse_signer(&signing_key)?;
            let cert_type = cert_type.unwrap_or(config.cert_type);
            let expiration = match expiration_hours {
                Some(hours) => ExpirationHours::from_hours(hours),
                None => ExpirationHours::after(
                    SystemClock.now(),
                    Duration::from_hours(valid_for_hours.unwrap_or(config.validity_hours)),
                ),
            };
            let bytes = commands::create(&signer, &payload, &cert_type, expiration, &out)?;
            println!("{} ({} bytes, expires {})", out.display(), bytes.len(), expiration);
            Ok(())
        }
        Commands::Cosign {
            signing_key,
            cert,
            out,
        } => {
            let signer = commands::parse_signer(&signing_key)?;
            let out = out.unwrap_or_else(|| cert.clone());
            let bytes = commands::cosign(&signer, &cert, &out)?;
            println!("{} ({} bytes)", out.display(), bytes.len());
            Ok(())
        }
        Commands::Verify {
            public_key,
            cert,
            multi,
            now,
        } => match now {
            Some(seconds) => run_verify(FixedClock::at_secs(seconds), &public_key, &cert, multi),
            None => run_verify(SystemClock, &public_key, &cert, multi),
        },
        Commands::Inspect { cert } => {
            let summary = commands::inspect(&cert)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
    }
}
