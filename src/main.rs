//! Field Seal - encrypt and decrypt short text fields from the shell.
//!
//! Keys are taken from an environment variable, a key file, or a hidden
//! prompt, and are never written to logs or output.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fieldseal::{decrypt_with_handle, encrypt_with_handle, Envelope, KeyHandle, KeySource};
use serde::Serialize;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "fieldseal")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "AES-GCM encryption of short text fields",
    long_about = "Seals text into base64(nonce || ciphertext || tag) blobs with a 16- or 32-byte key, and opens them again."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text into a base64 blob
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,

        /// Text to encrypt (default: stdin)
        text: Option<String>,
    },

    /// Decrypt a base64 blob back into text
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,

        /// Blob to decrypt (default: stdin)
        blob: Option<String>,
    },

    /// Show the layout of a blob without decrypting it
    Inspect {
        /// Blob to inspect (default: stdin)
        blob: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct KeyArgs {
    /// Environment variable holding the key (default: FIELDSEAL_KEY)
    #[arg(long, conflicts_with_all = ["key_file", "prompt"])]
    key_env: Option<String>,

    /// File holding the key
    #[arg(long, conflicts_with = "prompt")]
    key_file: Option<PathBuf>,

    /// Prompt for the key on the terminal
    #[arg(long)]
    prompt: bool,
}

impl KeyArgs {
    fn source(&self) -> KeySource {
        match (&self.key_env, &self.key_file, self.prompt) {
            (_, Some(path), _) => KeySource::File(path.clone()),
            (_, None, true) => KeySource::Prompt,
            (Some(var), None, false) => KeySource::Env(var.clone()),
            (None, None, false) => KeySource::default(),
        }
    }

    fn handle(&self) -> Result<KeyHandle> {
        let key = self.source().load().context("Failed to load key")?;
        let handle = KeyHandle::new(&key)?;
        Ok(handle)
    }
}

#[derive(Serialize)]
struct InspectReport {
    wire_len: usize,
    nonce: String,
    ciphertext_len: usize,
    tag: String,
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("failed to initialise tracing subscriber")?;

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Encrypt { key, text } => cmd_encrypt(&key, text),
        Commands::Decrypt { key, blob } => cmd_decrypt(&key, blob),
        Commands::Inspect { blob, json } => cmd_inspect(blob, json),
    }
}

/// Argument if given, otherwise stdin with one trailing newline removed.
fn arg_or_stdin(arg: Option<String>) -> Result<String> {
    if let Some(value) = arg {
        return Ok(value);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

fn cmd_encrypt(key: &KeyArgs, text: Option<String>) -> Result<()> {
    let handle = key.handle()?;
    let text = arg_or_stdin(text)?;

    let sealed = encrypt_with_handle(&text, &handle)?;
    println!("{}", sealed);

    Ok(())
}

fn cmd_decrypt(key: &KeyArgs, blob: Option<String>) -> Result<()> {
    let handle = key.handle()?;
    let blob = arg_or_stdin(blob)?;

    let text = decrypt_with_handle(&blob, &handle)?;
    println!("{}", text);

    Ok(())
}

fn cmd_inspect(blob: Option<String>, json: bool) -> Result<()> {
    let blob = arg_or_stdin(blob)?;
    let envelope = Envelope::parse(&blob)?;

    let report = InspectReport {
        wire_len: envelope.to_bytes().len(),
        nonce: hex::encode(envelope.nonce()),
        ciphertext_len: envelope.ciphertext().len(),
        tag: hex::encode(envelope.tag()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Sealed field:");
        println!("  Wire length: {} bytes", report.wire_len);
        println!("  Nonce: {}", report.nonce);
        println!("  Ciphertext: {} bytes", report.ciphertext_len);
        println!("  Tag: {}", report.tag);
    }

    Ok(())
}
