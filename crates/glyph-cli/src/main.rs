#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glyph_core::{ParamSet, SignEngine};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "glyph-cli",
    about = "Glyph lattice signature reference CLI",
    long_about = "Generate glyph lattice signature key pairs, sign messages, and verify signatures.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    /// Parameter set to operate under.
    #[arg(long, value_enum, global = true, default_value_t = ParamSetOpt::Glyph1024Q12289)]
    params: ParamSetOpt,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum ParamSetOpt {
    Glyph1024Q12289,
    Glyph1024Q59393Wide,
}

impl From<ParamSetOpt> for ParamSet {
    fn from(opt: ParamSetOpt) -> Self {
        match opt {
            ParamSetOpt::Glyph1024Q12289 => Self::Glyph1024Q12289,
            ParamSetOpt::Glyph1024Q59393Wide => Self::Glyph1024Q59393Wide,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Generate a fresh key pair.
    Keygen {
        /// Output path for the signing key.
        #[arg(long, default_value = "sk.bin")]
        out_sk: PathBuf,

        /// Output path for the public key.
        #[arg(long, default_value = "pk.bin")]
        out_pk: PathBuf,
    },

    /// Sign a message under a signing key.
    Sign {
        /// Path to the signing key.
        #[arg(long)]
        sk: PathBuf,

        /// Path to the message, or `-` to read from stdin.
        #[arg(long)]
        message: PathBuf,

        /// Output path for the signature.
        #[arg(long, default_value = "sig.bin")]
        out: PathBuf,
    },

    /// Verify a signature against a public key and message.
    Verify {
        /// Path to the public key.
        #[arg(long)]
        pk: PathBuf,

        /// Path to the message, or `-` to read from stdin.
        #[arg(long)]
        message: PathBuf,

        /// Path to the signature.
        #[arg(long)]
        sig: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let set: ParamSet = cli.params.into();
    match cli.cmd {
        Cmd::Keygen { out_sk, out_pk } => keygen(set, out_sk, out_pk),
        Cmd::Sign { sk, message, out } => sign(set, sk, message, out),
        Cmd::Verify { pk, message, sig } => verify(set, pk, message, sig),
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Read a message from a file path, or from stdin if the path is `-`.
fn read_message(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("reading message from stdin")?;
        Ok(buf)
    } else {
        fs::read(path).with_context(|| format!("reading message from {}", path.display()))
    }
}

fn keygen(set: ParamSet, out_sk: PathBuf, out_pk: PathBuf) -> Result<()> {
    info!(?set, "generating key pair");
    let engine = SignEngine::new(set);
    let (signing_key, public_key) = engine.keygen().context("key generation failed")?;

    ensure_parent_dir(&out_sk)?;
    ensure_parent_dir(&out_pk)?;
    fs::write(&out_sk, glyph_codec::sk::encode(&signing_key))
        .with_context(|| format!("writing signing key to {}", out_sk.display()))?;
    fs::write(&out_pk, glyph_codec::pk::encode(&public_key))
        .with_context(|| format!("writing public key to {}", out_pk.display()))?;

    println!(
        "Generated key pair -> {} (signing), {} (public)",
        out_sk.display(),
        out_pk.display()
    );
    Ok(())
}

fn sign(set: ParamSet, sk_path: PathBuf, message_path: PathBuf, out: PathBuf) -> Result<()> {
    info!(?set, sk=%sk_path.display(), "signing");
    let sk_bytes = fs::read(&sk_path).with_context(|| format!("reading {}", sk_path.display()))?;
    let signing_key = glyph_codec::sk::decode(&sk_bytes, set).context("decoding signing key")?;
    let message = read_message(&message_path)?;

    let engine = SignEngine::new(set);
    let signature = engine.sign(&signing_key, &message).context("signing failed")?;

    ensure_parent_dir(&out)?;
    fs::write(&out, glyph_codec::sig::encode(&signature))
        .with_context(|| format!("writing signature to {}", out.display()))?;

    println!("Signed {} -> {}", message_path.display(), out.display());
    Ok(())
}

fn verify(set: ParamSet, pk_path: PathBuf, message_path: PathBuf, sig_path: PathBuf) -> Result<()> {
    info!(?set, pk=%pk_path.display(), "verifying");
    let pk_bytes = fs::read(&pk_path).with_context(|| format!("reading {}", pk_path.display()))?;
    let public_key = glyph_codec::pk::decode(&pk_bytes, set).context("decoding public key")?;
    let sig_bytes =
        fs::read(&sig_path).with_context(|| format!("reading {}", sig_path.display()))?;
    let signature = glyph_codec::sig::decode(&sig_bytes, set).context("decoding signature")?;
    let message = read_message(&message_path)?;

    let engine = SignEngine::new(set);
    match engine.verify(&public_key, &signature, &message) {
        Ok(()) => {
            println!("OK: signature verified");
            Ok(())
        }
        Err(err) => {
            bail!("verification failed: {err}");
        }
    }
}
