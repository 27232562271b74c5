//! `vpnkey` CLI — render the onboarding page and work with access keys locally.
//!
//! `render` writes the same document the server returns for `/`, as a
//! self-contained file. `steps` prints the install steps to the terminal.
//! `copy` puts an access key on the system clipboard.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod clipboard;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use vpnkey_core::assets::QRIOUS_CDN_URL;
use vpnkey_core::state::{DEFAULT_EXPIRES, DEFAULT_KEY};
use vpnkey_core::{
    CopyButton, CopyTarget, Defaults, Device, Event, Lang, PageAssets, PageState, Slot, Tab,
    translate,
};

use crate::clipboard::{DEFAULT_HOLD, SystemClipboard};

// ── ANSI color helpers ───────────────────────────────────────────────

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

// ── CLI structure ────────────────────────────────────────────────────

/// vpnkey — VPN onboarding page tools.
#[derive(Parser)]
#[command(
    name = "vpnkey",
    version,
    about = "vpnkey CLI — render the VPN onboarding page, print install steps, copy access keys",
    long_about = None,
    after_help = format!(
        "{DIM}Examples:{RESET}\n  \
         vpnkey render --key abc123 --expires '7 days' --out page.html\n  \
         vpnkey steps --lang en --tab clash\n  \
         vpnkey copy --key abc123"
    ),
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the onboarding page as a standalone HTML document.
    Render {
        /// Access key shown on the page and encoded in the QR code.
        #[arg(long, env = "VPNKEY_KEY", default_value = DEFAULT_KEY)]
        key: String,
        /// Expiration label, displayed verbatim.
        #[arg(long, default_value = DEFAULT_EXPIRES)]
        expires: String,
        /// Initial language (`ru` or `en`).
        #[arg(long, default_value_t = Lang::Ru)]
        lang: Lang,
        /// Initial install flow (`hiddify` or `clash`).
        #[arg(long, default_value_t = Tab::Hiddify)]
        tab: Tab,
        /// Selected device (`pc` or `phone`).
        #[arg(long, default_value_t = Device::Pc)]
        device: Device,
        /// QRious script URL.
        #[arg(long, env = "VPNKEY_QR_SCRIPT_URL", default_value = QRIOUS_CDN_URL)]
        qr_script_url: String,
        /// Write to this file instead of stdout.
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Print the install steps of one flow.
    Steps {
        #[arg(long, default_value_t = Lang::Ru)]
        lang: Lang,
        #[arg(long, default_value_t = Tab::Hiddify)]
        tab: Tab,
    },
    /// Copy an access key to the system clipboard.
    Copy {
        #[arg(long, env = "VPNKEY_KEY", default_value = DEFAULT_KEY)]
        key: String,
        #[arg(long, default_value_t = Lang::Ru)]
        lang: Lang,
        /// Seconds to keep serving the clipboard on X11/Wayland, unless
        /// another program takes it over first.
        #[arg(long, value_name = "SECS", default_value_t = DEFAULT_HOLD.as_secs())]
        hold: u64,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{RED}{BOLD}error:{RESET} {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Render {
            key,
            expires,
            lang,
            tab,
            device,
            qr_script_url,
            out,
        } => {
            let mut state = PageState::new(&Defaults { key, expires });
            state.apply(Event::SetLang(lang));
            state.apply(Event::SelectTab(tab));
            state.apply(Event::SelectDevice(device));
            let html = vpnkey_core::render_page(&state, &PageAssets { qr_script_url })
                .context("failed to render page")?;

            match out {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("{GREEN}✓{RESET} wrote {}", path.display());
                }
                None => print!("{html}"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Steps { lang, tab } => {
            println!(
                "{BOLD}{}{RESET} · {}",
                translate(lang, tab.label()),
                translate(lang, Slot::Install)
            );
            for (n, step) in tab.steps().iter().enumerate() {
                println!();
                println!(
                    "{CYAN}{BOLD}{}.{RESET} {BOLD}{}{RESET}",
                    n + 1,
                    translate(lang, step.title)
                );
                println!("   {}", translate(lang, step.desc));
                if step.os_buttons {
                    println!("   {DIM}{}{RESET}", tab.download_url());
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Copy { key, lang, hold } => {
            let clipboard = SystemClipboard::new(Duration::from_secs(hold));
            if SystemClipboard::holds_selection() && hold > 0 {
                eprintln!("{DIM}serving the clipboard for up to {hold}s, paste now{RESET}");
            }
            let mut button = CopyButton::new(CopyTarget::SubscriptionLink);
            match button.click(&clipboard, &key).await {
                Ok(()) => {
                    println!("{GREEN}✓{RESET} {}", button.label(lang));
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{RED}✗{RESET} {}: {e}", button.label(lang));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
