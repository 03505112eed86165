//! Publisher Console — Entry Point
//!
//! Initializes configuration, logging, the chain connection, and the
//! interactive session loop. Runs until quit/EOF or SIGINT.
//!
//! Wiring sequence:
//! 1. Load config.toml + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Load the signing key from env (PUBLISHER_WALLET_KEY)
//! 4. Connect the RPC provider with a wallet filler
//! 5. Build the deployment table and chain adapters
//! 6. Create the orchestrator and the session event watcher
//! 7. Event loop: wallet events + command lines, all sequential

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::time::Duration;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use tokio::io::AsyncBufReadExt;
use tracing::info;

mod adapters;
mod config;
mod domain;
mod ports;
mod usecases;

use adapters::chain::session;
use adapters::chain::{
    DeploymentTable, EvmProvider, MulticallSettingsReader, PublisherApprovals, ReceiptWatcher,
    SessionWatcher,
};
use adapters::console::{commands, render, Command};
use domain::action::ApprovalAction;
use ports::approvals::ApprovalSubmitter;
use ports::settings_reader::SettingsReader;
use ports::tx_watcher::InclusionWatcher;
use ports::wallet::WalletEvents;
use usecases::console::Console;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(&config.console.log_level)
            }),
        )
        .json()
        .init();

    info!(
        name = %config.console.name,
        version = env!("CARGO_PKG_VERSION"),
        deployments = config.deployments.len(),
        "Starting publisher console"
    );

    // ── 3. Load the signing key from env ────────────────────
    let signer = session::load_signer().context("Failed to load wallet key")?;
    let account = signer.address();

    // ── 4. Connect the RPC provider ─────────────────────────
    let evm = EvmProvider::connect(&config.chain, signer)
        .await
        .context("Failed to connect RPC provider")?;

    // ── 5. Deployment table + chain adapters ────────────────
    let deployments = DeploymentTable::from_config(&config.deployments)?;
    let multicall: Address = config
        .chain
        .multicall_address
        .parse()
        .context("Invalid multicall address")?;

    let reader = MulticallSettingsReader::new(evm.inner(), deployments, multicall);
    let submitter = PublisherApprovals::new(evm.inner(), account);
    let watcher = ReceiptWatcher::new(
        evm.inner(),
        Duration::from_millis(config.chain.receipt_poll_ms),
    );

    // ── 6. Orchestrator + session event subscription ────────
    let mut console = Console::new(reader, submitter, watcher);
    let mut events = SessionWatcher::spawn(
        evm.inner(),
        account,
        evm.chain_id(),
        Duration::from_millis(config.chain.session_poll_ms),
    );

    render::print_help();

    // ── 7. Event loop: wallet events + command lines ────────
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            event = events.next_event() => {
                let Some(event) = event else { break };
                console.on_event(event).await;
                render_state(&console);
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    info!("Input closed");
                    break;
                };
                if !handle_line(&mut console, &line).await? {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("SIGINT received, shutting down");
                break;
            }
        }
    }

    info!("Console stopped");
    Ok(())
}

/// Dispatch one command line. Returns `false` when the user quits.
async fn handle_line<S, A, W>(console: &mut Console<S, A, W>, line: &str) -> Result<bool>
where
    S: SettingsReader,
    A: ApprovalSubmitter,
    W: InclusionWatcher,
{
    let command = match commands::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(true),
        Err(e) => {
            render::print_error(&e);
            return Ok(true);
        }
    };

    let action = match command {
        Command::Quit => return Ok(false),
        Command::Help => {
            render::print_help();
            return Ok(true);
        }
        Command::Settings => {
            console.reload().await;
            render_state(console);
            return Ok(true);
        }
        Command::Approve { to, token_id } => ApprovalAction::Approve { to, token_id },
        Command::ApproveAll { operator, approved } => {
            ApprovalAction::SetApprovalForAll { operator, approved }
        }
        Command::ApprovePublisher => ApprovalAction::ApprovePublisher,
    };

    console.submit(action).await?;
    render_state(console);
    Ok(true)
}

/// Render the message log and, when present, the settings snapshot.
fn render_state<S, A, W>(console: &Console<S, A, W>)
where
    S: SettingsReader,
    A: ApprovalSubmitter,
    W: InclusionWatcher,
{
    render::print_messages(console.messages());
    if let Some(settings) = console.settings() {
        render::print_settings(settings);
    }
}
