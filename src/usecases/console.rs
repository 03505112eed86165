//! Console Orchestrator - Connect, Read, Submit, Await, Refresh
//!
//! Owns the session state: the active chain and account, the single
//! settings snapshot, the message log, and the pending-submission
//! flag. All operations are awaited sequentially — nothing initiated
//! by one user action runs in parallel with another, and a refresh
//! triggered after inclusion observes state at least as recent as
//! that inclusion.

use alloy::primitives::Address;
use anyhow::Result;
use tracing::{info, instrument, warn};

use crate::domain::action::{ApprovalAction, InclusionStatus, PendingTx};
use crate::domain::messages::{MessageLog, Severity};
use crate::domain::settings::PublisherSettings;
use crate::ports::approvals::ApprovalSubmitter;
use crate::ports::settings_reader::SettingsReader;
use crate::ports::tx_watcher::InclusionWatcher;
use crate::ports::wallet::WalletEvent;

/// Orchestrates one wallet session against the publisher contract.
pub struct Console<S: SettingsReader, A: ApprovalSubmitter, W: InclusionWatcher> {
    reader: S,
    submitter: A,
    watcher: W,
    /// Active chain id and account, once connected.
    session: Option<(u64, Address)>,
    /// The single active snapshot; replaced wholesale on refresh.
    settings: Option<PublisherSettings>,
    /// Status messages owned here and lent to rendering.
    messages: MessageLog,
    /// Set while a submission is pending; blocks resubmission.
    busy: bool,
}

impl<S: SettingsReader, A: ApprovalSubmitter, W: InclusionWatcher> Console<S, A, W> {
    /// Create an orchestrator with no session yet.
    pub fn new(reader: S, submitter: A, watcher: W) -> Self {
        Self {
            reader,
            submitter,
            watcher,
            session: None,
            settings: None,
            messages: MessageLog::new(),
            busy: false,
        }
    }

    /// React to a wallet session event.
    ///
    /// Every event updates the session and triggers a settings
    /// reload; the subscription guarantees one invocation per change.
    pub async fn on_event(&mut self, event: WalletEvent) {
        match event {
            WalletEvent::Connected { chain_id, account } => {
                info!(chain_id, account = %account, "Wallet connected");
                self.session = Some((chain_id, account));
            }
            WalletEvent::AccountChanged(account) => {
                info!(account = %account, "Account changed");
                if let Some((chain_id, _)) = self.session {
                    self.session = Some((chain_id, account));
                }
            }
            WalletEvent::NetworkChanged(chain_id) => {
                info!(chain_id, "Network changed");
                if let Some((_, account)) = self.session {
                    self.session = Some((chain_id, account));
                }
            }
        }
        self.reload().await;
    }

    /// Re-read the settings snapshot for the active session.
    ///
    /// A failed read (unsupported chain included) clears the snapshot
    /// and appends one error message; it is never retried here.
    pub async fn reload(&mut self) {
        let Some((chain_id, account)) = self.session else {
            self.messages
                .append(Severity::Error, "No wallet session; connect first");
            return;
        };

        match self.reader.read_settings(chain_id, account).await {
            Ok(snapshot) => {
                self.settings = Some(snapshot);
            }
            Err(e) => {
                warn!(chain_id, error = %e, "Settings read failed");
                self.settings = None;
                self.messages.append(Severity::Error, format!("{e:#}"));
            }
        }
    }

    /// Submit an approval action, await inclusion, refresh once.
    ///
    /// The submit path is disabled while a transaction is pending. A
    /// submission failure appends exactly one error message and
    /// re-enables submission; the error itself is surfaced verbatim.
    /// A failure while waiting for inclusion propagates to the
    /// caller — once the wait has started there is no cancelling it.
    #[instrument(skip(self), fields(action = %action))]
    pub async fn submit(&mut self, action: ApprovalAction) -> Result<()> {
        if self.busy {
            self.messages.append(
                Severity::Info,
                "A transaction is already pending; wait for inclusion",
            );
            return Ok(());
        }

        let Some(publisher) = self.settings.as_ref().map(|s| s.publisher) else {
            self.messages.append(
                Severity::Error,
                "No settings loaded; connect on a supported chain first",
            );
            return Ok(());
        };

        self.busy = true;

        let submitted = match &action {
            ApprovalAction::Approve { to, token_id } => {
                self.submitter.approve(publisher, *to, *token_id).await
            }
            ApprovalAction::SetApprovalForAll { operator, approved } => {
                self.submitter
                    .set_approval_for_all(publisher, *operator, *approved)
                    .await
            }
            ApprovalAction::ApprovePublisher => {
                self.submitter.approve_publisher(publisher).await
            }
        };

        let hash = match submitted {
            Ok(hash) => hash,
            Err(e) => {
                warn!(error = %e, "Submission failed");
                self.messages.append(Severity::Error, format!("{e:#}"));
                self.busy = false;
                return Ok(());
            }
        };

        self.messages
            .replace(Severity::Success, format!("Submitted {action}: {hash}"));

        let pending = PendingTx { hash, action };
        info!(tx = %pending.hash, "Awaiting inclusion");

        let status = self.watcher.wait_for_inclusion(pending.hash).await?;
        match status {
            InclusionStatus::Confirmed { block } => {
                self.messages
                    .append(Severity::Success, format!("Included in block {block}"));
            }
            InclusionStatus::Reverted => {
                self.messages.append(
                    Severity::Error,
                    format!("Transaction reverted: {}", pending.hash),
                );
            }
        }

        // One refresh per inclusion; the new snapshot observes state
        // at least as recent as the included transaction.
        self.reload().await;
        self.busy = false;
        Ok(())
    }

    /// The active snapshot, if the last read succeeded.
    pub fn settings(&self) -> Option<&PublisherSettings> {
        self.settings.as_ref()
    }

    /// The session's message log.
    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Whether a submission is currently pending.
    pub fn is_busy(&self) -> bool {
        self.busy
    }
}
