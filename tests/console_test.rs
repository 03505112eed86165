//! Integration Tests - Orchestrator Against Mock Ports
//!
//! Tests the connect → read → submit → await → refresh flow between
//! the orchestrator and mock port adapters. Uses mockall for trait
//! mocking and tokio::test for async tests.

use alloy::primitives::{Address, TxHash, U256};
use mockall::mock;
use mockall::predicate::*;

use publisher_console::domain::action::{ApprovalAction, InclusionStatus};
use publisher_console::domain::error::PublisherError;
use publisher_console::domain::messages::Severity;
use publisher_console::domain::settings::PublisherSettings;
use publisher_console::ports::wallet::WalletEvent;
use publisher_console::usecases::console::Console;

// ---- Mock Definitions ----

mock! {
    pub Reader {}

    #[async_trait::async_trait]
    impl publisher_console::ports::settings_reader::SettingsReader for Reader {
        async fn read_settings(
            &self,
            chain_id: u64,
            account: Address,
        ) -> anyhow::Result<PublisherSettings>;
    }
}

mock! {
    pub Submitter {}

    #[async_trait::async_trait]
    impl publisher_console::ports::approvals::ApprovalSubmitter for Submitter {
        async fn approve(
            &self,
            publisher: Address,
            to: Address,
            token_id: U256,
        ) -> anyhow::Result<TxHash>;

        async fn set_approval_for_all(
            &self,
            publisher: Address,
            operator: Address,
            approved: bool,
        ) -> anyhow::Result<TxHash>;

        async fn approve_publisher(&self, publisher: Address) -> anyhow::Result<TxHash>;
    }
}

mock! {
    pub Watcher {}

    #[async_trait::async_trait]
    impl publisher_console::ports::tx_watcher::InclusionWatcher for Watcher {
        async fn wait_for_inclusion(
            &self,
            hash: TxHash,
        ) -> anyhow::Result<InclusionStatus>;
    }
}

// ---- Fixtures ----

const CHAIN: u64 = 11155111;

fn account() -> Address {
    Address::repeat_byte(0xee)
}

fn publisher() -> Address {
    Address::repeat_byte(0xaa)
}

fn tx(byte: u8) -> TxHash {
    TxHash::repeat_byte(byte)
}

fn snapshot(chain_id: u64) -> PublisherSettings {
    PublisherSettings {
        chain_id,
        publisher: publisher(),
        token: Address::repeat_byte(0xbb),
        sortition: Address::repeat_byte(0xcc),
        publish_timeout: U256::from(86_400u64),
        fee_token: Address::ZERO,
        fee_amount: U256::ZERO,
        publisher_approved: false,
        sortition_approved: false,
        token_balance: U256::from(1u64),
        account: account(),
    }
}

// ---- Integration Tests ----

#[tokio::test]
async fn test_unsupported_chain_fails_without_writes() {
    let mut reader = MockReader::new();
    reader
        .expect_read_settings()
        .with(eq(31337u64), eq(account()))
        .times(1)
        .returning(|chain_id, _| {
            Err(PublisherError::UnsupportedChain { chain_id }.into())
        });

    // No expectations on submitter or watcher: any call panics.
    let submitter = MockSubmitter::new();
    let watcher = MockWatcher::new();

    let mut console = Console::new(reader, submitter, watcher);
    console
        .on_event(WalletEvent::Connected {
            chain_id: 31337,
            account: account(),
        })
        .await;

    assert!(console.settings().is_none());
    let last = console.messages().last().unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert!(last.text.contains("unsupported chain"));
    assert!(last.text.contains("31337"));
}

#[tokio::test]
async fn test_connect_builds_snapshot() {
    let mut reader = MockReader::new();
    reader
        .expect_read_settings()
        .with(eq(CHAIN), eq(account()))
        .times(1)
        .returning(|chain_id, _| Ok(snapshot(chain_id)));

    let mut console = Console::new(reader, MockSubmitter::new(), MockWatcher::new());
    console
        .on_event(WalletEvent::Connected {
            chain_id: CHAIN,
            account: account(),
        })
        .await;

    let settings = console.settings().unwrap();
    assert_eq!(settings.chain_id, CHAIN);
    assert_eq!(settings.publisher, publisher());
    assert_eq!(settings.account, account());
    assert!(console.messages().is_empty());
}

#[tokio::test]
async fn test_zero_address_passes_through_unvalidated() {
    let mut reader = MockReader::new();
    reader
        .expect_read_settings()
        .times(2)
        .returning(|chain_id, _| Ok(snapshot(chain_id)));

    // The zero address reaches the submitter exactly as given.
    let mut submitter = MockSubmitter::new();
    submitter
        .expect_approve()
        .with(eq(publisher()), eq(Address::ZERO), eq(U256::from(7u64)))
        .times(1)
        .returning(|_, _, _| Ok(tx(0x11)));

    let mut watcher = MockWatcher::new();
    watcher
        .expect_wait_for_inclusion()
        .with(eq(tx(0x11)))
        .times(1)
        .returning(|_| Ok(InclusionStatus::Confirmed { block: 5 }));

    let mut console = Console::new(reader, submitter, watcher);
    console
        .on_event(WalletEvent::Connected {
            chain_id: CHAIN,
            account: account(),
        })
        .await;

    console
        .submit(ApprovalAction::Approve {
            to: Address::ZERO,
            token_id: U256::from(7u64),
        })
        .await
        .unwrap();

    assert!(!console.is_busy());
}

#[tokio::test]
async fn test_inclusion_triggers_exactly_one_refresh() {
    // One read on connect, exactly one more after inclusion.
    let mut reader = MockReader::new();
    reader
        .expect_read_settings()
        .times(2)
        .returning(|chain_id, _| Ok(snapshot(chain_id)));

    let mut submitter = MockSubmitter::new();
    submitter
        .expect_approve_publisher()
        .with(eq(publisher()))
        .times(1)
        .returning(|_| Ok(tx(0x22)));

    let mut watcher = MockWatcher::new();
    watcher
        .expect_wait_for_inclusion()
        .times(1)
        .returning(|_| Ok(InclusionStatus::Confirmed { block: 42 }));

    let mut console = Console::new(reader, submitter, watcher);
    console
        .on_event(WalletEvent::Connected {
            chain_id: CHAIN,
            account: account(),
        })
        .await;

    console.submit(ApprovalAction::ApprovePublisher).await.unwrap();

    assert!(console.settings().is_some());
    let last = console.messages().last().unwrap();
    assert_eq!(last.severity, Severity::Success);
    assert!(last.text.contains("block 42"));
}

#[tokio::test]
async fn test_submission_error_appends_one_message_and_reenables() {
    let mut reader = MockReader::new();
    reader
        .expect_read_settings()
        .times(1) // connect only — a failed submission must NOT refresh
        .returning(|chain_id, _| Ok(snapshot(chain_id)));

    let mut submitter = MockSubmitter::new();
    submitter
        .expect_approve()
        .times(1)
        .returning(|_, _, _| Err(anyhow::anyhow!("insufficient funds for gas")));

    // Never reached on a failed submission.
    let watcher = MockWatcher::new();

    let mut console = Console::new(reader, submitter, watcher);
    console
        .on_event(WalletEvent::Connected {
            chain_id: CHAIN,
            account: account(),
        })
        .await;

    console
        .submit(ApprovalAction::Approve {
            to: Address::repeat_byte(0x01),
            token_id: U256::from(1u64),
        })
        .await
        .unwrap();

    // Exactly one error entry, surfaced verbatim; submission re-enabled.
    assert_eq!(console.messages().len(), 1);
    let message = console.messages().last().unwrap();
    assert_eq!(message.severity, Severity::Error);
    assert!(message.text.contains("insufficient funds for gas"));
    assert!(!console.is_busy());
}

#[tokio::test]
async fn test_reverted_inclusion_still_refreshes() {
    let mut reader = MockReader::new();
    reader
        .expect_read_settings()
        .times(2)
        .returning(|chain_id, _| Ok(snapshot(chain_id)));

    let mut submitter = MockSubmitter::new();
    submitter
        .expect_set_approval_for_all()
        .with(
            eq(publisher()),
            eq(Address::repeat_byte(0xcc)),
            eq(true),
        )
        .times(1)
        .returning(|_, _, _| Ok(tx(0x33)));

    let mut watcher = MockWatcher::new();
    watcher
        .expect_wait_for_inclusion()
        .times(1)
        .returning(|_| Ok(InclusionStatus::Reverted));

    let mut console = Console::new(reader, submitter, watcher);
    console
        .on_event(WalletEvent::Connected {
            chain_id: CHAIN,
            account: account(),
        })
        .await;

    console
        .submit(ApprovalAction::SetApprovalForAll {
            operator: Address::repeat_byte(0xcc),
            approved: true,
        })
        .await
        .unwrap();

    assert!(!console.is_busy());
    let reverted = console
        .messages()
        .entries()
        .iter()
        .any(|m| m.severity == Severity::Error && m.text.contains("reverted"));
    assert!(reverted);
}

#[tokio::test]
async fn test_network_change_rereads_on_new_chain() {
    let mut reader = MockReader::new();
    reader
        .expect_read_settings()
        .with(eq(1u64), eq(account()))
        .times(1)
        .returning(|chain_id, _| Ok(snapshot(chain_id)));
    reader
        .expect_read_settings()
        .with(eq(CHAIN), eq(account()))
        .times(1)
        .returning(|chain_id, _| Ok(snapshot(chain_id)));

    let mut console = Console::new(reader, MockSubmitter::new(), MockWatcher::new());
    console
        .on_event(WalletEvent::Connected {
            chain_id: 1,
            account: account(),
        })
        .await;
    assert_eq!(console.settings().unwrap().chain_id, 1);

    console.on_event(WalletEvent::NetworkChanged(CHAIN)).await;
    assert_eq!(console.settings().unwrap().chain_id, CHAIN);
}

#[tokio::test]
async fn test_submit_without_settings_is_rejected_locally() {
    // No session at all: nothing may touch the chain.
    let reader = MockReader::new();
    let submitter = MockSubmitter::new();
    let watcher = MockWatcher::new();

    let mut console = Console::new(reader, submitter, watcher);
    console.submit(ApprovalAction::ApprovePublisher).await.unwrap();

    let last = console.messages().last().unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert!(!console.is_busy());
}
