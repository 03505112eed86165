//! Property Tests - Message Log Invariants
//!
//! The message log is the one piece of append-structured state in
//! the console; these properties pin down its replace/append
//! semantics for arbitrary histories.

use proptest::prelude::*;

use publisher_console::domain::messages::{MessageLog, Severity};

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Success),
        Just(Severity::Error),
    ]
}

proptest! {
    /// `replace` yields exactly one entry regardless of prior history.
    #[test]
    fn replace_always_yields_one_entry(
        history in proptest::collection::vec((severity(), "[ -~]{0,40}"), 0..20),
        final_text in "[ -~]{0,40}",
    ) {
        let mut log = MessageLog::new();
        for (severity, text) in history {
            log.append(severity, text);
        }

        log.replace(Severity::Error, final_text.clone());

        prop_assert_eq!(log.len(), 1);
        prop_assert_eq!(log.entries()[0].text.clone(), final_text);
        prop_assert_eq!(log.entries()[0].severity, Severity::Error);
    }

    /// `append` grows the log by one and never reorders entries.
    #[test]
    fn append_preserves_order(
        texts in proptest::collection::vec("[a-z]{1,12}", 1..30),
    ) {
        let mut log = MessageLog::new();
        for (i, text) in texts.iter().enumerate() {
            log.append(Severity::Info, text.clone());
            prop_assert_eq!(log.len(), i + 1);
        }

        let collected: Vec<String> =
            log.entries().iter().map(|m| m.text.clone()).collect();
        prop_assert_eq!(collected, texts);
    }
}
