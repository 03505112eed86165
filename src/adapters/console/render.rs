//! Terminal Rendering - Settings and Messages
//!
//! Plain-text presentation of the settings snapshot and the message
//! log. Formatting is split from printing so the line builders stay
//! testable.

use crate::domain::messages::MessageLog;
use crate::domain::settings::PublisherSettings;

/// Build the display lines for a settings snapshot.
pub fn settings_lines(settings: &PublisherSettings) -> Vec<String> {
    let mut lines = vec![
        "Publisher Contract Settings".to_string(),
        format!("  chain id:            {}", settings.chain_id),
        format!("  publisher:           {}", settings.publisher),
        format!("  token:               {}", settings.token),
        format!("  sortition:           {}", settings.sortition),
        format!("  publish timeout:     {}s", settings.publish_timeout),
        format!("  fee token:           {}", settings.fee_token),
        format!("  fee amount:          {}", settings.fee_amount),
        format!("  publisher approved:  {}", settings.publisher_approved),
        format!("  sortition approved:  {}", settings.sortition_approved),
        format!("  token balance:       {}", settings.token_balance),
        format!("  account:             {}", settings.account),
    ];

    if settings.fee_enabled() {
        lines.push(format!(
            "  note: publishing pulls the fee from the caller; the publisher \
             contract ({}) must be approved on the fee token to spend it.",
            settings.publisher
        ));
    }

    lines.push(format!(
        "  hint: 'approve {} <token-id>' delegates a single token to the sortition magistrate.",
        settings.sortition
    ));

    lines
}

/// Print a settings snapshot.
pub fn print_settings(settings: &PublisherSettings) {
    for line in settings_lines(settings) {
        println!("{line}");
    }
}

/// Print the message log, oldest first.
pub fn print_messages(log: &MessageLog) {
    for message in log.entries() {
        println!("[{}] {}", message.severity, message.text);
    }
}

/// Print a one-off error line (e.g. a command parse failure).
pub fn print_error(err: &anyhow::Error) {
    println!("[error] {err:#}");
}

/// Print the command reference.
pub fn print_help() {
    println!("Commands:");
    println!("  approve <to> <token-id>          approve one address for one token");
    println!("                                   (zero address clears the approval)");
    println!("  approve-all <operator> <bool>    set operator approval for all tokens");
    println!("  approve-publisher                approve the publisher contract itself");
    println!("  settings                         re-read the contract settings");
    println!("  help                             show this reference");
    println!("  quit                             exit");
}
