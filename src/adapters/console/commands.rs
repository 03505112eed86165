//! Command Parsing - Terminal Input to Typed Commands
//!
//! Parses one input line into a typed command. Parsing only enforces
//! argument shape (a parseable address, a numeric token id); it never
//! second-guesses values — the zero address is as valid as any other
//! and clears an approval on-chain.

use alloy::primitives::{Address, U256};
use anyhow::{bail, Context, Result};

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `approve <to> <token-id>`
    Approve { to: Address, token_id: U256 },
    /// `approve-all <operator> <true|false>`
    ApproveAll { operator: Address, approved: bool },
    /// `approve-publisher`
    ApprovePublisher,
    /// `settings` — re-read the snapshot.
    Settings,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Parse one input line. Empty lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();

    let command = match verb {
        "approve" => {
            let [to, token_id] = args.as_slice() else {
                bail!("usage: approve <to-address> <token-id>");
            };
            Command::Approve {
                to: to.parse().context("Invalid to-address")?,
                token_id: token_id.parse().context("Invalid token id")?,
            }
        }
        "approve-all" => {
            let [operator, approved] = args.as_slice() else {
                bail!("usage: approve-all <operator-address> <true|false>");
            };
            Command::ApproveAll {
                operator: operator.parse().context("Invalid operator address")?,
                approved: approved
                    .parse()
                    .context("Approved flag must be true or false")?,
            }
        }
        "approve-publisher" => Command::ApprovePublisher,
        "settings" => Command::Settings,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("Unknown command: {other} (try 'help')"),
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_is_none() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn test_approve_parses_address_and_token_id() {
        let cmd = parse("approve 0xcba5846735a03ac02af69134Df1aB17f122DD2dD 42")
            .unwrap()
            .unwrap();
        match cmd {
            Command::Approve { to, token_id } => {
                assert_ne!(to, Address::ZERO);
                assert_eq!(token_id, U256::from(42u64));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_zero_address_is_not_special_cased() {
        // Clearing an approval is submitting the zero address.
        let cmd = parse("approve 0x0000000000000000000000000000000000000000 7")
            .unwrap()
            .unwrap();
        assert_eq!(
            cmd,
            Command::Approve {
                to: Address::ZERO,
                token_id: U256::from(7u64),
            }
        );
    }

    #[test]
    fn test_approve_all_parses_flag() {
        let cmd = parse("approve-all 0xcba5846735a03ac02af69134Df1aB17f122DD2dD false")
            .unwrap()
            .unwrap();
        assert!(matches!(
            cmd,
            Command::ApproveAll {
                approved: false,
                ..
            }
        ));
    }

    #[test]
    fn test_bare_verbs() {
        assert_eq!(
            parse("approve-publisher").unwrap().unwrap(),
            Command::ApprovePublisher
        );
        assert_eq!(parse("settings").unwrap().unwrap(), Command::Settings);
        assert_eq!(parse("quit").unwrap().unwrap(), Command::Quit);
        assert_eq!(parse("exit").unwrap().unwrap(), Command::Quit);
    }

    #[test]
    fn test_unknown_command_errors() {
        assert!(parse("frobnicate").is_err());
        assert!(parse("approve notanaddress 1").is_err());
        assert!(parse("approve").is_err());
    }
}
