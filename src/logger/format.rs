//! Log formatting and output with ANSI colors
//!
//! Handles:
//! - Colorized console output with tag and level columns
//! - Shortening of base58 addresses and signatures in messages
//! - Dual output (console + file)
//! - Broken pipe handling for piped commands

use super::file::write_to_file;
use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::io::{stdout, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 8;
const LEVEL_WIDTH: usize = 7;

/// Transaction signatures (base58, 80-90 chars)
static SIGNATURE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([1-9A-HJ-NP-Za-km-z]{80,90})\b").expect("valid signature regex"));

/// Public keys (base58, 32-44 chars)
static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([1-9A-HJ-NP-Za-km-z]{32,44})\b").expect("valid address regex"));

pub fn format_and_log(tag: LogTag, level: LogLevel, message: &str) {
    let now = Local::now();
    let time = now.format("%H:%M:%S").to_string();

    let console_line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        format_tag(&tag),
        level.colored_label(LEVEL_WIDTH),
        highlight_message(message, level)
    );
    print_stdout_safe(&console_line);

    let file_line = format!(
        "{} [{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        tag.to_plain_string(),
        level.as_str(),
        message
    );
    write_to_file(&file_line);
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let label = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => label.bright_yellow().bold(),
        LogTag::Config => label.bright_white().bold(),
        LogTag::Wallet => label.bright_magenta().bold(),
        LogTag::Rpc => label.bright_cyan().bold(),
        LogTag::Sweep => label.bright_green().bold(),
        LogTag::Ui => label.bright_blue().bold(),
        LogTag::Other(_) => label.white().bold(),
    }
}

/// Shorten and color signatures and addresses so lines stay readable
fn highlight_message(message: &str, level: LogLevel) -> String {
    let shortened = shorten_base58(message);
    match level {
        LogLevel::Error => shortened.red().to_string(),
        LogLevel::Warning => shortened.yellow().to_string(),
        LogLevel::Verbose => shortened.dimmed().to_string(),
        _ => shortened,
    }
}

/// Replace long base58 strings with `head...tail` forms
pub(crate) fn shorten_base58(message: &str) -> String {
    let pass = SIGNATURE_RE.replace_all(message, |caps: &Captures| {
        let sig = &caps[1];
        format!("{}...{}", &sig[..12], &sig[sig.len() - 8..])
    });
    ADDRESS_RE
        .replace_all(&pass, |caps: &Captures| {
            let addr = &caps[1];
            format!("{}...{}", &addr[..8], &addr[addr.len() - 4..])
        })
        .to_string()
}

/// Print to stdout but ignore broken pipe errors
fn print_stdout_safe(message: &str) {
    if let Err(e) = writeln!(stdout(), "{}", message) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        let _ = writeln!(std::io::stderr(), "Logger stdout error: {}", e);
    }
    if let Err(e) = stdout().flush() {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortens_addresses() {
        let line = shorten_base58("sweeping to 3KBJ2uHxtm3ZTEoBUad8MPbDQcUGeUwzAm7aqm5ehTBX now");
        assert_eq!(line, "sweeping to 3KBJ2uHx...hTBX now");
    }

    #[test]
    fn test_leaves_short_words_alone() {
        assert_eq!(shorten_base58("balance 998000000"), "balance 998000000");
    }
}
