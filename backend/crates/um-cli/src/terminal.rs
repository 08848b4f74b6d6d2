//! Terminal implementations of the dashboard collaborators.

use um_core::{Confirmer, NotificationKind, Notifier, PLACEHOLDER_IMAGE_URI, Renderer, UserRecord};

use std::io::{self, BufRead, Write};

use log::warn;

/// Prints toasts: successes on stdout, errors on stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Success => println!("{message}"),
            NotificationKind::Error => eprintln!("{message}"),
        }
    }
}

/// Asks on stdin, or answers yes without asking.
pub struct TerminalConfirmer {
    assume_yes: bool,
}

impl TerminalConfirmer {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{prompt} [y/N] ");
        if let Err(e) = io::stdout().flush() {
            warn!("Failed to flush prompt: {e}");
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                warn!("Failed to read confirmation: {e}");
                false
            }
        }
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Output style for user lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Writes user lists to stdout.
pub struct TableRenderer {
    format: OutputFormat,
}

impl TableRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Renderer for TableRenderer {
    fn render(&self, users: &[UserRecord]) {
        let output = match self.format {
            OutputFormat::Table => format_table(users),
            OutputFormat::Json => match serde_json::to_string_pretty(users) {
                Ok(json) => json,
                Err(e) => {
                    warn!("Failed to serialize users: {e}");
                    return;
                }
            },
        };
        println!("{output}");
    }
}

const HEADERS: [&str; 6] = ["ID", "NAME", "ROLE", "EMAIL", "CONTACT", "IMAGE"];

/// Plain aligned table; images are summarized instead of printed.
pub(crate) fn format_table(users: &[UserRecord]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    let rows: Vec<[&str; 6]> = users
        .iter()
        .map(|u| {
            [
                u.id.as_str(),
                u.name.as_str(),
                u.role.as_str(),
                u.email.as_str(),
                u.contact.as_str(),
                image_label(&u.image),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(&HEADERS, &widths));
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines.join("\n")
}

fn format_row(cells: &[&str; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn image_label(image: &str) -> &'static str {
    if image == PLACEHOLDER_IMAGE_URI {
        "placeholder"
    } else if image.starts_with("data:") {
        "uploaded"
    } else {
        "-"
    }
}
