use std::fs;
use std::path::Path;

use anyhow::Context;
use wordbook_core::{EntryStore, from_remote_payload, parse_remote_payload};

use crate::session::Session;

/// Add every record of a saved remote response
pub fn handle_import<S: EntryStore>(
    session: &mut Session<S>,
    path: &Path,
) -> anyhow::Result<String> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records = parse_remote_payload(&json)
        .with_context(|| format!("Invalid payload in {}", path.display()))?;
    let entries = from_remote_payload(&records)
        .with_context(|| format!("Invalid payload in {}", path.display()))?;

    let total = entries.len();
    let added = session.import(entries)?;
    tracing::info!("Imported {} of {} words from {}", added, total, path.display());

    Ok(format!(
        "Imported {added} words ({} already saved)",
        total - added
    ))
}
