use wordbook_api::LookupService;
use wordbook_core::{EntryStore, normalize_name, render_text};

use crate::session::{SearchOutcome, Session};

pub async fn handle_search<S: EntryStore>(
    session: &mut Session<S>,
    word: &str,
    service: Option<&dyn LookupService>,
) -> anyhow::Result<String> {
    match session.search(word, service).await? {
        SearchOutcome::Saved(entry) => Ok(render_text(&entry)),
        SearchOutcome::Fetched(entry) => {
            tracing::info!("'{}' added to the dictionary", entry.name);
            Ok(render_text(&entry))
        }
        SearchOutcome::Missing if service.is_none() => {
            anyhow::bail!("'{}' is not saved", normalize_name(word))
        }
        SearchOutcome::Missing => {
            anyhow::bail!("No definitions found for '{}'", normalize_name(word))
        }
    }
}
