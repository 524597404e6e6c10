use wordbook_core::EntryStore;

use crate::session::Session;

pub fn handle_delete<S: EntryStore>(
    session: &mut Session<S>,
    word: &str,
) -> anyhow::Result<String> {
    let removed = session.delete(word)?;
    tracing::info!("Deleted '{}'", removed.name);
    Ok(format!("Deleted '{}'", removed.name))
}
