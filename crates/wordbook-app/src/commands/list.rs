use wordbook_core::EntryStore;

use crate::session::Session;

pub fn handle_list<S: EntryStore>(session: &Session<S>) -> anyhow::Result<String> {
    let names = session.index().names();
    if names.is_empty() {
        return Ok("No words saved yet".to_string());
    }
    Ok(names.join("\n"))
}
