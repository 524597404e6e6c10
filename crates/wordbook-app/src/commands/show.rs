use wordbook_core::{EntryStore, render_html, render_text};

use crate::session::Session;

pub fn handle_show<S: EntryStore>(
    session: &Session<S>,
    word: &str,
    html: bool,
) -> anyhow::Result<String> {
    let entry = session.lookup(word)?;
    if html {
        Ok(render_html(entry))
    } else {
        Ok(render_text(entry))
    }
}
