use anyhow::Context;
use wordbook_core::{EntryStore, from_form_fields};

use crate::cli::EntryArgs;
use crate::session::Session;

pub fn handle_add<S: EntryStore>(
    session: &mut Session<S>,
    args: &EntryArgs,
) -> anyhow::Result<String> {
    let fields = args.to_form_fields()?;
    let entry = from_form_fields(&fields).context("Cannot add word")?;
    let name = entry.name.clone();

    if !session.add(entry)? {
        anyhow::bail!("'{name}' is already in the dictionary");
    }

    tracing::info!("Added '{}'", name);
    Ok(format!("Added '{name}'"))
}
