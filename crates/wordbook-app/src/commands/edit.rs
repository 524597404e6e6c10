use anyhow::Context;
use wordbook_core::{EntryStore, from_form_fields, to_form_fields};

use crate::cli::EntryArgs;
use crate::session::Session;

/// Apply `args` to a saved word, or print its form when no field is given
pub fn handle_edit<S: EntryStore>(
    session: &mut Session<S>,
    word: &str,
    args: &EntryArgs,
) -> anyhow::Result<String> {
    let current = session.lookup(word)?;
    let old_name = current.name.clone();
    let mut fields = to_form_fields(current);

    if args.is_empty() {
        return Ok(serde_json::to_string_pretty(&fields)?);
    }

    match args.read_form()? {
        Some(form) => fields = form,
        None => args.apply_to(&mut fields),
    }

    let entry = from_form_fields(&fields).context("Cannot edit word")?;
    let new_name = entry.name.clone();
    session.edit(&old_name, entry)?;

    if new_name == old_name {
        Ok(format!("Updated '{new_name}'"))
    } else {
        Ok(format!("Renamed '{old_name}' to '{new_name}'"))
    }
}
