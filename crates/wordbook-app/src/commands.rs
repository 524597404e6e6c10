use wordbook_api::LookupService;
use wordbook_core::EntryStore;

use crate::cli::Command;
use crate::session::Session;

pub mod add;
pub mod delete;
pub mod edit;
pub mod import;
pub mod list;
pub mod search;
pub mod show;

use add::handle_add;
use delete::handle_delete;
use edit::handle_edit;
use import::handle_import;
use list::handle_list;
use search::handle_search;
use show::handle_show;

/// Run one command against the session and return what to print
pub async fn handle_command<S: EntryStore>(
    session: &mut Session<S>,
    service: Option<&dyn LookupService>,
    command: Command,
) -> anyhow::Result<String> {
    tracing::debug!("Handling {:?}", command);
    match command {
        Command::List => handle_list(session),
        Command::Show { word, html } => handle_show(session, &word, html),
        Command::Search { word, offline } => {
            let service = if offline { None } else { service };
            handle_search(session, &word, service).await
        }
        Command::Add(fields) => handle_add(session, &fields),
        Command::Edit { word, fields } => handle_edit(session, &word, &fields),
        Command::Delete { word } => handle_delete(session, &word),
        Command::Import { path } => handle_import(session, &path),
    }
}
