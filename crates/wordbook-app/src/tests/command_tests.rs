//! Command handlers end to end against an in-memory store

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use wordbook_core::FormFields;
use wordbook_store::SqliteStore;

use super::{KING, MockDictionary, Reply};
use crate::cli::{Cli, Command, EntryArgs};
use crate::commands::handle_command;
use crate::session::Session;

fn empty_session() -> Session<SqliteStore> {
    Session::load(SqliteStore::open_in_memory().unwrap()).unwrap()
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("wordbook-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn hi_args() -> EntryArgs {
    EntryArgs {
        name: Some("Hi".to_string()),
        etymology: Some("From nowhere".to_string()),
        part_of_speech: Some("noun".to_string()),
        definition: Some("Something something".to_string()),
        example: Some("Huh?".to_string()),
        relationship: Some("synonyms".to_string()),
        words: Some("idk, idc,".to_string()),
        ..EntryArgs::default()
    }
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["wordbook", "search", "King", "--offline", "--db", "x.db"]).unwrap();
    assert_eq!(cli.db, Some(PathBuf::from("x.db")));
    assert!(matches!(
        cli.command,
        Command::Search { ref word, offline: true } if word == "King"
    ));

    assert!(Cli::try_parse_from(["wordbook", "add", "--audio", "a.mp3"]).is_err());
    assert!(
        Cli::try_parse_from(["wordbook", "add", "--name", "hi", "--form", "hi.json"]).is_err()
    );
}

#[tokio::test]
async fn add_then_show() {
    let mut session = empty_session();

    let added = handle_command(&mut session, None, Command::Add(hi_args()))
        .await
        .unwrap();
    assert_eq!(added, "Added 'hi'");

    let text = handle_command(
        &mut session,
        None,
        Command::Show {
            word: "hi".to_string(),
            html: false,
        },
    )
    .await
    .unwrap();
    assert_eq!(
        text,
        "Hi\n\nEtymology: From nowhere\n\nPart of speech: noun\n  1. Something something\n     Example: Huh?\n     Synonyms: idk, idc\n"
    );

    let html = handle_command(
        &mut session,
        None,
        Command::Show {
            word: "hi".to_string(),
            html: true,
        },
    )
    .await
    .unwrap();
    assert!(html.starts_with("<b style='font-size: 40px'>Hi</b>"));
}

#[tokio::test]
async fn add_rejects_blank_and_duplicate_names() {
    let mut session = empty_session();
    let blank = EntryArgs {
        name: Some("   ".to_string()),
        ..EntryArgs::default()
    };
    assert!(handle_command(&mut session, None, Command::Add(blank)).await.is_err());

    handle_command(&mut session, None, Command::Add(hi_args())).await.unwrap();
    let err = handle_command(&mut session, None, Command::Add(hi_args()))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("already in the dictionary"));
}

#[tokio::test]
async fn edit_without_fields_prints_form() {
    let mut session = empty_session();
    handle_command(&mut session, None, Command::Add(hi_args())).await.unwrap();

    let json = handle_command(
        &mut session,
        None,
        Command::Edit {
            word: "hi".to_string(),
            fields: EntryArgs::default(),
        },
    )
    .await
    .unwrap();

    let form: FormFields = serde_json::from_str(&json).unwrap();
    assert_eq!(form.name, "hi");
    assert_eq!(form.meanings[0].definitions[0].related_words[0].words, "idk, idc");
}

#[tokio::test]
async fn edit_appends_rows_and_renames() {
    let mut session = empty_session();
    handle_command(&mut session, None, Command::Add(hi_args())).await.unwrap();

    let args = EntryArgs {
        name: Some("hello".to_string()),
        part_of_speech: Some("exclamation".to_string()),
        definition: Some("used as a greeting.".to_string()),
        ..EntryArgs::default()
    };
    let message = handle_command(
        &mut session,
        None,
        Command::Edit {
            word: "hi".to_string(),
            fields: args,
        },
    )
    .await
    .unwrap();
    assert_eq!(message, "Renamed 'hi' to 'hello'");

    let entry = session.lookup("hello").unwrap();
    assert_eq!(entry.etymology, "From nowhere");
    assert_eq!(entry.meanings.len(), 2);
    assert_eq!(entry.meanings[1].part_of_speech, "exclamation");
    assert!(session.lookup("hi").is_err());
}

#[tokio::test]
async fn edit_from_form_file_replaces_entry() {
    let mut session = empty_session();
    handle_command(&mut session, None, Command::Add(hi_args())).await.unwrap();

    let form = temp_file("form.json", r#"{"name": "hi", "etymology": "Middle English"}"#);
    let args = EntryArgs {
        form: Some(form.clone()),
        ..EntryArgs::default()
    };
    let message = handle_command(
        &mut session,
        None,
        Command::Edit {
            word: "hi".to_string(),
            fields: args,
        },
    )
    .await
    .unwrap();
    fs::remove_file(form).unwrap();

    assert_eq!(message, "Updated 'hi'");
    let entry = session.lookup("hi").unwrap();
    assert_eq!(entry.etymology, "Middle English");
    assert!(entry.meanings.is_empty());
}

#[tokio::test]
async fn list_and_delete() {
    let mut session = empty_session();
    assert_eq!(
        handle_command(&mut session, None, Command::List).await.unwrap(),
        "No words saved yet"
    );

    handle_command(&mut session, None, Command::Add(hi_args())).await.unwrap();
    let ape = EntryArgs {
        name: Some("ape".to_string()),
        ..EntryArgs::default()
    };
    handle_command(&mut session, None, Command::Add(ape)).await.unwrap();
    assert_eq!(
        handle_command(&mut session, None, Command::List).await.unwrap(),
        "ape\nhi"
    );

    let deleted = handle_command(
        &mut session,
        None,
        Command::Delete {
            word: "HI".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(deleted, "Deleted 'hi'");
    assert_eq!(
        handle_command(&mut session, None, Command::List).await.unwrap(),
        "ape"
    );
}

#[tokio::test]
async fn search_offline_skips_service() {
    let mut session = empty_session();
    let service = MockDictionary::new(Reply::Payload(KING));

    let err = handle_command(
        &mut session,
        Some(&service),
        Command::Search {
            word: "king".to_string(),
            offline: true,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "'king' is not saved");
    assert_eq!(service.calls(), 0);

    let text = handle_command(
        &mut session,
        Some(&service),
        Command::Search {
            word: "king".to_string(),
            offline: false,
        },
    )
    .await
    .unwrap();
    assert!(text.starts_with("King\n"));
    assert!(text.contains("Synonyms: ruler, sovereign, monarch"));
}

#[tokio::test]
async fn search_without_definitions_fails() {
    let mut session = empty_session();
    let service = MockDictionary::new(Reply::NoDefinitions);

    let err = handle_command(
        &mut session,
        Some(&service),
        Command::Search {
            word: "zzyzx".to_string(),
            offline: false,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "No definitions found for 'zzyzx'");
}

#[tokio::test]
async fn import_skips_saved_words() {
    let mut session = empty_session();
    let king = EntryArgs {
        name: Some("king".to_string()),
        ..EntryArgs::default()
    };
    handle_command(&mut session, None, Command::Add(king)).await.unwrap();

    let payload = temp_file("king.json", KING);
    let message = handle_command(
        &mut session,
        None,
        Command::Import {
            path: payload.clone(),
        },
    )
    .await
    .unwrap();
    fs::remove_file(payload).unwrap();

    assert_eq!(message, "Imported 1 words (1 already saved)");
    assert_eq!(session.index().names(), ["god save the king", "king"]);
    // the hand-made entry is kept
    assert!(session.lookup("king").unwrap().meanings.is_empty());
}

#[test]
fn error_report_carries_context_chain() {
    let err = anyhow::Error::from(wordbook_core::DictionaryError::NotFound("king".to_string()))
        .context("Failed to delete 'king'");
    assert_eq!(
        crate::error_report(&err),
        "Error: Failed to delete 'king': Word not found: king"
    );
}
