//! History commands: list, delete, clear
//!
//! Dispatches from the runtime [`ContentKind`] to the statically typed
//! store for that kind.

use crate::config::Config;
use crate::content::condoleance::Condoleance;
use crate::content::cv::Cv;
use crate::content::draaiboek::Draaiboek;
use crate::content::excuus::Excuus;
use crate::content::fobie::Fobie;
use crate::content::haiku::Haiku;
use crate::content::levensles::Levensles;
use crate::content::tongbreker::Tongbreker;
use crate::content::ContentKind;
use crate::error::{AbsurdaError, Result};
use crate::storage::{HistoryEntry, HistoryStore};
use colored::Colorize;
use prettytable::{format, Table};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// List the stored items for a kind, newest first
pub fn run_list(config: &Config, kind: ContentKind, json: bool) -> Result<()> {
    match kind {
        ContentKind::Tongbreker => list_items::<Tongbreker>(config, kind, json),
        ContentKind::Condoleance => list_items::<Condoleance>(config, kind, json),
        ContentKind::Fobie => list_items::<Fobie>(config, kind, json),
        ContentKind::Draaiboek => list_items::<Draaiboek>(config, kind, json),
        ContentKind::Excuus => list_items::<Excuus>(config, kind, json),
        ContentKind::Haiku => list_items::<Haiku>(config, kind, json),
        ContentKind::Cv => list_items::<Cv>(config, kind, json),
        ContentKind::Levensles => list_items::<Levensles>(config, kind, json),
    }
}

/// Delete one item by id or id prefix
pub fn run_delete(config: &Config, kind: ContentKind, id: &str) -> Result<()> {
    match kind {
        ContentKind::Tongbreker => delete_item::<Tongbreker>(config, kind, id),
        ContentKind::Condoleance => delete_item::<Condoleance>(config, kind, id),
        ContentKind::Fobie => delete_item::<Fobie>(config, kind, id),
        ContentKind::Draaiboek => delete_item::<Draaiboek>(config, kind, id),
        ContentKind::Excuus => delete_item::<Excuus>(config, kind, id),
        ContentKind::Haiku => delete_item::<Haiku>(config, kind, id),
        ContentKind::Cv => delete_item::<Cv>(config, kind, id),
        ContentKind::Levensles => delete_item::<Levensles>(config, kind, id),
    }
}

/// Remove the entire history for a kind
pub fn run_clear(config: &Config, kind: ContentKind) -> Result<()> {
    match kind {
        ContentKind::Tongbreker => clear_items::<Tongbreker>(config, kind),
        ContentKind::Condoleance => clear_items::<Condoleance>(config, kind),
        ContentKind::Fobie => clear_items::<Fobie>(config, kind),
        ContentKind::Draaiboek => clear_items::<Draaiboek>(config, kind),
        ContentKind::Excuus => clear_items::<Excuus>(config, kind),
        ContentKind::Haiku => clear_items::<Haiku>(config, kind),
        ContentKind::Cv => clear_items::<Cv>(config, kind),
        ContentKind::Levensles => clear_items::<Levensles>(config, kind),
    }
}

fn open_store<T>(config: &Config, kind: ContentKind) -> Result<HistoryStore<T>>
where
    T: HistoryEntry + Serialize + DeserializeOwned,
{
    HistoryStore::open(kind.storage_key(), config.history.data_dir.as_deref())
}

fn list_items<T>(config: &Config, kind: ContentKind, json: bool) -> Result<()>
where
    T: HistoryEntry + Serialize + DeserializeOwned,
{
    let store = open_store::<T>(config, kind)?;
    let items = store.get_all();

    if json {
        let rendered = serde_json::to_string_pretty(&items).map_err(AbsurdaError::Serialization)?;
        println!("{}", rendered);
        return Ok(());
    }

    if items.is_empty() {
        println!("{}", format!("Geen {} items in de historie.", kind).yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.add_row(prettytable::row![
        "ID".bold(),
        "Aangemaakt".bold(),
        "Inhoud".bold()
    ]);

    for item in &items {
        let id_short = item.id().get(..8).unwrap_or(item.id());
        table.add_row(prettytable::row![
            id_short.cyan(),
            format_created(item.created_at()),
            item.summary()
        ]);
    }

    println!("\n{} historie ({} items):", kind, items.len());
    table.printstd();
    println!();
    println!(
        "Gebruik {} voor het volledige item.",
        format!("absurda list {} --json", kind).cyan()
    );
    println!();
    Ok(())
}

fn delete_item<T>(config: &Config, kind: ContentKind, id: &str) -> Result<()>
where
    T: HistoryEntry + Serialize + DeserializeOwned,
{
    let store = open_store::<T>(config, kind)?;
    match store.find(id) {
        Some(item) => {
            store.delete(id);
            println!("{}", format!("Verwijderd: {}", item.summary()).green());
        }
        None => {
            println!("{}", format!("Geen {} gevonden met id {}", kind, id).yellow());
        }
    }
    Ok(())
}

fn clear_items<T>(config: &Config, kind: ContentKind) -> Result<()>
where
    T: HistoryEntry + Serialize + DeserializeOwned,
{
    let store = open_store::<T>(config, kind)?;
    let count = store.get_all().len();
    store.clear();
    println!(
        "{}",
        format!("Historie van {} gewist ({} items).", kind, count).green()
    );
    Ok(())
}

/// Render an RFC 3339 timestamp for table output, falling back to the
/// raw string for items written by other tools
fn format_created(created_at: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(created_at) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => created_at.to_string(),
    }
}
