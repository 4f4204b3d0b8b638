//! Share commands: export a stored item as a token, import a token
//!
//! Tongbrekers and levenslessen have no share parameter; asking to share
//! or import one is an error. Import gives the item a fresh identity and
//! applies the per-kind duplicate rule.

use crate::config::Config;
use crate::content::condoleance::{Condoleance, CondoleancePayload};
use crate::content::cv::{Cv, CvPayload};
use crate::content::draaiboek::{Draaiboek, DraaiboekPayload};
use crate::content::excuus::{Excuus, ExcuusPayload};
use crate::content::fobie::{Fobie, FobiePayload};
use crate::content::haiku::{Haiku, HaikuPayload};
use crate::content::ContentKind;
use crate::error::{AbsurdaError, Result};
use crate::share;
use crate::storage::{HistoryEntry, HistoryStore};
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Print a share token (and link, when a base URL is configured) for a
/// stored item
pub fn run_share(config: &Config, kind: ContentKind, id: &str) -> Result<()> {
    let param = require_share_param(kind)?;
    match kind {
        ContentKind::Condoleance => share_item(config, kind, id, param, Condoleance::payload),
        ContentKind::Fobie => share_item(config, kind, id, param, Fobie::payload),
        ContentKind::Draaiboek => share_item(config, kind, id, param, Draaiboek::payload),
        ContentKind::Excuus => share_item(config, kind, id, param, Excuus::payload),
        ContentKind::Haiku => share_item(config, kind, id, param, Haiku::payload),
        ContentKind::Cv => share_item(config, kind, id, param, Cv::payload),
        // require_share_param already rejected these
        ContentKind::Tongbreker | ContentKind::Levensles => unreachable!(),
    }
}

/// Decode a token and save the item into history
pub fn run_import(config: &Config, kind: ContentKind, token: &str) -> Result<()> {
    require_share_param(kind)?;
    match kind {
        ContentKind::Condoleance => import_item::<Condoleance, CondoleancePayload>(
            config,
            kind,
            token,
            Condoleance::from_payload,
            Some(Condoleance::is_duplicate_of),
        ),
        ContentKind::Fobie => import_item::<Fobie, FobiePayload>(
            config,
            kind,
            token,
            Fobie::from_payload,
            Some(Fobie::is_duplicate_of),
        ),
        ContentKind::Draaiboek => import_item::<Draaiboek, DraaiboekPayload>(
            config,
            kind,
            token,
            Draaiboek::from_payload,
            Some(Draaiboek::is_duplicate_of),
        ),
        ContentKind::Excuus => import_item::<Excuus, ExcuusPayload>(
            config,
            kind,
            token,
            Excuus::from_payload,
            Some(Excuus::is_duplicate_of),
        ),
        // Haiku and CV imports never deduplicate.
        ContentKind::Haiku => {
            import_item::<Haiku, HaikuPayload>(config, kind, token, Haiku::from_payload, None)
        }
        ContentKind::Cv => {
            import_item::<Cv, CvPayload>(config, kind, token, Cv::from_payload, None)
        }
        ContentKind::Tongbreker | ContentKind::Levensles => unreachable!(),
    }
}

fn require_share_param(kind: ContentKind) -> Result<&'static str> {
    kind.share_param().ok_or_else(|| {
        AbsurdaError::Share(format!("{} items kunnen niet gedeeld worden", kind)).into()
    })
}

fn share_item<T, P>(
    config: &Config,
    kind: ContentKind,
    id: &str,
    param: &str,
    to_payload: fn(&T) -> P,
) -> Result<()>
where
    T: HistoryEntry + Serialize + DeserializeOwned,
    P: Serialize,
{
    let store: HistoryStore<T> =
        HistoryStore::open(kind.storage_key(), config.history.data_dir.as_deref())?;
    let item = store
        .find(id)
        .ok_or_else(|| AbsurdaError::Share(format!("Geen {} gevonden met id {}", kind, id)))?;

    let token = share::encode(&to_payload(&item))
        .ok_or_else(|| AbsurdaError::Share("Kon geen share token maken".to_string()))?;

    println!("{}", token);
    if let Some(base_url) = &config.share.base_url {
        println!("{}", share::share_url(base_url, param, &token).cyan());
    }
    Ok(())
}

fn import_item<T, P>(
    config: &Config,
    kind: ContentKind,
    token: &str,
    build: fn(P) -> T,
    is_duplicate: Option<fn(&T, &T) -> bool>,
) -> Result<()>
where
    T: HistoryEntry + Serialize + DeserializeOwned,
    P: DeserializeOwned,
{
    let payload: P = share::decode(token)
        .ok_or_else(|| AbsurdaError::Share("Ongeldige share token".to_string()))?;
    let item = build(payload);

    let store: HistoryStore<T> =
        HistoryStore::open(kind.storage_key(), config.history.data_dir.as_deref())?;
    let saved = match is_duplicate {
        Some(same) => store.save_if_new(&item, |existing| same(existing, &item)),
        None => store.save(&item),
    };

    if saved {
        let id_short = item.id().get(..8).unwrap_or(item.id());
        println!(
            "{}",
            format!("Geïmporteerd: {} ({})", item.summary(), id_short).green()
        );
    } else {
        println!(
            "{}",
            format!("Deze {} staat al in de historie, niets geïmporteerd.", kind).yellow()
        );
    }
    Ok(())
}
