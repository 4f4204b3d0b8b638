//! Generation command
//!
//! Resolves the API key, builds the Gemini provider, runs the per-kind
//! generation flow, and saves the result to that kind's history. Upstream
//! failures are translated to the Dutch messages the user expects.

use crate::cli::GenerateCommand;
use crate::config::Config;
use crate::content::{condoleance, cv, draaiboek, excuus, fobie, haiku, levensles, tongbreker};
use crate::error::{AbsurdaError, Result};
use crate::providers::{GeminiConfig, GeminiProvider, GenerationRequest, TextGenerator};
use crate::storage::{CredentialStore, HistoryEntry, HistoryStore};
use colored::Colorize;

/// Run one generation and persist the result
pub async fn run_generate(config: &Config, command: GenerateCommand) -> Result<()> {
    let provider = build_provider(config)?;
    generate_with(&provider, config, command).await
}

/// The generation flow itself, over any [`TextGenerator`]
async fn generate_with(
    provider: &dyn TextGenerator,
    config: &Config,
    command: GenerateCommand,
) -> Result<()> {
    let data_dir = config.history.data_dir.as_deref();

    match command {
        GenerateCommand::Tongbreker => {
            let raw = generate_text(provider, &tongbreker::request(), tongbreker::EMPTY_MESSAGE)
                .await?;
            let item = tongbreker::Tongbreker::new(tongbreker::postprocess(&raw));
            println!("\n{}\n", item.text);
            let store = HistoryStore::open(tongbreker::STORAGE_KEY, data_dir)?;
            report_saved(&item, store.save(&item));
        }
        GenerateCommand::Condoleance => {
            let raw = generate_text(provider, &condoleance::request(), condoleance::EMPTY_MESSAGE)
                .await?;
            let item = condoleance::Condoleance::new(condoleance::postprocess(&raw));
            println!("\n{}\n", item.text);
            let store = HistoryStore::open(condoleance::STORAGE_KEY, data_dir)?;
            report_saved(&item, store.save(&item));
        }
        GenerateCommand::Fobie => {
            let raw =
                generate_text(provider, &fobie::request(), fobie::EMPTY_MESSAGE).await?;
            let payload = fobie::parse(&raw)
                .ok_or_else(|| AbsurdaError::Provider(fobie::EMPTY_MESSAGE.to_string()))?;
            let item = fobie::Fobie::from_payload(payload);
            println!("\n{}\n", item.naam.bold());
            println!("{}\n", item.beschrijving);
            let store = HistoryStore::open(fobie::STORAGE_KEY, data_dir)?;
            report_saved(&item, store.save(&item));
        }
        GenerateCommand::Draaiboek {
            taak,
            moeilijkheidsgraad,
        } => {
            let taak = taak.unwrap_or_else(draaiboek::random_taak);
            println!("{} {}", "Taak:".bold(), taak);
            let request = draaiboek::request(&taak, moeilijkheidsgraad);
            let plan = generate_text(provider, &request, draaiboek::EMPTY_MESSAGE).await?;
            let item = draaiboek::Draaiboek::new(taak, plan, moeilijkheidsgraad);
            println!("\n{}\n", item.draaiboek);
            let store = HistoryStore::open(draaiboek::STORAGE_KEY, data_dir)?;
            report_saved(&item, store.save(&item));
        }
        GenerateCommand::Excuus { situatie, lengte } => {
            let situatie = situatie.unwrap_or_else(excuus::random_situatie);
            println!("{} {}", "Situatie:".bold(), situatie);
            let request = excuus::request(&situatie, lengte);
            let text = generate_text(provider, &request, excuus::EMPTY_MESSAGE).await?;
            let item = excuus::Excuus::new(situatie, text, lengte);
            println!("\n{}\n", item.excuus);
            let store = HistoryStore::open(excuus::STORAGE_KEY, data_dir)?;
            report_saved(&item, store.save(&item));
        }
        GenerateCommand::Haiku { extra_hopeloosheid } => {
            let request = haiku::request(extra_hopeloosheid);
            let text = generate_text(provider, &request, haiku::EMPTY_MESSAGE).await?;
            let item = haiku::Haiku::new(text, extra_hopeloosheid);
            println!("\n{}\n", item.text);
            let store = HistoryStore::open(haiku::STORAGE_KEY, data_dir)?;
            report_saved(&item, store.save(&item));
        }
        GenerateCommand::Cv => {
            let text = generate_text(provider, &cv::request(), cv::EMPTY_MESSAGE).await?;
            let item = cv::Cv::new(text.trim().to_string());
            println!("\n{}\n", item.text);
            let store = HistoryStore::open(cv::STORAGE_KEY, data_dir)?;
            report_saved(&item, store.save(&item));
        }
        GenerateCommand::Levensles => {
            let raw = generate_text(provider, &levensles::request(), levensles::EMPTY_MESSAGE)
                .await?;
            let item = levensles::Levensles::new(levensles::postprocess(&raw));
            println!("\n{}\n", item.text);
            let store = HistoryStore::open(levensles::STORAGE_KEY, data_dir)?;
            report_saved(&item, store.save(&item));
        }
    }

    Ok(())
}

/// Build the Gemini provider from config, stored credential, or environment
fn build_provider(config: &Config) -> Result<GeminiProvider> {
    let stored = CredentialStore::open(config.history.data_dir.as_deref())?.get();
    let api_key = config
        .resolve_api_key(stored)
        .ok_or(AbsurdaError::MissingCredentials)?;

    GeminiProvider::new(GeminiConfig {
        api_key,
        model: config.provider.model.clone(),
        api_base: config.provider.api_base.clone(),
    })
}

async fn generate_text(
    provider: &dyn TextGenerator,
    request: &GenerationRequest,
    empty_message: &str,
) -> Result<String> {
    provider
        .generate(request)
        .await
        .map_err(|e| translate_error(e, empty_message))
}

/// Replace provider error messages with the user-facing Dutch ones
fn translate_error(err: anyhow::Error, empty_message: &str) -> anyhow::Error {
    let translated = match err.downcast_ref::<AbsurdaError>() {
        Some(AbsurdaError::Authentication(_)) => {
            AbsurdaError::Authentication("Ongeldige API key. Check je key en probeer opnieuw.".to_string())
        }
        Some(AbsurdaError::RateLimited(_)) => {
            AbsurdaError::RateLimited("Te veel requests. Wacht even en probeer opnieuw.".to_string())
        }
        Some(AbsurdaError::EmptyCompletion) => AbsurdaError::Provider(empty_message.to_string()),
        _ => return err,
    };
    translated.into()
}

fn report_saved<T: HistoryEntry>(item: &T, saved: bool) {
    if saved {
        println!("{} {}", "Opgeslagen:".dimmed(), short_id(item.id()).cyan());
    } else {
        println!("{}", "Let op: item kon niet worden opgeslagen.".yellow());
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
