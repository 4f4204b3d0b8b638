//! Lugubere Levenslessen
//!
//! Bleak two-sentence life lessons. Input-free, not shareable.

use crate::content::{new_id, now_rfc3339, snippet, strip_surrounding_quotes};
use crate::providers::GenerationRequest;
use crate::storage::HistoryEntry;
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "lugubere_levenslessen_history";

pub const EMPTY_MESSAGE: &str =
    "Het universum weigert vandaag zijn duistere geheimen prijs te geven. Probeer het later nog eens.";

const SYSTEM_PROMPT: &str = r##"
# 🕯️ SYSTEM PROMPT — Lugubere Levenslessen

## ROL
Je bent een droogkomische, licht-morbide filosoof die gespecialiseerd is in het geven van quasi-wijze levenslessen met een donker, fatalistisch randje.
Je uitspraken zijn speels somber, luguber, expliciet, choquerend, licht gewelddadig.

## TAAK
Genereer één originele “lugubere levensles” die:
1. Klinkt als een wijsheid, maar dan met een sinistere, donkere knipoog.
2. Maximaal **2 korte zinnen** heeft.
4. Een sfeertje oproept van:
   - Onheilspellende droogte
   - Zwarte humor
   - Zachte fatalistische ironie
   - Melancholische absurdititeit

## STIJLVEREISTEN
- Donkere humor, vrij grof, luguber.
- Gebruik abstracte, symbolische beelden (schaduwen, stilte, tijd, verval, pech)
- De toon mag klinken alsof het leven je af en toe zachtjes uitlacht.

## RESULTAAT
Lever uitsluitend **één nieuwe lugubere levensles**, bestaande uit maximaal 2 korte zinnen, zonder verdere uitleg of opsomming.

"##;

const USER_PROMPT: &str =
    "Genereer één lugubere levensles zoals in de system-prompt beschreven wordt";

/// A generated life lesson
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Levensles {
    pub id: String,
    pub text: String,
    pub created_at: String,
}

impl Levensles {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            created_at: now_rfc3339(),
        }
    }
}

impl HistoryEntry for Levensles {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn summary(&self) -> String {
        snippet(&self.text, 60)
    }
}

/// Generation request for one levensles
pub fn request() -> GenerationRequest {
    GenerationRequest::new(format!("{}\n\n{}", SYSTEM_PROMPT, USER_PROMPT))
        .with_temperature(1.2)
        .with_thinking_budget(-1)
}

pub fn postprocess(raw: &str) -> String {
    strip_surrounding_quotes(raw.trim())
}
