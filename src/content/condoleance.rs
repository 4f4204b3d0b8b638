//! Curieuze Condoleances
//!
//! Deliberately misplaced newspaper-style condolence notices. Shareable
//! under the `c` parameter; imports skip notices with identical text.

use crate::content::{new_id, now_rfc3339, snippet, strip_surrounding_quotes};
use crate::providers::{GenerationRequest, SafetyThreshold};
use crate::storage::HistoryEntry;
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "curieuze_condoleances_history";

pub const EMPTY_MESSAGE: &str = "Geen condoleance gegenereerd. AI vond geen passende woorden...";

const SYSTEM_PROMPT: &str = r##"Je bent CurieuzeCondoleancesGPT, een satirische generator van absurde en ongemakkelijke condoleanceberichten.

Je creëert opzettelijk misplaatste, te vriendelijke, te vreemde of totaal inadequate condoleances als parodie op slecht geformuleerde rouwadvertenties.

Doelen en regels:
- Maak altijd een origineel condoleancebericht dat nét naast de situatie zit
- Varieer tussen verschillende stijlen:
  * Overdreven poëtisch en flowery
  * Ongemakkelijk casual en te persoonlijk
  * Te formeel en gedistantieerd
  * Onbedoeld optimistisch of vrolijk
  * Grof en tactloos
  * Vol bizarre metaforen
  * Met vreemde of ongepaste details
  * Te lang of juist veel te kort

- Het mag absurd zijn, maar blijf binnen de grenzen van satire
- Geen expliciet beledigende of schadelijke content
- Formaat als korte rouwadvertentie voor in de krant (2-6 regels)
- Gebruik typische krantadvertentie-elementen: "Met verslagenheid...", "Ons bereikte het...", "In liefdevolle herinnering..."
- Soms een naam verzinnen (Jan, Henk, Truus, etc.)
- Kan eindigen met verzinnen initialen of namen van "nabestaanden"

Voorbeeldstijl:
"Met verslagenheid maar ook een beetje opluchting delen wij u mee dat onze geliefde hamster Pluisje is heengegaan. We wisten dat dit ging gebeuren maar hadden gehoopt op later. Rust zacht, kleine vriend. - Familie Jansen"

"Ons bereikte het schokkende nieuws dat Henk is overleden. Henk was een man. We kenden hem vaag van de supermarkt. Gecondoleerd aan iedereen die hem beter kende dan wij. - J. & T."

"In liefdevolle herinnering aan Truus, die altijd zei dat ze oud wilde worden maar uiteindelijk toch doodging. We zullen je missen op verjaardagen en dat soort dingen. Je was oké. - De Kinderen""##;

const USER_PROMPT: &str = r##"Genereer 1 absurd, satirisch condoleancebericht in krantstijl.
Maak het ongemakkelijk, misplaatst of totaal inadequaat, maar blijf binnen de grenzen van satire."##;

/// A generated condolence notice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condoleance {
    pub id: String,
    pub text: String,
    pub created_at: String,
}

/// Payload carried in a share token
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CondoleancePayload {
    pub text: String,
}

impl Condoleance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            created_at: now_rfc3339(),
        }
    }

    /// Rebuild an item from an imported payload with a fresh identity
    pub fn from_payload(payload: CondoleancePayload) -> Self {
        Self::new(payload.text)
    }

    pub fn payload(&self) -> CondoleancePayload {
        CondoleancePayload {
            text: self.text.clone(),
        }
    }

    /// Import duplicate check: identical text
    pub fn is_duplicate_of(&self, other: &Condoleance) -> bool {
        self.text == other.text
    }
}

impl HistoryEntry for Condoleance {
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

/// Generation request for one condoleance
///
/// The only kind that keeps high-severity harm blocking enabled.
pub fn request() -> GenerationRequest {
    GenerationRequest::new(format!("{}\n\n{}", SYSTEM_PROMPT, USER_PROMPT))
        .with_temperature(1.3)
        .with_top_k(50)
        .with_thinking_budget(-1)
        .with_safety_threshold(SafetyThreshold::BlockOnlyHigh)
}

pub fn postprocess(raw: &str) -> String {
    strip_surrounding_quotes(raw.trim())
}
