//! Tering Tongbrekers
//!
//! Unpronounceable Dutch tongue twisters. Input-free, not shareable.

use crate::content::{new_id, now_rfc3339, snippet, strip_surrounding_quotes};
use crate::providers::GenerationRequest;
use crate::storage::HistoryEntry;
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "tering_tongbrekers_history";

/// Shown when the model returns a usable envelope without text
pub const EMPTY_MESSAGE: &str =
    "Geen tongbreker gegenereerd. AI struikelde over zijn eigen tong...";

const SYSTEM_PROMPT: &str = r##"Je bent TeringTongbrekerGPT, een generator van extreem moeilijke, absurde, humoristische tongbrekers in het Nederlands.
Je stijl is overdreven ingewikkeld, ritmisch, allitererend en vol bizarre combinaties van klanken.

Doelen en regels:
- Maak altijd een volledig originele tongbreker.
- Gebruik intense alliteraties, rijm, klankherhaling, rare woordcombinaties, klinkerwisselingen, struikelzinnen en ritmische onzinregels.
- De tongbreker moet zeer moeilijk uit te spreken zijn, maar nog net mogelijk voor een mens.
- Houd de inhoud speels, humoristisch en absurd — nooit beledigend, gevaarlijk of expliciet.
- Lever standaard 1 tongbreker van 1–3 zinnen per verzoek.
- Geen uitleg, alleen de tongbreker.

Formaat van het antwoord:
Alleen de tongbreker, zonder verdere toelichting.

Voorbeeldstijl:
"De trillende trompetterende trol trapte twaalf tintelende turnsters tegen drie tikkende tinnen theepotten."
"Kletsnat knisperde de knarsende knuffelkrab door krioelende kratjaskrekels."
"Sissende slappe slakken slikten scheef schuifelende schimmelchips.""##;

const USER_PROMPT: &str = r##"Genereer 1 extreem moeilijke, originele Nederlandse tongbreker.
Moeilijkheid: onuitspreekbaar."##;

/// A generated tongue twister
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tongbreker {
    pub id: String,
    pub text: String,
    pub created_at: String,
}

impl Tongbreker {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            created_at: now_rfc3339(),
        }
    }
}

impl HistoryEntry for Tongbreker {
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

/// Generation request for one tongbreker
pub fn request() -> GenerationRequest {
    GenerationRequest::new(format!("{}\n\n{}", SYSTEM_PROMPT, USER_PROMPT))
        .with_temperature(1.2)
        .with_thinking_budget(0)
}

/// Clean up raw model output
pub fn postprocess(raw: &str) -> String {
    strip_surrounding_quotes(raw.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parameters() {
        let request = request();
        assert_eq!(request.temperature, 1.2);
        assert_eq!(request.top_k, 40);
        assert_eq!(request.top_p, 0.95);
        assert_eq!(request.thinking_budget, Some(0));
        assert!(request.max_output_tokens.is_none());
        assert!(request.prompt.contains("TeringTongbrekerGPT"));
        assert!(request.prompt.ends_with("Moeilijkheid: onuitspreekbaar."));
    }

    #[test]
    fn test_postprocess_strips_quotes() {
        assert_eq!(
            postprocess("  \"De trol trapte twaalf turnsters.\"  "),
            "De trol trapte twaalf turnsters."
        );
    }

    #[test]
    fn test_new_item_has_identity() {
        let item = Tongbreker::new("tekst");
        assert!(!item.id.is_empty());
        assert!(item.created_at.ends_with('Z'));
        assert_ne!(item.id, Tongbreker::new("tekst").id);
    }

    #[test]
    fn test_serde_field_names() {
        let item = Tongbreker::new("tekst");
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("text").is_some());
        assert!(json.get("created_at").is_some());
    }
}
