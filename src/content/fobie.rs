//! Frappante Fobieën
//!
//! Absurd phobias with a name and a three-sentence description. The model
//! is asked for strict JSON; parsing tolerates markdown fences and falls
//! back to field extraction when the JSON is mangled.

use crate::content::{new_id, now_rfc3339, snippet};
use crate::providers::GenerationRequest;
use crate::storage::HistoryEntry;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "frappante_fobieen_history";

pub const EMPTY_MESSAGE: &str = "Geen fobie gegenereerd. De AI kreeg zelf angst...";

const SYSTEM_PROMPT: &str = r##"Je bent FrappanteFobieGPT, een generator van hilarische, absurde fobieën.
Je mag zowel echte als fictieve fobieën gebruiken, maar ALTIJD met een absurde, humoristische twist.

Doelen en regels:
- Maak een unieke fobie (mag zowel echt als fictief zijn)
- Bedenk of gebruik een Nederlandse naam voor de fobie (eindigt meestal op -fobie)
- Geef een beschrijving van precies 3 zinnen die uitlegt:
  1. Waar de angst precies voor is (ABSURD en overdreven)
  2. Wat de symptomen zijn (ABSURD en belachelijk)
  3. Een ABSURDE anekdote of extreem overdreven voorbeeld
- BELANGRIJK: De fobieën moeten ALTIJD humoristisch, absurd en overdreven zijn
- Bij echte fobieën: voeg een extreme absurdistische twist toe aan de beschrijving
- Bij fictieve fobieën: maak ze zo absurd en grappig mogelijk
- Houd het speels, satirisch en nooit beledigend of schadelijk

Voorbeeldstijl (fictief):
Naam: Knoppengatangst
Beschrijving: De irrationele angst dat alle knoopsgaten in je kleding spontaan zullen verdwijnen. Symptomen zijn obsessief controleren van knoopsgaten en het weigeren om shirts te dragen. Patiënten rapporteren nachtmerries waarin ze naakt door de stad lopen omdat hun knoopsgaten letterlijk zijn opgelost.

Voorbeeldstijl (echt, met absurde twist):
Naam: Anatidafobie
Beschrijving: De irrationele angst dat er ergens ter wereld een eend is die je in de gaten houdt. Symptomen zijn constant over je schouder kijken, het boycotten van alle vijvers en het schreeuwen van "IK WEE DAT JE DAAR BENT!" naar willekeurige parkbanken. Een patiënt beweerde ooit een eend drie landen te hebben zien volgen via Google Street View en diende een aanklacht in bij Interpol.

Formaat van het antwoord:
Je moet ALTIJD antwoorden in dit exacte JSON formaat (zonder markdown code blocks):
{
  "naam": "De naam van de fobie",
  "beschrijving": "Drie zinnen die de fobie beschrijven."
}"##;

const USER_PROMPT: &str = r##"Genereer 1 nieuwe, EXTREEM ABSURDE fobie volgens de regels (mag echt of fictief zijn).
Maak het zo grappig, overdreven en absurd mogelijk!
Antwoord ALLEEN in het opgegeven JSON formaat, zonder extra tekst of markdown."##;

/// A generated phobia
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fobie {
    pub id: String,
    pub naam: String,
    pub beschrijving: String,
    pub created_at: String,
}

/// Payload carried in a share token
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FobiePayload {
    pub naam: String,
    pub beschrijving: String,
}

impl Fobie {
    pub fn new(naam: impl Into<String>, beschrijving: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            naam: naam.into(),
            beschrijving: beschrijving.into(),
            created_at: now_rfc3339(),
        }
    }

    pub fn from_payload(payload: FobiePayload) -> Self {
        Self::new(payload.naam, payload.beschrijving)
    }

    pub fn payload(&self) -> FobiePayload {
        FobiePayload {
            naam: self.naam.clone(),
            beschrijving: self.beschrijving.clone(),
        }
    }

    /// Import duplicate check: same name and description
    pub fn is_duplicate_of(&self, other: &Fobie) -> bool {
        self.naam == other.naam && self.beschrijving == other.beschrijving
    }
}

impl HistoryEntry for Fobie {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn summary(&self) -> String {
        format!("{}: {}", self.naam, snippet(&self.beschrijving, 50))
    }
}

/// Generation request for one fobie
pub fn request() -> GenerationRequest {
    GenerationRequest::new(format!("{}\n\n{}", SYSTEM_PROMPT, USER_PROMPT))
        .with_temperature(1.3)
        .with_thinking_budget(0)
}

/// Parse the model output into name and description
///
/// Strips a markdown code fence if the model wrapped its JSON anyway,
/// then falls back to pulling the two fields out with a regex when the
/// JSON itself does not parse. Returns `None` when neither works.
pub fn parse(raw: &str) -> Option<FobiePayload> {
    let text = raw.trim();
    let text = strip_code_fence(text);

    if let Ok(payload) = serde_json::from_str::<FobiePayload>(&text) {
        if !payload.naam.is_empty() && !payload.beschrijving.is_empty() {
            return Some(payload);
        }
    }

    tracing::debug!("Fobie JSON did not parse, trying field extraction");
    let naam = extract_field(&text, "naam")?;
    let beschrijving = extract_field(&text, "beschrijving")?;
    Some(FobiePayload { naam, beschrijving })
}

fn strip_code_fence(text: &str) -> String {
    let re_open = Regex::new(r"(?i)^```json\n?").unwrap();
    let re_close = Regex::new(r"\n?```$").unwrap();
    let text = re_open.replace(text, "");
    re_close.replace(&text, "").to_string()
}

fn extract_field(text: &str, field: &str) -> Option<String> {
    let pattern = format!(r#"(?i)(?:{})["']?\s*:\s*["']([^"']+)["']"#, field);
    // Field names are fixed identifiers, the pattern always compiles.
    let re = Regex::new(&pattern).unwrap();
    re.captures(text).map(|c| c[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parameters() {
        let request = request();
        assert_eq!(request.temperature, 1.3);
        assert_eq!(request.top_k, 40);
        assert_eq!(request.thinking_budget, Some(0));
        assert!(request.prompt.contains("FrappanteFobieGPT"));
    }

    #[test]
    fn test_parse_clean_json() {
        let payload = parse(r#"{"naam": "Knoppengatangst", "beschrijving": "Drie zinnen."}"#)
            .expect("parse failed");
        assert_eq!(payload.naam, "Knoppengatangst");
        assert_eq!(payload.beschrijving, "Drie zinnen.");
    }

    #[test]
    fn test_parse_strips_markdown_fence() {
        let raw = "```json\n{\"naam\": \"Anatidafobie\", \"beschrijving\": \"Een eend kijkt.\"}\n```";
        let payload = parse(raw).expect("parse failed");
        assert_eq!(payload.naam, "Anatidafobie");
    }

    #[test]
    fn test_parse_falls_back_to_field_extraction() {
        // Trailing comma breaks strict JSON parsing.
        let raw = r#"{"naam": "Wifiverliesfobie", "beschrijving": "De angst dat de router je verlaat.",}"#;
        let payload = parse(raw).expect("parse failed");
        assert_eq!(payload.naam, "Wifiverliesfobie");
        assert_eq!(payload.beschrijving, "De angst dat de router je verlaat.");
    }

    #[test]
    fn test_parse_rejects_unusable_output() {
        assert!(parse("Sorry, ik kan geen fobie bedenken.").is_none());
        assert!(parse("").is_none());
        assert!(parse(r#"{"naam": "", "beschrijving": ""}"#).is_none());
    }

    #[test]
    fn test_duplicate_needs_both_fields_equal() {
        let a = Fobie::new("Naam", "Beschrijving");
        let b = Fobie::new("Naam", "Beschrijving");
        let c = Fobie::new("Naam", "Andere beschrijving");
        assert!(a.is_duplicate_of(&b));
        assert!(!a.is_duplicate_of(&c));
    }
}
