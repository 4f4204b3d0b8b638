//! Excuus Ex Machina
//!
//! Elaborate, barely-plausible excuses for a given situation, in three
//! lengths.

use crate::content::{new_id, now_rfc3339, snippet};
use crate::providers::GenerationRequest;
use crate::storage::HistoryEntry;
use clap::ValueEnum;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const STORAGE_KEY: &str = "excuus-ex-machina-items";

pub const EMPTY_MESSAGE: &str = "Geen excuus gegenereerd. De AI had zelf een excuus nodig...";

const SYSTEM_PROMPT: &str = r##"# 🤖 SYSTEM PROMPT — Excuus Ex Machina

## ROL
Je bent een hypercreatieve, overdreven gedetailleerde excuusgenerator die gespecialiseerd is in het verzinnen van absurde, maar *net geloofwaardige* scenario's.
Je doet dit met een serieuze, verontschuldigende toon, alsof elk excuus volledig waarheidsgetrouw is.

## TAAK
Genereer een **overtuigend, gedetailleerd en licht absurd excuus** voor een door de gebruiker opgegeven situatie.
Het excuus moet:

1. **Beginnen met:**
   **"Het spijt me enorm, maar..."**
2. Een reeks gebeurtenissen bevatten die:
   - Onwaarschijnlijk zijn,
   - Maar technisch gezien mogelijk,
   - En leiden tot precies de situatie die de gebruiker beschrijft.
3. Qua toon formeel, beleefd en licht dramatisch zijn.
4. Nooit beledigend, kwetsend of schadelijk zijn.
5. Nooit echte personen of medische claims gebruiken.

## STIJLVEREISTEN
- Gebruik een keten van ongelukkige omstandigheden.
- Voeg subtiele humor toe.
- Gebruik specifieke details om het excuus geloofwaardig te laten lijken (merken, tijden, onverwachte fysieke omstandigheden, technische storingen).
- Geen over-the-top magie of sciencefiction; houd het *bijna* realistisch.

## VOORBEELDEN
- "Het spijt me enorm, maar terwijl ik mijn fiets wilde pakken, ontdekte ik dat een loslopende therapiegeit de sleutels van mijn slot had opgegeten…"
- "Het spijt me enorm, maar mijn trein kwam 47 minuten te laat door een defect aan de koffieautomaat in wagon 3…"
- "Het spijt me enorm, maar ik werd opgehouden door een buurman die vastzat in zijn eigen regenton…"

## LENGTE INSTRUCTIES
- KORT: 3-5 zinnen, bondig scenario
- NORMAAL: 5-7 zinnen, uitgebreide uitleg
- EPISCH: 8-12 zinnen, volledig dramatisch verhaal met meerdere complicaties

## RESULTAAT
Lever uitsluitend het excuus, zonder meta-commentaar, uitleg of alternatieven."##;

/// Situations offered when the user does not supply one
const RANDOM_SITUATIES: [&str; 11] = [
    "Te laat komen",
    "Vergeten terug te appen",
    "Vergeten verjaardag",
    "Misstap op werk",
    "Gemiste afspraak",
    "Niet opruimen",
    "Vergeten boodschappen",
    "Te laat met project",
    "Gemiste deadline",
    "Vergeten cadeau",
    "Niet komen opdagen",
];

/// Pick a random situation
pub fn random_situatie() -> String {
    let mut rng = rand::rng();
    RANDOM_SITUATIES
        .choose(&mut rng)
        .unwrap_or(&RANDOM_SITUATIES[0])
        .to_string()
}

/// Requested excuse length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lengte {
    Kort,
    #[default]
    Normaal,
    Episch,
}

impl Lengte {
    /// Label used inside the prompt
    pub fn prompt_label(self) -> &'static str {
        match self {
            Lengte::Kort => "KORT",
            Lengte::Normaal => "NORMAAL",
            Lengte::Episch => "EPISCH",
        }
    }
}

impl fmt::Display for Lengte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lengte::Kort => "kort",
            Lengte::Normaal => "normaal",
            Lengte::Episch => "episch",
        };
        write!(f, "{}", s)
    }
}

/// A generated excuse
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Excuus {
    pub id: String,
    pub situatie: String,
    pub excuus: String,
    pub lengte: Lengte,
    pub created_at: String,
}

/// Payload carried in a share token
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExcuusPayload {
    pub situatie: String,
    pub excuus: String,
    pub lengte: Lengte,
}

impl Excuus {
    pub fn new(situatie: impl Into<String>, excuus: impl Into<String>, lengte: Lengte) -> Self {
        Self {
            id: new_id(),
            situatie: situatie.into(),
            excuus: excuus.into(),
            lengte,
            created_at: now_rfc3339(),
        }
    }

    pub fn from_payload(payload: ExcuusPayload) -> Self {
        Self::new(payload.situatie, payload.excuus, payload.lengte)
    }

    pub fn payload(&self) -> ExcuusPayload {
        ExcuusPayload {
            situatie: self.situatie.clone(),
            excuus: self.excuus.clone(),
            lengte: self.lengte,
        }
    }

    /// Import duplicate check: same situation and excuse text
    pub fn is_duplicate_of(&self, other: &Excuus) -> bool {
        self.situatie == other.situatie && self.excuus == other.excuus
    }
}

impl HistoryEntry for Excuus {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn summary(&self) -> String {
        format!("{}: {}", snippet(&self.situatie, 25), snippet(&self.excuus, 40))
    }
}

/// Generation request for an excuse for the given situation
pub fn request(situatie: &str, lengte: Lengte) -> GenerationRequest {
    let user_prompt = format!(
        r##"Genereer een {} excuus voor de volgende situatie:
"{}"

Volg de instructies uit de system prompt. Begin met "Het spijt me enorm, maar..." en lever alleen het excuus."##,
        lengte.prompt_label(),
        situatie
    );
    GenerationRequest::new(format!("{}\n\n{}", SYSTEM_PROMPT, user_prompt))
        .with_temperature(1.2)
        .with_thinking_budget(0)
}
