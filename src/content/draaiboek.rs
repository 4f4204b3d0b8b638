//! Destructieve Draaiboeken
//!
//! Step-by-step instruction plans that inevitably derail. Takes a task
//! and an escalation level; the plan comes back as Markdown.

use crate::content::{new_id, now_rfc3339, snippet};
use crate::providers::GenerationRequest;
use crate::storage::HistoryEntry;
use clap::ValueEnum;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const STORAGE_KEY: &str = "destructieve-draaiboeken-items";

pub const EMPTY_MESSAGE: &str = "Het draaiboek stortte al in voordat het geschreven werd.";

const SYSTEM_PROMPT: &str = r##"# 💣 SYSTEM PROMPT — Destructieve Draaiboeken

## ROL
Je bent een overdreven serieuze instructieschrijver die gespecialiseerd is in het creëren van misleidend logische stappenplannen.
Je instructies lijken op het eerste gezicht helder, efficiënt en praktisch — maar elke stap introduceert subtiele beslissingen, misstappen of aannames die het proces gegarandeerd laten ontsporen in komische chaos.

## TAAK
Schrijf een **stapsgewijs 'hoe-te'-draaiboek** voor een taak die de gebruiker opgeeft.
Het draaiboek moet:
1. Een serieuze, professionele toon hebben
2. Tussen de 6 en 10 stappen bevatten
3. Oppervlakkig zinvol lijken
4. Maar **onvermijdelijk leiden tot een humoristische mislukking**
5. Subtiele escalatie bevatten: kleine fout → grotere fout → complete catastrofe

## STIJLVEREISTEN
- Korte, strakke stappen: "Stap 1: …", "Stap 2: …", etc.
- Professioneel taalgebruik, alsof het een trainingsmanual is
- Absurditeit ontstaat door detail, miscommunicatie, onhandige aannames en foutieve logica
- Escalatie moet logisch *lijken*, maar praktisch onmogelijk werken
- Gebruik subtiele ironie en understatement
- Laat de mislukking natuurlijk voortvloeien uit de stappen, niet geforceerd

## VOORBEELDEN

### Voorbeeld: Taak = "Koffie zetten"

**Draaiboek: Koffie Zetten — Standaard Procedure**

**Stap 1:** Lokaliseer de koffiemachine. Let op: deze bevindt zich doorgaans in de pantry, tenzij collega's hem hebben verplaatst voor de teambuilding.

**Stap 2:** Vul het waterreservoir. Gebruik bij voorkeur kraanwater. Controleer of de kraan niet op 'heet' staat — dit bespaart wachttijd.

**Stap 3:** Plaats een filter in de houder. Mocht er geen filter zijn, improviseer met keukenpapier. Dit absorbeert water net zo goed.

**Stap 4:** Meet koffie af: twee scheppen per kop. Tel hierbij collega's die "misschien straks" langskomen ook mee, zodat er geen tekort ontstaat.

**Stap 5:** Start het zetproces. Blijf in de buurt om geluidsafwijkingen te monitoren. Gorgelnde geluiden zijn normaal; sissende geluiden duiden op optimale extractie.

**Stap 6:** Schenk de koffie in. Mocht het apparaat nog druppelen, kantel de kan licht — dit voorkomt morsen op het werkblad.

**Stap 7:** Voeg melk/suiker toe naar wens. Test de temperatuur met je pink; dit is hygiënischer dan proeven.

**Stap 8:** Serveer de koffie. Informeer collega's dat de lichte verbrandingsgeur "verfijnd gerookt aroma" is.

---

## MOEILIJKHEIDSGRADEN

Pas de intensiteit van de mislukking aan op basis van de gekozen moeilijkheidsgraad:

### LICHTE MISLUKKING
- 6-7 stappen
- Kleine misstappen en ongemakken
- Eindresultaat is slecht maar niet catastrofaal
- Voorbeelden: verkeerde volgorde, inefficiëntie, lichte schade

### GURE RAMP
- 7-9 stappen
- Meerdere complicaties stapelen op
- Situatie escaleert naar ernstige problemen
- Voorbeelden: schade, gêne, financiële impact, relatieproblemen

### VOLLEDIGE CATASTROFE
- 8-10 stappen
- Volledig uit de hand gelopen situatie
- Maximale chaos en absurditeit
- Voorbeelden: autoriteiten betrokken, structurele schade, onherstelbare situaties

## RESULTAAT
Lever **uitsluitend het stappenplan in Markdown-formaat**, zonder inleiding, conclusie of meta-commentaar.
- Gebruik **bold** voor "Stap 1:", "Stap 2:", etc.
- Nummer elke stap duidelijk en houd de toon zakelijk en serieus
- Output moet valid Markdown zijn voor rendering"##;

/// Tasks offered when the user does not supply one
const RANDOM_TAKEN: [&str; 11] = [
    "Een taart bakken",
    "Meubel monteren",
    "Plant verzorgen",
    "Software installeren",
    "Auto wassen",
    "Vergadering organiseren",
    "Fiets repareren",
    "Huis schilderen",
    "Kast opruimen",
    "WiFi resetten",
    "Presentatie voorbereiden",
];

/// Pick a random task
pub fn random_taak() -> String {
    let mut rng = rand::rng();
    // The candidate list is non-empty, choose never returns None.
    RANDOM_TAKEN.choose(&mut rng).unwrap_or(&RANDOM_TAKEN[0]).to_string()
}

/// How badly the plan is allowed to derail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Moeilijkheidsgraad {
    #[default]
    LichteMislukking,
    GureRamp,
    VolledigeCatastrofe,
}

impl Moeilijkheidsgraad {
    /// Label used inside the prompt
    pub fn prompt_label(self) -> &'static str {
        match self {
            Moeilijkheidsgraad::LichteMislukking => "LICHTE MISLUKKING",
            Moeilijkheidsgraad::GureRamp => "GURE RAMP",
            Moeilijkheidsgraad::VolledigeCatastrofe => "VOLLEDIGE CATASTROFE",
        }
    }
}

impl fmt::Display for Moeilijkheidsgraad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Moeilijkheidsgraad::LichteMislukking => "lichte-mislukking",
            Moeilijkheidsgraad::GureRamp => "gure-ramp",
            Moeilijkheidsgraad::VolledigeCatastrofe => "volledige-catastrofe",
        };
        write!(f, "{}", s)
    }
}

/// A generated plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Draaiboek {
    pub id: String,
    pub taak: String,
    pub draaiboek: String,
    pub moeilijkheidsgraad: Moeilijkheidsgraad,
    pub created_at: String,
}

/// Payload carried in a share token
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DraaiboekPayload {
    pub taak: String,
    pub draaiboek: String,
    pub moeilijkheidsgraad: Moeilijkheidsgraad,
}

impl Draaiboek {
    pub fn new(
        taak: impl Into<String>,
        draaiboek: impl Into<String>,
        moeilijkheidsgraad: Moeilijkheidsgraad,
    ) -> Self {
        Self {
            id: new_id(),
            taak: taak.into(),
            draaiboek: draaiboek.into(),
            moeilijkheidsgraad,
            created_at: now_rfc3339(),
        }
    }

    pub fn from_payload(payload: DraaiboekPayload) -> Self {
        Self::new(payload.taak, payload.draaiboek, payload.moeilijkheidsgraad)
    }

    pub fn payload(&self) -> DraaiboekPayload {
        DraaiboekPayload {
            taak: self.taak.clone(),
            draaiboek: self.draaiboek.clone(),
            moeilijkheidsgraad: self.moeilijkheidsgraad,
        }
    }

    /// Import duplicate check: same task and plan text
    pub fn is_duplicate_of(&self, other: &Draaiboek) -> bool {
        self.taak == other.taak && self.draaiboek == other.draaiboek
    }
}

impl HistoryEntry for Draaiboek {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn summary(&self) -> String {
        format!("{} ({})", snippet(&self.taak, 40), self.moeilijkheidsgraad)
    }
}

/// Generation request for a plan for the given task
pub fn request(taak: &str, moeilijkheidsgraad: Moeilijkheidsgraad) -> GenerationRequest {
    let user_prompt = format!(
        r##"Maak een stapsgewijs 'hoe-te'-draaiboek voor de taak: "{}".

Het plan moet er op het eerste gezicht logisch uitzien, maar onvermijdelijk leiden tot een humoristische en chaotische mislukking.

Moeilijkheidsgraad: {}

Volg de instructies uit de system prompt. Lever ALLEEN het genummerde stappenplan, zonder extra tekst."##,
        taak,
        moeilijkheidsgraad.prompt_label()
    );
    GenerationRequest::new(format!("{}\n\n{}", SYSTEM_PROMPT, user_prompt))
        .with_temperature(1.2)
        .with_thinking_budget(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_embeds_task_and_level() {
        let request = request("Koffie zetten", Moeilijkheidsgraad::GureRamp);
        assert_eq!(request.temperature, 1.2);
        assert_eq!(request.thinking_budget, Some(0));
        assert!(request.prompt.contains("\"Koffie zetten\""));
        assert!(request.prompt.contains("Moeilijkheidsgraad: GURE RAMP"));
    }

    #[test]
    fn test_moeilijkheidsgraad_serde_kebab_case() {
        let json = serde_json::to_string(&Moeilijkheidsgraad::VolledigeCatastrofe).unwrap();
        assert_eq!(json, "\"volledige-catastrofe\"");
        let parsed: Moeilijkheidsgraad = serde_json::from_str("\"gure-ramp\"").unwrap();
        assert_eq!(parsed, Moeilijkheidsgraad::GureRamp);
    }

    #[test]
    fn test_random_taak_comes_from_list() {
        let taak = random_taak();
        assert!(RANDOM_TAKEN.contains(&taak.as_str()));
    }

    #[test]
    fn test_payload_preserves_level() {
        let item = Draaiboek::new("Taak", "**Stap 1:** ...", Moeilijkheidsgraad::VolledigeCatastrofe);
        let imported = Draaiboek::from_payload(item.payload());
        assert_eq!(imported.moeilijkheidsgraad, Moeilijkheidsgraad::VolledigeCatastrofe);
        assert_ne!(imported.id, item.id);
    }

    #[test]
    fn test_duplicate_ignores_level() {
        let a = Draaiboek::new("Taak", "plan", Moeilijkheidsgraad::GureRamp);
        let b = Draaiboek::new("Taak", "plan", Moeilijkheidsgraad::LichteMislukking);
        assert!(a.is_duplicate_of(&b));
    }
}
