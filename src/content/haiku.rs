//! Hopeloze Haiku's
//!
//! Defeatist three-line haiku, optionally with extra hopelessness.
//! Imports never deduplicate; every shared haiku is saved as new.

use crate::content::{new_id, now_rfc3339, snippet};
use crate::providers::GenerationRequest;
use crate::storage::HistoryEntry;
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "hopeloze-haikus";

pub const EMPTY_MESSAGE: &str = "Geen haiku gegenereerd. Zelfs de AI verloor de hoop...";

const SYSTEM_PROMPT: &str = r##"# 🍂 SYSTEM PROMPT — Hopeloze Haiku's

## ROL
Je bent een melancholische, defaitistische dichter die gespecialiseerd is in hopeloos pessimistische haiku's.
Je schrijfstijl is minimalistisch, droog, subtiel absurd en doordrenkt van zachte zelfspot.

## TAAK
Genereer één **volledig nieuwe haiku** die:
1. Qua structuur **5–7–5 lettergrepen** benadert (perfect hoeft niet, maar moet wel *klinken* als een haiku).
2. Een sfeer oproept van:
   - Hopeloosheid
   - Futiel verlangen
   - Alledaagse teleurstelling
   - Lichte absurditeit
3. Poëtisch, bondig en melancholisch is.
4. Geen kwetsende of gevoelige thema's bevat.

## STIJLVEREISTEN
- Toon: zacht, uitgeblust, weemoedig, droog absurd.
- Gebruik eenvoudige taal, concrete beelden en kleine gebeurtenissen die mislukken.
- Ritme boven strikte lettergreepcontrole.
- Geen rijmdwang.
- Haiku bestaat **altijd uit drie regels**.

## VOORBEELDEN
- "Koude koffie weer
   mijn motivatie verdampt
   nog voor de ochtend"
- "Regen in mijn jas
   zelfs de wolken vertrouwen
   mij niet meer vandaag"
- "Ik mis mijn pauze
   zelfs het broodje kaas gaf op
   voordat ik begon"

## RESULTAAT
Lever uitsluitend een haiku in drie regels, zonder titel, uitleg of extra opmerkingen."##;

const EXTRA_HOPELOOSHEID_PROMPT: &str = r##"

## EXTRA HOPELOOSHEID
Verhoog de intensiteit van de melancholie en hopeloosheid. Maak het nog somberder, nog futiler, nog absurder.
De wanhoop moet voelbaar zijn in elke lettergreep."##;

const USER_PROMPT: &str = "Genereer één hopeloze haiku volgens de system prompt.";

/// A generated haiku
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Haiku {
    pub id: String,
    pub text: String,
    #[serde(rename = "extraHopeloosheid", default)]
    pub extra_hopeloosheid: bool,
    pub created_at: String,
}

/// Payload carried in a share token
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HaikuPayload {
    pub text: String,
    #[serde(rename = "extraHopeloosheid", default)]
    pub extra_hopeloosheid: bool,
}

impl Haiku {
    pub fn new(text: impl Into<String>, extra_hopeloosheid: bool) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            extra_hopeloosheid,
            created_at: now_rfc3339(),
        }
    }

    pub fn from_payload(payload: HaikuPayload) -> Self {
        Self::new(payload.text, payload.extra_hopeloosheid)
    }

    pub fn payload(&self) -> HaikuPayload {
        HaikuPayload {
            text: self.text.clone(),
            extra_hopeloosheid: self.extra_hopeloosheid,
        }
    }
}

impl HistoryEntry for Haiku {
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

/// Generation request for one haiku
pub fn request(extra_hopeloosheid: bool) -> GenerationRequest {
    let system = if extra_hopeloosheid {
        format!("{}{}", SYSTEM_PROMPT, EXTRA_HOPELOOSHEID_PROMPT)
    } else {
        SYSTEM_PROMPT.to_string()
    };
    GenerationRequest::new(format!("{}\n\n{}", system, USER_PROMPT))
        .with_temperature(1.2)
        .with_max_output_tokens(150)
        .with_thinking_budget(0)
}
