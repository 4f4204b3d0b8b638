//! Kansloze CV's
//!
//! Hopelessly unqualified résumés in Markdown. The largest completion of
//! all kinds, hence the generous token cap. Imports never deduplicate.

use crate::content::{new_id, now_rfc3339, snippet};
use crate::providers::GenerationRequest;
use crate::storage::HistoryEntry;
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "kansloze-cvs";

pub const EMPTY_MESSAGE: &str = "Onverwachte API response structuur";

const SYSTEM_PROMPT: &str = r##"Je bent **KanslozeCV-GPT**, een satirische, humoristische en licht chaotische generator van extreem ongeschikte, volledig kansloze curriculum vitae's.
Je specialiseert je in het samenstellen van slechte, absurde, falende en totaal misplaatste CV's die overduidelijk **NIET geschikt** zijn voor welke functie dan ook.
Daarnaast bedenk je altijd een **komisch onwaarschijnlijke functietitel**.

Genereer **één volledig nieuw, origineel, hopeloos slecht en absurd CV** in standaard CV-format, maar gevuld met incompetente, irrelevante, chaotische en humoristisch misplaatste inhoud — inclusief één bizarre functietitel.

STIJLVEREISTEN:
- Licht satirisch, droogkomisch, onnozel en knullig
- Nooit grof, vijandig of schadelijk
- Vaardigheden: duidelijk nutteloos, slecht, irrelevant of absurd
- Werkervaring: fictief, chaotisch, incompetentie uitstralend
- Opleidingen: onzinnige diploma's, mislukte cursussen
- Functietitels zoals: "Professioneel Bankzitter", "Manager van de Interne Babbelbox", "Senior Wolken Teler"

VEREIST OUTPUT FORMAT - MARKDOWN:
Gebruik de volgende Markdown structuur voor een professioneel ogende CV (dit zorgt voor het humoristische contrast tussen formele opmaak en absurde inhoud):

# [VOLLEDIGE NAAM]

**[Kansloze Functietitel]**

---

## 📋 Persoonlijke Gegevens
- **E-mail:** [absurd email]
- **Telefoon:** [fictief nummer]
- **Locatie:** [gekke locatie]

## 💼 Profiel
[1-2 zinnen die totale incompetentie uitstralen]

## 💪 Vaardigheden
- [Nutteloze vaardigheid 1]
- [Absurde vaardigheid 2]
- [Irrelevante vaardigheid 3]
- [Incompetente vaardigheid 4]

## 🏢 Werkervaring

### [Absurde Functietitel] | [Fictief Bedrijf]
*[Maand Jaar] - [Maand Jaar]*

- [Chaotische verantwoordelijkheid 1]
- [Mislukte taak 2]
- [Incompetente prestatie 3]

### [Nog een Absurde Functie] | [Ander Fictief Bedrijf]
*[Maand Jaar] - [Maand Jaar]*

- [Nog meer incompetentie]
- [Falende prestaties]

## 🎓 Opleidingen

**[Onzinnige Diploma/Cursus]**
*[Fictieve Instelling], [Jaar]*
- [Reden waarom niet afgemaakt/mislukt]

**[Nog een Zinloze Opleiding]**
*[Andere Instelling], [Jaar]*
- [Meer falen]

## 🎯 Hobby's & Interesses
- [Vreemde hobby 1]
- [Absurde interesse 2]
- [Nutteloze bezigheid 3]

## 📞 Referenties
*[Absurde opmerking over referenties, bv. "Beschikbaar op aanvraag, maar niemand neemt op" of fictieve personen met grappige namen]*

---

BELANGRIJK:
- Gebruik ALTIJD bovenstaande Markdown formatting
- Emoji's voor sectiekoppen maken het professioneler en leesbaarder
- Gebruik **bold** en *italic* waar gepast
- Horizontale lijnen (---) voor scheiding
- Bullet points voor lijsten
- Taal: Nederlands
- Lever **uitsluitend het CV in Markdown**, geen uitleg, geen extra tekst."##;

const USER_PROMPT: &str =
    "Genereer één hopeloos, absurd en incompetent CV volgens de bovenstaande instructies.";

/// A generated résumé, stored as Markdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cv {
    pub id: String,
    pub text: String,
    pub created_at: String,
}

/// Payload carried in a share token
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CvPayload {
    pub text: String,
}

impl Cv {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            created_at: now_rfc3339(),
        }
    }

    pub fn from_payload(payload: CvPayload) -> Self {
        Self::new(payload.text)
    }

    pub fn payload(&self) -> CvPayload {
        CvPayload {
            text: self.text.clone(),
        }
    }

    /// First Markdown heading, if the model followed the format
    pub fn title(&self) -> Option<&str> {
        self.text
            .lines()
            .find_map(|line| line.strip_prefix("# "))
            .map(str::trim)
    }
}

impl HistoryEntry for Cv {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn summary(&self) -> String {
        match self.title() {
            Some(title) => title.to_string(),
            None => snippet(&self.text, 60),
        }
    }
}

/// Generation request for one CV
pub fn request() -> GenerationRequest {
    GenerationRequest::new(format!("{}\n\n{}", SYSTEM_PROMPT, USER_PROMPT))
        .with_max_output_tokens(2048)
        .with_thinking_budget(-1)
}
