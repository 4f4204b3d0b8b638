//! Command-line interface definition for absurda
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for generation, history management, sharing, and
//! authentication.

use crate::content::draaiboek::Moeilijkheidsgraad;
use crate::content::excuus::Lengte;
use crate::content::ContentKind;
use clap::{Parser, Subcommand};

/// absurda - AI Absurditeiten CLI
///
/// Generate absurd Dutch text artifacts with Google Gemini: tongue
/// twisters, condolences, phobias, disaster runbooks, excuses, haiku,
/// hopeless CVs, and grim life lessons.
#[derive(Parser, Debug, Clone)]
#[command(name = "absurda")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for absurda
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a new item and save it to history
    #[command(alias = "gen")]
    Generate {
        /// What to generate
        #[command(subcommand)]
        kind: GenerateCommand,
    },

    /// List the stored history for a kind, newest first
    List {
        /// Content kind
        kind: ContentKind,

        /// Print the full items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete one item from history by id (or id prefix)
    Delete {
        /// Content kind
        kind: ContentKind,

        /// Item id, a unique prefix of at least 4 characters is enough
        id: String,
    },

    /// Remove all stored history for a kind
    Clear {
        /// Content kind
        kind: ContentKind,
    },

    /// Print a share token for a stored item
    Share {
        /// Content kind
        kind: ContentKind,

        /// Item id, a unique prefix of at least 4 characters is enough
        id: String,
    },

    /// Import a shared item from a token into history
    Import {
        /// Content kind
        kind: ContentKind,

        /// Share token as produced by `share`
        token: String,
    },

    /// Manage the stored Gemini API key
    Auth {
        /// API key to store (starts with AIza)
        key: Option<String>,

        /// Show the stored key, masked
        #[arg(long, conflicts_with_all = ["key", "clear"])]
        show: bool,

        /// Remove the stored key
        #[arg(long, conflicts_with = "key")]
        clear: bool,
    },
}

/// Per-kind generation subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum GenerateCommand {
    /// An unpronounceable Dutch tongue twister
    Tongbreker,

    /// A misplaced newspaper-style condolence notice
    Condoleance,

    /// An absurd phobia with name and description
    Fobie,

    /// A step-by-step plan that inevitably derails
    Draaiboek {
        /// Task to write the plan for (random when omitted)
        #[arg(short, long)]
        taak: Option<String>,

        /// How badly the plan derails
        #[arg(short, long, value_enum, default_value_t = Moeilijkheidsgraad::LichteMislukking)]
        moeilijkheidsgraad: Moeilijkheidsgraad,
    },

    /// A barely-plausible excuse for a situation
    Excuus {
        /// Situation needing an excuse (random when omitted)
        #[arg(short, long)]
        situatie: Option<String>,

        /// Excuse length
        #[arg(short, long, value_enum, default_value_t = Lengte::Normaal)]
        lengte: Lengte,
    },

    /// A hopelessly pessimistic haiku
    Haiku {
        /// Turn the hopelessness up further
        #[arg(long)]
        extra_hopeloosheid: bool,
    },

    /// A hopelessly unqualified CV in Markdown
    Cv,

    /// A grim, quasi-wise life lesson
    Levensles,
}

impl GenerateCommand {
    /// The content kind this subcommand produces
    pub fn kind(&self) -> ContentKind {
        match self {
            GenerateCommand::Tongbreker => ContentKind::Tongbreker,
            GenerateCommand::Condoleance => ContentKind::Condoleance,
            GenerateCommand::Fobie => ContentKind::Fobie,
            GenerateCommand::Draaiboek { .. } => ContentKind::Draaiboek,
            GenerateCommand::Excuus { .. } => ContentKind::Excuus,
            GenerateCommand::Haiku { .. } => ContentKind::Haiku,
            GenerateCommand::Cv => ContentKind::Cv,
            GenerateCommand::Levensles => ContentKind::Levensles,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
