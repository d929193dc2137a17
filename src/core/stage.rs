use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color;

/// Pipeline stage of a deal. Stages are a flat classification, not a state
/// machine: any stage may move to any other stage.
///
/// Serialized ids are stable snake_case tokens; display names and
/// descriptions are the Italian labels the agency works with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    ToVisit,
    Viewed,
    InNegotiation,
    ToQuote,
    Quoted,
    Won,
    Lost,
    NoFollowUp,
}

impl Stage {
    /// All stages in presentation order (board columns, distribution charts).
    pub const ALL: [Stage; 8] = [
        Stage::ToVisit,
        Stage::Viewed,
        Stage::InNegotiation,
        Stage::ToQuote,
        Stage::Quoted,
        Stage::Won,
        Stage::Lost,
        Stage::NoFollowUp,
    ];

    /// The conversion funnel: the working progression plus the won outcome.
    /// Lost and abandoned deals are not funnel steps.
    pub const FUNNEL: [Stage; 6] = [
        Stage::ToVisit,
        Stage::Viewed,
        Stage::InNegotiation,
        Stage::ToQuote,
        Stage::Quoted,
        Stage::Won,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::ToVisit => "Da Visitare",
            Stage::Viewed => "Visionato",
            Stage::InNegotiation => "In Trattativa",
            Stage::ToQuote => "Da Quotare",
            Stage::Quoted => "Quotato",
            Stage::Won => "Acquisita",
            Stage::Lost => "Persa",
            Stage::NoFollowUp => "Senza Seguito",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Stage::ToVisit => "Cliente da incontrare ancora",
            Stage::Viewed => "Primo incontro fatto. Valutare possibili sviluppi",
            Stage::InNegotiation => "Cliente incontrato, in attesa documentazione",
            Stage::ToQuote => "Documentazione ricevuta, da preparare quotazione",
            Stage::Quoted => "Quotazioni presentate al cliente",
            Stage::Won => "Trattativa conclusa con successo",
            Stage::Lost => "Trattativa non conclusa",
            Stage::NoFollowUp => "Cliente non interessato",
        }
    }

    /// Tailwind color family backing the board column accents.
    pub fn palette_name(&self) -> &'static str {
        match self {
            Stage::ToVisit => "blue",
            Stage::Viewed => "yellow",
            Stage::InNegotiation => "orange",
            Stage::ToQuote => "purple",
            Stage::Quoted => "indigo",
            Stage::Won => "green",
            Stage::Lost => "red",
            Stage::NoFollowUp => "gray",
        }
    }

    /// Fixed hex color used by the stage charts.
    pub fn color_hex(&self) -> &'static str {
        color::tailwind_hex(self.palette_name())
    }

    /// Won, lost and no-follow-up deals are settled; everything else is
    /// still in progress.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Won | Stage::Lost | Stage::NoFollowUp)
    }

    pub fn is_positive_outcome(&self) -> bool {
        matches!(self, Stage::Won)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
