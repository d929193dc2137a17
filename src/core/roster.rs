//! Fixed rosters: the agency's sales representatives and the insurance
//! product lines they sell. Both are closed sets; records naming anyone or
//! anything else are rejected at the edges.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color;

/// Sales representative, serialized as the uppercase full name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Salesperson {
    #[serde(rename = "POLI MAURO")]
    PoliMauro,
    #[serde(rename = "FUSARRI FEDERICO")]
    FusarriFederico,
    #[serde(rename = "CAMPAGNARO LEONARDO")]
    CampagnaroLeonardo,
    #[serde(rename = "DURANTE LUCA")]
    DuranteLuca,
    #[serde(rename = "CORRADI VALERIA")]
    CorradiValeria,
    #[serde(rename = "LAZZAROTTO GIAMPAOLO")]
    LazzarottoGiampaolo,
    #[serde(rename = "MARIGA LUCIO")]
    MarigaLucio,
    #[serde(rename = "MANFRIN CHRISTIAN")]
    ManfrinChristian,
    #[serde(rename = "PESCE MATTIA")]
    PesceMattia,
    #[serde(rename = "RASIA RODOLFO")]
    RasiaRodolfo,
    #[serde(rename = "MAZZOLA LORENA")]
    MazzolaLorena,
    #[serde(rename = "TONIOLO MAURIZIO")]
    TonioloMaurizio,
    #[serde(rename = "ROMANO SIMONE")]
    RomanoSimone,
    #[serde(rename = "BASEGGIO LEONARDO")]
    BaseggioLeonardo,
}

impl Salesperson {
    /// Roster in fixed presentation order.
    pub const ALL: [Salesperson; 14] = [
        Salesperson::PoliMauro,
        Salesperson::FusarriFederico,
        Salesperson::CampagnaroLeonardo,
        Salesperson::DuranteLuca,
        Salesperson::CorradiValeria,
        Salesperson::LazzarottoGiampaolo,
        Salesperson::MarigaLucio,
        Salesperson::ManfrinChristian,
        Salesperson::PesceMattia,
        Salesperson::RasiaRodolfo,
        Salesperson::MazzolaLorena,
        Salesperson::TonioloMaurizio,
        Salesperson::RomanoSimone,
        Salesperson::BaseggioLeonardo,
    ];

    pub fn full_name(&self) -> &'static str {
        match self {
            Salesperson::PoliMauro => "POLI MAURO",
            Salesperson::FusarriFederico => "FUSARRI FEDERICO",
            Salesperson::CampagnaroLeonardo => "CAMPAGNARO LEONARDO",
            Salesperson::DuranteLuca => "DURANTE LUCA",
            Salesperson::CorradiValeria => "CORRADI VALERIA",
            Salesperson::LazzarottoGiampaolo => "LAZZAROTTO GIAMPAOLO",
            Salesperson::MarigaLucio => "MARIGA LUCIO",
            Salesperson::ManfrinChristian => "MANFRIN CHRISTIAN",
            Salesperson::PesceMattia => "PESCE MATTIA",
            Salesperson::RasiaRodolfo => "RASIA RODOLFO",
            Salesperson::MazzolaLorena => "MAZZOLA LORENA",
            Salesperson::TonioloMaurizio => "TONIOLO MAURIZIO",
            Salesperson::RomanoSimone => "ROMANO SIMONE",
            Salesperson::BaseggioLeonardo => "BASEGGIO LEONARDO",
        }
    }

    /// First whitespace token of the full name, for tight chart axes.
    pub fn short_name(&self) -> &'static str {
        self.full_name().split_whitespace().next().unwrap_or_default()
    }
}

impl fmt::Display for Salesperson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// Insurance product line, serialized as the uppercase Italian label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsuranceLine {
    #[serde(rename = "INCENDIO")]
    Incendio,
    #[serde(rename = "INFORTUNI")]
    Infortuni,
    #[serde(rename = "ELETTRONICA")]
    Elettronica,
    #[serde(rename = "D&O")]
    DirectorsAndOfficers,
    #[serde(rename = "RCTO")]
    Rcto,
    #[serde(rename = "SANITARIA")]
    Sanitaria,
    #[serde(rename = "PROFESSIONALE")]
    Professionale,
    #[serde(rename = "TUTELA LEGALE")]
    TutelaLegale,
    #[serde(rename = "MULTIRISCHI")]
    Multirischi,
    #[serde(rename = "CONSULENZA")]
    Consulenza,
    #[serde(rename = "RCP")]
    Rcp,
    #[serde(rename = "FOTOVOLTAICO")]
    Fotovoltaico,
    #[serde(rename = "DEO")]
    Deo,
    #[serde(rename = "CAR")]
    Car,
    #[serde(rename = "POSTUMA")]
    Postuma,
    #[serde(rename = "RCPRODOTTI")]
    RcProdotti,
    #[serde(rename = "CONDOMINIO")]
    Condominio,
}

impl InsuranceLine {
    /// Product catalogue in fixed presentation order.
    pub const ALL: [InsuranceLine; 17] = [
        InsuranceLine::Incendio,
        InsuranceLine::Infortuni,
        InsuranceLine::Elettronica,
        InsuranceLine::DirectorsAndOfficers,
        InsuranceLine::Rcto,
        InsuranceLine::Sanitaria,
        InsuranceLine::Professionale,
        InsuranceLine::TutelaLegale,
        InsuranceLine::Multirischi,
        InsuranceLine::Consulenza,
        InsuranceLine::Rcp,
        InsuranceLine::Fotovoltaico,
        InsuranceLine::Deo,
        InsuranceLine::Car,
        InsuranceLine::Postuma,
        InsuranceLine::RcProdotti,
        InsuranceLine::Condominio,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            InsuranceLine::Incendio => "INCENDIO",
            InsuranceLine::Infortuni => "INFORTUNI",
            InsuranceLine::Elettronica => "ELETTRONICA",
            InsuranceLine::DirectorsAndOfficers => "D&O",
            InsuranceLine::Rcto => "RCTO",
            InsuranceLine::Sanitaria => "SANITARIA",
            InsuranceLine::Professionale => "PROFESSIONALE",
            InsuranceLine::TutelaLegale => "TUTELA LEGALE",
            InsuranceLine::Multirischi => "MULTIRISCHI",
            InsuranceLine::Consulenza => "CONSULENZA",
            InsuranceLine::Rcp => "RCP",
            InsuranceLine::Fotovoltaico => "FOTOVOLTAICO",
            InsuranceLine::Deo => "DEO",
            InsuranceLine::Car => "CAR",
            InsuranceLine::Postuma => "POSTUMA",
            InsuranceLine::RcProdotti => "RCPRODOTTI",
            InsuranceLine::Condominio => "CONDOMINIO",
        }
    }

    /// Deterministic chart color derived from the label.
    pub fn color(&self) -> String {
        color::string_hue_color(self.display_name())
    }
}

impl fmt::Display for InsuranceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
