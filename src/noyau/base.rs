// src/noyau/base.rs
//
// Couche de conversion pure : valeur <-> texte selon la base active.
// - DEC : forme décimale la plus courte (12, pas 12.0)
// - BIN / HEX : entier tronqué, signé, exact même au-delà de i64 (BigInt)
// - 0 (et -0) s’affiche toujours "0"
// - inf / -inf / NaN s’affichent tels quels dans toutes les bases
//
// Aucune erreur : un texte illisible vaut 0.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::touches::Touche;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseNumerique {
    #[default]
    #[serde(rename = "dec")]
    Decimale,
    #[serde(rename = "bin")]
    Binaire,
    #[serde(rename = "hex")]
    Hexadecimale,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("base inconnue: {0:?} (attendu: dec, bin, hex)")]
pub struct BaseInconnue(pub String);

impl BaseNumerique {
    pub const TOUTES: [BaseNumerique; 3] = [
        BaseNumerique::Decimale,
        BaseNumerique::Binaire,
        BaseNumerique::Hexadecimale,
    ];

    pub fn radix(&self) -> u32 {
        match self {
            BaseNumerique::Decimale => 10,
            BaseNumerique::Binaire => 2,
            BaseNumerique::Hexadecimale => 16,
        }
    }

    pub fn nom(&self) -> &'static str {
        match self {
            BaseNumerique::Decimale => "DEC",
            BaseNumerique::Binaire => "BIN",
            BaseNumerique::Hexadecimale => "HEX",
        }
    }

    pub fn est_entiere(&self) -> bool {
        !matches!(self, BaseNumerique::Decimale)
    }

    /// Touches disponibles dans cette base (mêmes pavés que l’appli d’origine).
    pub fn accepte(&self, touche: Touche) -> bool {
        match touche {
            Touche::Chiffre(c) => c.is_digit(self.radix()) && !c.is_ascii_lowercase(),
            Touche::Plus
            | Touche::Moins
            | Touche::Fois
            | Touche::Divise
            | Touche::Egal
            | Touche::Effacer => true,
            Touche::Point
            | Touche::Oppose
            | Touche::Pourcent
            | Touche::Sinus
            | Touche::Cosinus
            | Touche::Pi
            | Touche::E => !self.est_entiere(),
        }
    }
}

impl fmt::Display for BaseNumerique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for BaseNumerique {
    type Err = BaseInconnue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dec" | "10" => Ok(BaseNumerique::Decimale),
            "bin" | "2" => Ok(BaseNumerique::Binaire),
            "hex" | "16" => Ok(BaseNumerique::Hexadecimale),
            _ => Err(BaseInconnue(s.to_string())),
        }
    }
}

/// Texte affiché pour `valeur` dans `base`.
pub fn rendre(valeur: f64, base: BaseNumerique) -> String {
    if valeur == 0.0 {
        return "0".to_string();
    }
    if !valeur.is_finite() {
        return format!("{valeur}");
    }
    match base {
        BaseNumerique::Decimale => format!("{valeur}"),
        BaseNumerique::Binaire | BaseNumerique::Hexadecimale => {
            // trunc() d’un flottant fini est toujours représentable en BigInt
            match BigInt::from_f64(valeur.trunc()) {
                Some(n) => n.to_str_radix(base.radix()).to_uppercase(),
                None => "0".to_string(),
            }
        }
    }
}

/// Relit un texte affiché. None si le texte n’est pas un nombre dans cette base.
pub fn essayer_lire(texte: &str, base: BaseNumerique) -> Option<f64> {
    let t = texte.trim();
    if t.is_empty() {
        return None;
    }
    match base {
        BaseNumerique::Decimale => t.parse::<f64>().ok(),
        BaseNumerique::Binaire | BaseNumerique::Hexadecimale => {
            BigInt::parse_bytes(t.as_bytes(), base.radix())
                .and_then(|n| n.to_f64())
                .or_else(|| lire_non_fini(t))
        }
    }
}

/// Comme `essayer_lire`, avec repli sur 0.
pub fn lire(texte: &str, base: BaseNumerique) -> f64 {
    essayer_lire(texte, base).unwrap_or(0.0)
}

fn lire_non_fini(t: &str) -> Option<f64> {
    match t {
        "inf" => Some(f64::INFINITY),
        "-inf" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ => None,
    }
}
