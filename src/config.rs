//! Configuration (TOML, optionnelle)
//!
//! Fichier `calculatrice.toml` dans le répertoire courant, ou chemin donné par `--config` :
//!
//! ```toml
//! base = "hex"        # dec | bin | hex
//! journal = "debug"   # filtre tracing (RUST_LOG a priorité)
//! ```
//!
//! Fichier par défaut absent => valeurs par défaut. Fichier explicite illisible => erreur.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::noyau::BaseNumerique;

/// Nom du fichier cherché dans le répertoire courant.
pub const FICHIER_DEFAUT: &str = "calculatrice.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub base: BaseNumerique,
    pub journal: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: BaseNumerique::Decimale,
            journal: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin}: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("syntaxe de {chemin}: {source}")]
    Syntaxe {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    pub fn depuis_toml(texte: &str, chemin: &Path) -> Result<Self, ErreurConfig> {
        toml::from_str(texte).map_err(|source| ErreurConfig::Syntaxe {
            chemin: chemin.to_path_buf(),
            source,
        })
    }

    /// Charge `explicite` s’il est donné, sinon le fichier par défaut s’il existe.
    pub fn charger(explicite: Option<&Path>) -> Result<Self, ErreurConfig> {
        let chemin = match explicite {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(FICHIER_DEFAUT);
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };

        let texte = std::fs::read_to_string(&chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.clone(),
            source,
        })?;
        Self::depuis_toml(&texte, &chemin)
    }
}
