// src/main.rs
//
// Calculatrice (trace d’expression) — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//   ou mode sans fenêtre (--touches) : joue les touches et imprime trace + affichage
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : l’index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d’entrée seulement (natif + web), journal et configuration

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod noyau;

use app::AppCalc;
use config::{Config, ErreurConfig};
use noyau::{BaseNumerique, Moteur, Touche};

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/// Calculatrice DEC / BIN / HEX avec ligne d’expression
#[derive(Parser, Debug)]
#[command(name = "calculatrice_trace", version)]
struct Args {
    /// Base de départ (dec, bin, hex) ; remplace celle du fichier de configuration
    #[arg(long, short = 'b')]
    base: Option<BaseNumerique>,

    /// Fichier de configuration TOML (défaut : ./calculatrice.toml s’il existe)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Mode sans fenêtre : touches séparées par des espaces, ex. "7 + 3 × 2 ="
    #[arg(long, short = 't')]
    touches: Option<String>,
}

#[derive(Debug, Error)]
enum ErreurLancement {
    #[error(transparent)]
    Config(#[from] ErreurConfig),
    #[error(transparent)]
    Touche(#[from] noyau::touches::ToucheInconnue),
    #[error("interface: {0}")]
    Interface(#[from] eframe::Error),
}

/* ------------------------ Journal ------------------------ */

/// RUST_LOG a priorité sur le filtre de la configuration.
fn installer_journal(filtre: &str) {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filtre));
    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/* ------------------------ Mode sans fenêtre ------------------------ */

fn jouer_touches(base: BaseNumerique, touches: &str) -> Result<(), ErreurLancement> {
    // on valide toute la suite avant de toucher au moteur
    let touches = touches
        .split_whitespace()
        .map(str::parse::<Touche>)
        .collect::<Result<Vec<_>, _>>()?;

    let mut moteur = Moteur::new(base);
    for t in touches {
        moteur.appuyer(t);
    }

    tracing::debug!(valeur = moteur.valeur(), "fin de la suite de touches");
    println!("{}", moteur.trace());
    println!("{}", moteur.affichage());
    Ok(())
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), ErreurLancement> {
    let args = Args::parse();

    // config d’abord (elle porte le filtre du journal), erreurs signalées après l’installation
    let chargement = Config::charger(args.config.as_deref());
    let filtre = chargement
        .as_ref()
        .map(|c| c.journal.clone())
        .unwrap_or_else(|_| Config::default().journal);
    installer_journal(&filtre);

    let mut config = match chargement {
        Ok(c) => c,
        Err(e) if args.config.is_some() => return Err(e.into()),
        Err(e) => {
            tracing::warn!(erreur = %e, "configuration ignorée");
            Config::default()
        }
    };
    if let Some(base) = args.base {
        config.base = base;
    }
    tracing::info!(base = %config.base, "démarrage");

    if let Some(touches) = args.touches.as_deref() {
        return jouer_touches(config.base, touches);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([340.0, 620.0])
            .with_min_inner_size([300.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(&config)))),
    )?;
    Ok(())
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
    // On laisse main() vide pour rester clair.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (configuration par défaut : pas de fichier côté web)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
