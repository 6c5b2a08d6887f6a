// src/noyau/trig.rs
//
// Trigonométrie en degrés + arrondi fixe à 5 décimales.

use std::f64::consts;

/// Nombre de décimales gardées après sin/cos et après "=".
pub const DECIMALES: i32 = 5;

pub const PI: f64 = consts::PI;
pub const E: f64 = consts::E;

/// round(x · 10^5) / 10^5 (demi-unité arrondie loin de zéro).
/// inf et NaN traversent tels quels.
pub fn arrondir(x: f64) -> f64 {
    let echelle = 10f64.powi(DECIMALES);
    (x * echelle).round() / echelle
}

pub fn sin_degres(x: f64) -> f64 {
    arrondir((x * PI / 180.0).sin())
}

pub fn cos_degres(x: f64) -> f64 {
    arrondir((x * PI / 180.0).cos())
}
