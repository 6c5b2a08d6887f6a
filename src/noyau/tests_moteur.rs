//! Tests de scénario : séquences de touches complètes sur le moteur.
//!
//! Chaque test joue une suite de symboles (séparés par des espaces), puis lit
//! les deux sorties : affichage (entrée courante) et trace (ligne d’expression).

use super::base::BaseNumerique;
use super::moteur::Moteur;
use super::touches::Touche;

fn jouer(m: &mut Moteur, touches: &str) {
    for s in touches.split_whitespace() {
        let t: Touche = s.parse().unwrap_or_else(|e| panic!("touches={touches:?} err={e}"));
        m.appuyer(t);
    }
}

fn moteur(touches: &str) -> Moteur {
    let mut m = Moteur::default();
    jouer(&mut m, touches);
    m
}

fn assert_sorties(touches: &str, affichage: &str, trace: &str) {
    let m = moteur(touches);
    assert_eq!(m.affichage(), affichage, "affichage, touches={touches:?}");
    assert_eq!(m.trace(), trace, "trace, touches={touches:?}");
}

/* ------------------------ Frappe ------------------------ */

#[test]
fn frappe_relue_dans_la_base() {
    let m = moteur("1 2 . 5");
    assert_eq!(m.affichage(), "12.5");
    assert_eq!(m.valeur(), 12.5);
}

#[test]
fn etat_initial() {
    let m = Moteur::default();
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.trace(), "");
    assert_eq!(m.base(), BaseNumerique::Decimale);
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn precedence_multiplication() {
    let m = moteur("7 + 3 × 2 =");
    assert_eq!(m.valeur(), 13.0);
    assert_eq!(m.affichage(), "13");
    assert_eq!(m.trace(), "7+3×2");
}

#[test]
fn gauche_a_droite() {
    let m = moteur("6 / 2 - 1 =");
    assert_eq!(m.valeur(), 2.0);
    assert_eq!(m.affichage(), "2");
}

#[test]
fn demarche_de_la_derniere_evaluation() {
    let m = moteur("7 + 3 × 2 =");
    let e = m.derniere_evaluation().unwrap_or_else(|| panic!("pas d’évaluation"));
    assert_eq!(e.jetons, "7 + 3 × 2");
    assert_eq!(e.rpn, "7 3 2 × +");
}

/* ------------------------ Effacer ------------------------ */

#[test]
fn effacer_depuis_n_importe_quel_etat() {
    for touches in ["", "7 +", "7 + 3 sin", "1 / 0 =", "π +/- %", "5 . 2 ×"] {
        let mut m = moteur(touches);
        jouer(&mut m, "AC");
        assert_eq!(m.affichage(), "0", "touches={touches:?}");
        assert_eq!(m.trace(), "", "touches={touches:?}");
    }
}

/* ------------------------ Unaires / constantes ------------------------ */

#[test]
fn sinus_de_30() {
    assert_sorties("3 0 sin", "0.5", "sin(30)");
    assert_sorties("6 0 cos", "0.5", "cos(60)");
}

#[test]
fn sinus_dans_une_expression() {
    let m = moteur("1 + 3 0 sin =");
    assert_eq!(m.valeur(), 1.5);
    assert_eq!(m.trace(), "1+sin(30)");
}

#[test]
fn double_oppose_idempotent() {
    let un = moteur("7 + 3");
    let deux = moteur("7 + 3 +/- +/-");
    assert_eq!(deux.affichage(), un.affichage());
    assert_eq!(deux.trace(), un.trace());

    assert_sorties("7 + 3 +/-", "-3", "7+-3");
}

#[test]
fn pourcent() {
    assert_sorties("5 0 %", "0.5", "50%");
    let m = moteur("2 0 0 × 5 0 % =");
    assert_eq!(m.valeur(), 100.0);
}

#[test]
fn constantes_immediates() {
    let m = moteur("π");
    assert_eq!(m.valeur(), std::f64::consts::PI);
    assert_eq!(m.trace(), "π");

    let m = moteur("2 × e =");
    assert_eq!(m.valeur(), 5.43656);
    assert_eq!(m.trace(), "2×e");
}

#[test]
fn chiffre_apres_constante() {
    assert_sorties("π 5", "5", "5");
    assert_sorties("7 + 3 0 sin 4", "4", "7+4");
}

/* ------------------------ Erreurs silencieuses ------------------------ */

#[test]
fn division_par_zero_rendue_en_texte() {
    assert_sorties("1 / 0 =", "inf", "1/0");
    assert_sorties("1 +/- / 0 =", "-inf", "-1/0");
    assert_sorties("0 / 0 =", "NaN", "0/0");
}

#[test]
fn infini_se_propage() {
    let m = moteur("1 / 0 + 1 =");
    assert_eq!(m.affichage(), "inf");
}

/* ------------------------ Cycle "=" ------------------------ */

#[test]
fn chiffre_apres_egal_nouvelle_expression() {
    assert_sorties("7 + 3 = 5", "5", "5");
    assert_sorties("7 + 3 = π", &std::f64::consts::PI.to_string(), "π");
    assert_sorties("7 + 3 = .", "0.", "0.");
}

#[test]
fn operateur_apres_egal_repart_de_zero() {
    let m = moteur("7 + 3 = + 2 =");
    assert_eq!(m.affichage(), "2");
    assert_eq!(m.trace(), "0+2");

    let m = moteur("7 + 3 = × 2 =");
    assert_eq!(m.valeur(), 0.0);
    assert_eq!(m.trace(), "0×2");
}

#[test]
fn unaire_apres_egal_repart_de_zero() {
    assert_sorties("7 + 3 = sin", "0", "sin(0)");
    assert_sorties("2 + 3 = +/-", "0", "");
    assert_sorties("5 0 + 5 0 = %", "0", "0%");
}

#[test]
fn egal_repete() {
    let m = moteur("7 + 3 = =");
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.trace(), "");
    assert!(m.pile().is_empty());
}

/* ------------------------ Opérateurs consécutifs ------------------------ */

#[test]
fn operateurs_consecutifs() {
    // la trace garde le dernier opérateur, la pile confirme l’affichage à chaque pression
    let m = moteur("7 + × 3");
    assert_eq!(m.pile(), ["7", "+", "7", "×"]);
    assert_eq!(m.trace(), "7×3");

    let m = moteur("7 + × 3 =");
    assert_eq!(m.valeur(), 28.0);
    assert_eq!(m.trace(), "7×3");
}

#[test]
fn pourcent_apres_operateur() {
    assert_sorties("7 + %", "0.07", "7+%");
}

#[test]
fn operateur_en_tete() {
    let m = moteur("+ 4 =");
    assert_eq!(m.valeur(), 4.0);
    assert_eq!(m.trace(), "0+4");
}

/* ------------------------ Bases ------------------------ */

#[test]
fn aller_retour_dec_bin_dec() {
    let mut m = moteur("1 2");
    m.changer_base(BaseNumerique::Binaire);
    assert_eq!(m.affichage(), "1100");
    m.changer_base(BaseNumerique::Decimale);
    assert_eq!(m.affichage(), "12");
}

#[test]
fn arithmetique_binaire() {
    let mut m = Moteur::new(BaseNumerique::Binaire);
    jouer(&mut m, "1 0 + 1 =");
    assert_eq!(m.affichage(), "11");
    assert_eq!(m.valeur(), 3.0);

    jouer(&mut m, "AC 1 / 1 0 =");
    // 1/2 tronqué
    assert_eq!(m.affichage(), "0");
}

#[test]
fn arithmetique_hexa() {
    let mut m = Moteur::new(BaseNumerique::Hexadecimale);
    jouer(&mut m, "F F + 1 =");
    assert_eq!(m.affichage(), "100");
    assert_eq!(m.trace(), "FF+1");
}

#[test]
fn touches_indisponibles_ignorees() {
    let mut m = Moteur::new(BaseNumerique::Binaire);
    jouer(&mut m, "1 2 . sin π 1");
    assert_eq!(m.affichage(), "11");
    assert_eq!(m.trace(), "11");

    let m = moteur("A 7");
    assert_eq!(m.affichage(), "7");
}

#[test]
fn base_tronque_le_registre() {
    let mut m = moteur("7 . 9");
    m.changer_base(BaseNumerique::Hexadecimale);
    assert_eq!(m.affichage(), "7");
    m.changer_base(BaseNumerique::Decimale);
    assert_eq!(m.affichage(), "7");
}
