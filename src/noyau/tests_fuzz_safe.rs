//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur avec des suites de touches aléatoires sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants clés après CHAQUE pression :
//!   - la trace n’a jamais deux opérateurs binaires consécutifs
//!   - la trace ne commence jamais par un opérateur nu (seul un signe "-" est permis)
//!   - chaque "sin(" / "cos(" est refermé
//!   - l’affichage se relit toujours (nombre, ou inf / NaN)

use std::time::{Duration, Instant};

use super::base::{essayer_lire, BaseNumerique};
use super::moteur::Moteur;
use super::touches::Touche;
use super::trace::{est_operateur, signe_avant};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

const SYMBOLES: [&str; 29] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C", "D", "E", "F", ".", "+",
    "-", "×", "/", "=", "AC", "+/-", "%", "sin", "cos", "π", "e",
];

fn gen_touche(rng: &mut Rng) -> Touche {
    // AC rare, sinon le fuzz ne construit jamais rien de long
    let mut i = rng.pick(SYMBOLES.len() as u32) as usize;
    if SYMBOLES[i] == "AC" && rng.pick(4) != 0 {
        i = rng.pick(10) as usize;
    }
    SYMBOLES[i]
        .parse()
        .unwrap_or_else(|e| panic!("symbole du fuzz invalide: {e}"))
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants_trace(m: &Moteur, historique: &[Touche]) {
    let trace = m.trace();
    let jetons: Vec<String> = split_jetons(&trace);

    if let Some(premier) = jetons.first() {
        assert!(
            !est_operateur(premier) || premier == "-",
            "opérateur nu en tête: trace={trace:?} touches={historique:?}"
        );
    }

    for i in 1..jetons.len() {
        if est_operateur(&jetons[i]) && est_operateur(&jetons[i - 1]) {
            // le second ne peut être qu’un signe
            assert!(
                jetons[i] == "-" && signe_avant(&jetons, i + 1),
                "deux opérateurs consécutifs: trace={trace:?} touches={historique:?}"
            );
        }
    }

    let ouvertes = trace.matches('(').count();
    let fermees = trace.matches(')').count();
    assert_eq!(ouvertes, fermees, "parenthèses: trace={trace:?} touches={historique:?}");
}

/// Découpe grossière : un opérateur par caractère, le reste regroupé.
/// Suffit pour vérifier l’alternance (les opérateurs sont toujours des jetons seuls).
fn split_jetons(trace: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut profondeur = 0usize;
    let mut courant = String::new();
    for c in trace.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => profondeur = profondeur.saturating_sub(1),
            _ => {}
        }
        let s = c.to_string();
        if profondeur == 0 && est_operateur(&s) {
            if !courant.is_empty() {
                out.push(std::mem::take(&mut courant));
            }
            out.push(s);
        } else {
            courant.push(c);
        }
    }
    if !courant.is_empty() {
        out.push(courant);
    }
    out
}

fn check_affichage_relu(m: &Moteur, historique: &[Touche]) {
    let aff = m.affichage();
    assert!(
        essayer_lire(aff, m.base()).is_some(),
        "affichage illisible: {aff:?} base={} touches={historique:?}",
        m.base()
    );
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_par_pression() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for base in BaseNumerique::TOUTES {
        for _ in 0..60 {
            budget(t0, max);

            let mut m = Moteur::new(base);
            let mut historique: Vec<Touche> = Vec::new();

            for _ in 0..40 {
                let t = gen_touche(&mut rng);
                historique.push(t);
                m.appuyer(t);
                check_invariants_trace(&m, &historique);
                check_affichage_relu(&m, &historique);
            }
        }
    }
}

#[test]
fn fuzz_safe_effacer_remet_tout_a_zero() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..80 {
        budget(t0, max);

        let mut m = Moteur::default();
        let n = 1 + rng.pick(30);
        for _ in 0..n {
            m.appuyer(gen_touche(&mut rng));
        }
        m.appuyer(Touche::Effacer);

        assert_eq!(m.affichage(), "0");
        assert_eq!(m.trace(), "");
    }
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes touches => mêmes sorties
    let jouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut m = Moteur::default();
        let mut sorties = Vec::new();
        for _ in 0..200 {
            m.appuyer(gen_touche(&mut rng));
            sorties.push((m.affichage().to_string(), m.trace()));
        }
        sorties
    };
    assert_eq!(jouer(42), jouer(42));
}
