//! Tests scientifiques (campagne) : exactitude + invariants + limites contrôlées.
//!
//! But : vérifier π sans faire chauffer la machine.
//! - oracle indépendant : Machin en entiers scalés (atan(1/5), atan(1/239))
//! - oracle exact : T/Q == somme rationnelle des N premiers termes (num-rational)
//! - digits bornés, budget temps global
//!
//! Notes :
//! - Machin garde 10 décimales d’extra puis tronque : exact hors queue “0000000000”/“9999999999”,
//!   ce qui n’arrive pas dans les 1000 premières décimales de π.

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurPi;
use super::eval::{calculer_pi, compute_pi};
use super::feuille::{feuille, A, B, C};
use super::fusion::{fusionner, Plage};
use super::lecture::{pow10, scaled_to_decimal};
use super::scission::{scinder_sequentiel, ParametresScission};

/// 200 premières décimales de π.
pub(super) const PI_200: &str = "3.\
14159265358979323846264338327950288419716939937510\
58209749445923078164062862089986280348253421170679\
82148086513282306647093844609550582231725359408128\
48111745028410270193852110555964462294895493038196";

/* ------------------------ Oracle Machin (entiers scalés) ------------------------ */

/// arctan(1/q) en entier scalé (troncature) via série:
/// atan(z) = z - z^3/3 + z^5/5 - ...
fn arctan_inv_q_scaled(q: i64, scale: &BigInt) -> BigInt {
    let q = BigInt::from(q);
    let q2 = &q * &q;

    let mut k: usize = 0;
    let mut q_pow = q.clone();
    let mut sum = BigInt::zero();

    loop {
        let term = scale / (&q_pow * BigInt::from(2 * k + 1));
        if term.is_zero() {
            break;
        }
        if k % 2 == 0 {
            sum += &term;
        } else {
            sum -= &term;
        }
        q_pow *= &q2;
        k += 1;
    }

    sum
}

/// π = 16·atan(1/5) − 4·atan(1/239), tronqué à `digits` décimales.
pub(super) fn pi_machin(digits: usize) -> String {
    let extra = 10usize;
    let scale = pow10(digits + extra);

    let a = arctan_inv_q_scaled(5, &scale);
    let b = arctan_inv_q_scaled(239, &scale);

    let pi = (BigInt::from(16) * a - BigInt::from(4) * b) / pow10(extra);
    scaled_to_decimal(pi, digits)
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn prefixe_commun(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}

/* ------------------------ Exactitude ------------------------ */

#[test]
fn sci_cinquante_decimales() {
    assert_eq!(
        compute_pi(50).unwrap(),
        "3.14159265358979323846264338327950288419716939937510"
    );
}

#[test]
fn sci_deux_cents_decimales() {
    assert_eq!(compute_pi(200).unwrap(), PI_200);
    assert_eq!(pi_machin(200), PI_200);
}

#[test]
fn sci_concordance_machin() {
    let t0 = Instant::now();
    let max = Duration::from_secs(30);

    let reference = pi_machin(1000);
    for d in (1..=1000usize).step_by(37).chain([999, 1000]) {
        let pi = compute_pi(d as i64).unwrap();
        assert_eq!(pi, reference[..d + 2], "digits={d}");
        budget(t0, max);
    }
}

/* ------------------------ Format ------------------------ */

#[test]
fn sci_longueur_partie_fractionnaire() {
    for d in 1..=120usize {
        let pi = compute_pi(d as i64).unwrap();
        let (ent, frac) = pi.split_once('.').expect("point décimal");
        assert_eq!(ent, "3", "digits={d}");
        assert_eq!(frac.len(), d, "digits={d}");
        assert!(frac.bytes().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn sci_bornes() {
    assert_eq!(compute_pi(1).unwrap(), "3.1");
    assert_eq!(compute_pi(2).unwrap(), "3.14");
    assert_eq!(compute_pi(0), Err(ErreurPi::DigitsInvalides(0)));
    assert_eq!(compute_pi(-42), Err(ErreurPi::DigitsInvalides(-42)));
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_determinisme_threads_et_seuil() {
    let reference = compute_pi(700).unwrap();
    assert_eq!(compute_pi(700).unwrap(), reference);

    for (seuil, taches) in [(1u64, 1usize), (1, 4), (5, 2), (64, 3), (1000, 8)] {
        let r = calculer_pi(700, &ParametresScission { seuil, taches }).unwrap();
        assert_eq!(r.texte, reference, "seuil={seuil} taches={taches}");
    }
}

/* ------------------------ Précision monotone ------------------------ */

#[test]
fn sci_precision_monotone() {
    let reference = pi_machin(400);
    let mut avant = 0usize;
    for d in 1..=400usize {
        let pi = compute_pi(d as i64).unwrap();
        let ok = prefixe_commun(&pi, &reference);
        assert!(ok >= avant, "digits={d}: {ok} < {avant}");
        avant = ok;
    }
}

/* ------------------------ Oracle exact : T/Q ------------------------ */

fn factorielle(n: u64) -> BigInt {
    (1..=n).fold(BigInt::from(1), |acc, i| acc * i)
}

/// Σ_{k<N} (−1)^k (6k)! (A + B·k) / ((3k)! (k!)³ C^{3k})
fn somme_exacte(n: u64) -> BigRational {
    let c3 = BigInt::from(C).pow(3);
    (0..n).fold(BigRational::zero(), |acc, k| {
        let mut num = factorielle(6 * k) * (BigInt::from(B) * k + A);
        if k % 2 == 1 {
            num = -num;
        }
        let den = factorielle(3 * k) * factorielle(k).pow(3) * c3.pow(k as u32);
        acc + BigRational::new(num, den)
    })
}

#[test]
fn sci_t_sur_q_egale_somme_serie() {
    for n in [1u64, 2, 3, 7, 12] {
        let r = scinder_sequentiel(Plage::new(0, n).unwrap());
        assert_eq!(
            BigRational::new(r.t.clone(), r.q.clone()),
            somme_exacte(n),
            "N={n}"
        );
    }
}

/* ------------------------ Fusion : parenthésages ------------------------ */

#[test]
fn sci_fusion_decoupee_egale_directe() {
    for (a, m, b) in [(0u64, 1u64, 2u64), (0, 3, 10), (2, 9, 11), (40, 41, 90)] {
        let g = scinder_sequentiel(Plage::new(a, m).unwrap());
        let d = scinder_sequentiel(Plage::new(m, b).unwrap());
        let direct = scinder_sequentiel(Plage::new(a, b).unwrap());
        assert_eq!(fusionner(g, d), direct, "[{a},{m},{b})");
    }
}

#[test]
fn sci_fusion_lineaire_egale_equilibree() {
    // gauche→droite, feuille par feuille
    let n = 33u64;
    let lineaire = (1..n).fold(feuille(0), |acc, k| fusionner(acc, feuille(k)));
    assert_eq!(lineaire, scinder_sequentiel(Plage::new(0, n).unwrap()));
}
