// src/noyau/flottant.rs
//
// Flottant binaire à précision explicite (frontière arithmétique du noyau)
// ----------------------------------------------------------------------
// valeur = mantisse · 2^exposant
// - mantisse : BigInt signé, |mantisse| < 2^prec après chaque opération
// - troncature vers zéro (jamais d’arrondi vers le haut)
// - précision du résultat = max des précisions des opérandes
//
// Seules les opérations utilisées par l’assemblage final existent :
// conversion depuis BigInt, ×, ÷, √, lecture décimale à d chiffres.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};

use super::erreur::{ErreurPi, Resultat};
use super::lecture::{pow10, scaled_to_decimal};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flottant {
    mantisse: BigInt,
    exposant: i64,
    prec: u64,
}

/* ------------------------ Helpers magnitude ------------------------ */

/// Décalage à droite sur la magnitude (troncature vers zéro, signe conservé).
fn tronquer(n: &BigInt, d: u64) -> BigInt {
    BigInt::from_biguint(n.sign(), n.magnitude() >> (d as usize))
}

fn signe_produit(a: Sign, b: Sign) -> Sign {
    match (a, b) {
        (Sign::NoSign, _) | (_, Sign::NoSign) => Sign::NoSign,
        (x, y) if x == y => Sign::Plus,
        _ => Sign::Minus,
    }
}

impl Flottant {
    /* ------------------------ Construction ------------------------ */

    pub fn depuis_entier(n: &BigInt, prec: u64) -> Self {
        Self {
            mantisse: n.clone(),
            exposant: 0,
            prec: prec.max(1),
        }
        .normaliser()
    }

    pub fn depuis_i64(n: i64, prec: u64) -> Self {
        Self::depuis_entier(&BigInt::from(n), prec)
    }

    fn normaliser(mut self) -> Self {
        if self.mantisse.is_zero() {
            self.exposant = 0;
            return self;
        }
        let bits = self.mantisse.bits();
        if bits > self.prec {
            let d = bits - self.prec;
            self.mantisse = tronquer(&self.mantisse, d);
            self.exposant += d as i64;
        }
        self
    }

    /* ------------------------ Accès ------------------------ */

    pub fn prec(&self) -> u64 {
        self.prec
    }

    pub fn mantisse(&self) -> &BigInt {
        &self.mantisse
    }

    pub fn exposant(&self) -> i64 {
        self.exposant
    }

    pub fn est_zero(&self) -> bool {
        self.mantisse.is_zero()
    }

    /* ------------------------ Opérations ------------------------ */

    pub fn mul(&self, autre: &Flottant) -> Flottant {
        Flottant {
            mantisse: &self.mantisse * &autre.mantisse,
            exposant: self.exposant + autre.exposant,
            prec: self.prec.max(autre.prec),
        }
        .normaliser()
    }

    /// Division tronquée : le quotient porte au moins `prec + 1` bits avant normalisation.
    pub fn div(&self, autre: &Flottant) -> Resultat<Flottant> {
        if autre.est_zero() {
            return Err(ErreurPi::Arithmetique("division par zéro".into()));
        }
        let prec = self.prec.max(autre.prec);
        if self.est_zero() {
            return Ok(Flottant::depuis_i64(0, prec));
        }

        let decalage = (prec as i64 + autre.mantisse.bits() as i64
            - self.mantisse.bits() as i64
            + 1)
            .max(0);

        let num: BigUint = self.mantisse.magnitude() << (decalage as usize);
        let quot = num / autre.mantisse.magnitude();
        let signe = signe_produit(self.mantisse.sign(), autre.mantisse.sign());

        Ok(Flottant {
            mantisse: BigInt::from_biguint(signe, quot),
            exposant: self.exposant - autre.exposant - decalage,
            prec,
        }
        .normaliser())
    }

    /// Racine carrée tronquée (partie entière de la racine de la mantisse décalée).
    pub fn racine(&self) -> Resultat<Flottant> {
        if self.mantisse.is_negative() {
            return Err(ErreurPi::Arithmetique("√ : argument négatif".into()));
        }
        if self.est_zero() {
            return Ok(self.clone());
        }

        // mantisse décalée : ≥ 2·prec + 2 bits, exposant résultant pair
        let mut decalage = (2 * self.prec as i64 + 2 - self.mantisse.bits() as i64).max(0);
        if (self.exposant - decalage).rem_euclid(2) != 0 {
            decalage += 1;
        }

        let m: BigUint = self.mantisse.magnitude() << (decalage as usize);
        Ok(Flottant {
            mantisse: BigInt::from_biguint(Sign::Plus, m.sqrt()),
            exposant: (self.exposant - decalage) / 2,
            prec: self.prec,
        }
        .normaliser())
    }

    /* ------------------------ Lecture décimale ------------------------ */

    /// floor(|x| · 10^digits) avec le signe de x.
    fn scaled(&self, digits: usize) -> BigInt {
        let m = BigInt::from_biguint(Sign::Plus, self.mantisse.magnitude().clone()) * pow10(digits);
        let abs = if self.exposant >= 0 {
            m << (self.exposant as usize)
        } else {
            m >> (self.exposant.unsigned_abs() as usize)
        };
        if self.mantisse.is_negative() {
            -abs
        } else {
            abs
        }
    }

    /// Texte décimal à exactement `digits` chiffres après le point (tronqué).
    pub fn en_decimal(&self, digits: usize) -> String {
        scaled_to_decimal(self.scaled(digits), digits)
    }
}
