// src/noyau/fusion.rs
//
// Triplet (P, Q, T) + loi de fusion (scission binaire)
// ----------------------------------------------------
// [a,m) ⊕ [m,b) = [a,b) :
//   P = P1·P2
//   Q = Q1·Q2
//   T = T1·Q2 + P1·T2
//
// La loi est associative : tout parenthésage de feuilles consécutives donne
// exactement le même (P, Q, T). Le triplet gauche couvre TOUJOURS la sous-plage basse.

use num_bigint::BigInt;
use num_traits::Signed;

use super::erreur::{ErreurPi, Resultat};

/// Intervalle semi-ouvert [debut, fin) d’indices de termes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plage {
    pub debut: u64,
    pub fin: u64,
}

impl Plage {
    pub fn new(debut: u64, fin: u64) -> Resultat<Self> {
        if fin <= debut {
            return Err(ErreurPi::PlageVide { debut, fin });
        }
        Ok(Self { debut, fin })
    }

    pub fn len(&self) -> u64 {
        self.fin - self.debut
    }

    /// m = a + (b−a)/2 ; les deux moitiés sont non vides dès que len ≥ 2.
    pub fn couper(&self) -> (Plage, Plage) {
        let m = self.debut + self.len() / 2;
        (
            Plage {
                debut: self.debut,
                fin: m,
            },
            Plage {
                debut: m,
                fin: self.fin,
            },
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triplet {
    pub p: BigInt,
    pub q: BigInt,
    pub t: BigInt,
}

impl Triplet {
    /// P et Q doivent être strictement positifs ; T est libre (signe du terme).
    pub fn verifier(&self, plage: Plage) -> Resultat<()> {
        if !self.p.is_positive() {
            return Err(ErreurPi::TripletInvalide(format!(
                "P ≤ 0 sur [{}, {})",
                plage.debut, plage.fin
            )));
        }
        if !self.q.is_positive() {
            return Err(ErreurPi::TripletInvalide(format!(
                "Q ≤ 0 sur [{}, {})",
                plage.debut, plage.fin
            )));
        }
        Ok(())
    }
}

/// Fusion de deux triplets adjacents (gauche = sous-plage basse).
/// Consomme ses entrées : aucun tampon partagé entre tâches.
pub fn fusionner(gauche: Triplet, droite: Triplet) -> Triplet {
    let t = &gauche.t * &droite.q + &gauche.p * &droite.t;
    Triplet {
        p: gauche.p * droite.p,
        q: gauche.q * droite.q,
        t,
    }
}
