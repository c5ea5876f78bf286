//! Noyau π (scission binaire, série de Chudnovsky)
//!
//! Organisation interne :
//! - precision.rs  : digits -> (termes N, précision binaire)
//! - feuille.rs    : triplet fermé (P, Q, T) d’un indice k
//! - fusion.rs     : Plage [a,b) + Triplet + loi de fusion associative
//! - scission.rs   : récursion fork-join (rayon) + pool dédié
//! - flottant.rs   : flottant binaire à précision explicite (frontière arithmétique)
//! - assemblage.rs : (Q, T) -> π à `prec` bits
//! - lecture.rs    : entier scalé -> texte décimal tronqué
//! - eval.rs       : pipeline complet
//! - erreur.rs     : ErreurPi

pub mod assemblage;
pub mod erreur;
pub mod eval;
pub mod feuille;
pub mod flottant;
pub mod fusion;
pub mod lecture;
pub mod precision;
pub mod scission;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurPi;
pub use eval::{calculer_pi, compute_pi, DemarchePi, ResultatPi};
pub use scission::ParametresScission;
