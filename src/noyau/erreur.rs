// src/noyau/erreur.rs
//
// Erreurs du noyau π.
// - Entrée invalide : rejetée AVANT tout calcul.
// - Incohérence interne (triplet invalide, tâche perdue) : fatale pour le calcul.
// Aucune valeur partielle de π n’est jamais renvoyée en cas d’erreur.

use thiserror::Error;

pub type Resultat<T> = std::result::Result<T, ErreurPi>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurPi {
    /// digits ≤ 0
    #[error("nombre de décimales invalide : {0} (attendu > 0)")]
    DigitsInvalides(i64),

    /// Garde-fou : précision hors bornes (anti-gel / anti-débordement).
    #[error("nombre de décimales trop grand : {0}")]
    DigitsTropGrands(i64),

    #[error("plage vide [{debut}, {fin})")]
    PlageVide { debut: u64, fin: u64 },

    #[error("seuil de parallélisme invalide (doit être > 0)")]
    SeuilInvalide,

    /// Triplet structurellement invalide (P ≤ 0, Q ≤ 0, T ≤ 0 à la racine…).
    #[error("triplet invalide : {0}")]
    TripletInvalide(String),

    #[error("arithmétique : {0}")]
    Arithmetique(String),

    /// Construction du pool de tâches impossible.
    #[error("pool de tâches : {0}")]
    Pool(String),

    /// Une tâche n’a pas produit son triplet (panique capturée).
    #[error("tâche interrompue : {0}")]
    Tache(String),
}
