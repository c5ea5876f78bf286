//! Noyau — calcul de π (pipeline réel)
//!
//! digits -> plan (termes, prec) -> scission [0, N) (pool rayon) -> vérif racine
//!        -> assemblage (Q, T) -> lecture décimale tronquée
//!
//! Tout est créé à chaque appel et jeté au retour : aucun cache global.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::assemblage::{assembler, formater};
use super::erreur::Resultat;
use super::flottant::Flottant;
use super::fusion::Plage;
use super::precision::{planifier, PlanPrecision};
use super::scission::{scinder_dans_pool, ParametresScission};

/// Démarche du calcul (pour affichage / journal).
#[derive(Clone, Debug)]
pub struct DemarchePi {
    pub plan: PlanPrecision,
    pub threads: usize,
    pub seuil: u64,
    pub bits_q: u64,
    pub bits_t: u64,
    pub duree_scission: Duration,
    pub duree_assemblage: Duration,
}

/// Résultat complet : valeur flottante + texte formaté. Appartient à l’appelant.
#[derive(Clone, Debug)]
pub struct ResultatPi {
    pub valeur: Flottant,
    pub texte: String,
    pub demarche: DemarchePi,
}

/// API publique : π avec exactement `digits` décimales ("3." + digits chiffres).
/// digits ≤ 0 => `ErreurPi::DigitsInvalides`, aucun calcul lancé.
pub fn compute_pi(digits: i64) -> Resultat<String> {
    calculer_pi(digits, &ParametresScission::default()).map(|r| r.texte)
}

/// Variante détaillée : réglages de scission explicites + démarche.
pub fn calculer_pi(digits: i64, params: &ParametresScission) -> Resultat<ResultatPi> {
    // 1) Plan (rejette les entrées invalides avant tout calcul)
    let plan = planifier(digits)?;
    params.verifier()?;

    // 2) Scission binaire sur [0, N)
    let t0 = Instant::now();
    let plage = Plage::new(0, plan.termes)?;
    let racine = scinder_dans_pool(plage, params)?;
    racine.triplet.verifier(plage)?;
    let duree_scission = t0.elapsed();

    let bits_q = racine.triplet.q.bits();
    let bits_t = racine.triplet.t.bits();
    debug!(
        termes = plan.termes,
        bits_q,
        bits_t,
        ms = duree_scission.as_millis() as u64,
        "scission terminée"
    );

    // 3) Assemblage + lecture
    let t1 = Instant::now();
    let valeur = assembler(&racine.triplet, &plan)?;
    let texte = formater(&valeur, plan.digits);
    let duree_assemblage = t1.elapsed();

    info!(
        digits = plan.digits,
        termes = plan.termes,
        threads = racine.threads,
        "π calculé en {:?}",
        duree_scission + duree_assemblage
    );

    Ok(ResultatPi {
        valeur,
        texte,
        demarche: DemarchePi {
            plan,
            threads: racine.threads,
            seuil: params.seuil,
            bits_q,
            bits_t,
            duree_scission,
            duree_assemblage,
        },
    })
}
