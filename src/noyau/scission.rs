// src/noyau/scission.rs
//
// Contrôleur de récursion (scission binaire fork-join)
// ----------------------------------------------------
// [a,b) :
// - b − a == 1            -> feuille(a)
// - sinon m = a + (b−a)/2 -> [a,m) ⊕ [m,b)
//     en parallèle (rayon::join) si b − a > seuil ET budget de tâches > 1,
//     séquentiel sinon.
//
// Chaque tâche possède son triplet jusqu’au retour vers le parent : pas d’état
// partagé, pas de verrou. La seule synchronisation est le join avant la fusion.
// Le résultat ne dépend ni de l’ordonnancement ni du nombre de threads.

use std::panic::{self, AssertUnwindSafe};

use rayon::ThreadPoolBuilder;
use tracing::{debug, error};

use super::erreur::{ErreurPi, Resultat};
use super::feuille::feuille;
use super::fusion::{fusionner, Plage, Triplet};

/// En dessous : récursion séquentielle (le coût d’un spawn domine les petites feuilles).
pub const SEUIL_PARALLELE: u64 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParametresScission {
    /// Longueur de plage au-delà de laquelle on scinde en parallèle (> 0).
    pub seuil: u64,
    /// Threads du pool dédié (0 = parallélisme de l’hôte).
    pub taches: usize,
}

impl Default for ParametresScission {
    fn default() -> Self {
        Self {
            seuil: SEUIL_PARALLELE,
            taches: 0,
        }
    }
}

impl ParametresScission {
    pub fn verifier(&self) -> Resultat<()> {
        if self.seuil == 0 {
            return Err(ErreurPi::SeuilInvalide);
        }
        Ok(())
    }
}

/// Racine de l’arbre + nombre de threads réellement utilisés.
#[derive(Clone, Debug)]
pub struct RacineScission {
    pub triplet: Triplet,
    pub threads: usize,
}

/* ------------------------ Séquentiel (référence) ------------------------ */

pub fn scinder_sequentiel(plage: Plage) -> Triplet {
    if plage.len() == 1 {
        return feuille(plage.debut);
    }
    let (g, d) = plage.couper();
    fusionner(scinder_sequentiel(g), scinder_sequentiel(d))
}

/* ------------------------ Parallèle (pool courant) ------------------------ */

/// Scission dans le pool rayon courant ; le budget initial = threads du pool.
pub fn scinder(plage: Plage, params: &ParametresScission) -> Resultat<Triplet> {
    params.verifier()?;
    scinder_budget(plage, params.seuil, rayon::current_num_threads())
}

/// `budget` borne le nombre de tâches simultanées : partagé entre les deux enfants
/// à chaque fork, la récursion continue en séquentiel quand il tombe à 1.
fn scinder_budget(plage: Plage, seuil: u64, budget: usize) -> Resultat<Triplet> {
    if plage.len() <= seuil || budget <= 1 {
        let t = scinder_sequentiel(plage);
        t.verifier(plage)?;
        return Ok(t);
    }

    let (g, d) = plage.couper();
    let budget_g = budget / 2;

    let (rg, rd) = rayon::join(
        || scinder_budget(g, seuil, budget_g),
        || scinder_budget(d, seuil, budget - budget_g),
    );

    let t = fusionner(rg?, rd?);
    t.verifier(plage)?;
    Ok(t)
}

/* ------------------------ Pool dédié ------------------------ */

fn message_panique(p: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = p.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = p.downcast_ref::<String>() {
        s.clone()
    } else {
        "panique sans message".to_string()
    }
}

/// Exécute la scission dans un pool rayon dédié de `params.taches` threads.
/// Une panique dans une tâche devient `ErreurPi::Tache` (jamais de triplet partiel).
pub fn scinder_dans_pool(plage: Plage, params: &ParametresScission) -> Resultat<RacineScission> {
    params.verifier()?;

    let pool = ThreadPoolBuilder::new()
        .num_threads(params.taches)
        .thread_name(|i| format!("pi-scission-{i}"))
        .build()
        .map_err(|e| ErreurPi::Pool(e.to_string()))?;

    let threads = pool.current_num_threads();
    debug!(
        debut = plage.debut,
        fin = plage.fin,
        seuil = params.seuil,
        threads,
        "scission binaire"
    );

    let issue = pool.install(|| panic::catch_unwind(AssertUnwindSafe(|| scinder(plage, params))));

    match issue {
        Ok(r) => r.map(|triplet| RacineScission { triplet, threads }),
        Err(p) => {
            let msg = message_panique(p);
            error!("tâche de scission interrompue : {msg}");
            Err(ErreurPi::Tache(msg))
        }
    }
}
