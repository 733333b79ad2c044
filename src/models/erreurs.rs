use thiserror::Error;

/// Les deux familles d'échec des services. Elles signalent seulement qu'une
/// précondition n'était pas remplie et ne portent aucune donnée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurService {
    /// L'opération exige un client connecté et aucun ne l'est.
    #[error("aucun client n'est connecté")]
    NonConnecte,
    /// Problème avec la commande d'un client : commande inconnue, commande
    /// d'un autre client, contenu invalide...
    #[error("commande invalide")]
    Commande,
}
