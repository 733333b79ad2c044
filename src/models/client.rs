use serde::Serialize;

use crate::models::information_personnelle::InformationPersonnelle;

/// Compte d'un client inscrit auprès de la pizzeria.
#[derive(Debug, Clone, Serialize)]
pub struct CompteClient {
    pub email: String,
    #[serde(skip_serializing)] // Ne pas exposer le hash en JSON
    pub mdp_hash: String,
    pub info: InformationPersonnelle,
}
