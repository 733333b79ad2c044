use async_trait::async_trait;

/// Sauvegarde et chargement de toutes les données de l'application dans un
/// fichier nommé.
///
/// Aucune implémentation n'est fournie ici : le format du fichier et la
/// stratégie de reprise relèvent d'un collaborateur dédié, à brancher sur
/// l'état partagé sans toucher aux services existants.
#[async_trait]
pub trait Sauvegarde {
    /// Sauvegarde toutes les données de l'application dans un fichier.
    async fn sauvegarder_donnees(&self, nom_fichier: &str) -> Result<(), std::io::Error>;

    /// Charge les données de l'application à partir d'un fichier.
    async fn charger_donnees(&self, nom_fichier: &str) -> Result<(), std::io::Error>;
}
