use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

use crate::models::pizza::Pizza;

/// État d'une commande, de sa création à son traitement par le pizzaïolo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EtatCommande {
    Creee,
    Validee,
    Traitee,
}

impl fmt::Display for EtatCommande {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nom = match self {
            EtatCommande::Creee => "CREEE",
            EtatCommande::Validee => "VALIDEE",
            EtatCommande::Traitee => "TRAITEE",
        };
        write!(f, "{nom}")
    }
}

/// Commande passée par un client : une quantité d'une seule pizza, un état
/// et la date/heure de création.
#[derive(Debug, Clone, Serialize)]
pub struct Commande {
    email_client: String,
    pizza: Pizza,
    quantite: i32,
    etat: EtatCommande,
    date_heure: DateTime<Utc>,
}

impl Commande {
    /// Crée une commande dans l'état Creee, datée de l'instant courant.
    pub fn new(email_client: &str, pizza: Pizza, quantite: i32) -> Self {
        Self::datee(email_client, pizza, quantite, Utc::now())
    }

    /// Crée une commande avec une date de création déjà connue, par exemple
    /// celle de la commande en cours dont elle est issue.
    pub(crate) fn datee(
        email_client: &str,
        pizza: Pizza,
        quantite: i32,
        date_heure: DateTime<Utc>,
    ) -> Self {
        Self {
            email_client: email_client.to_string(),
            pizza,
            quantite,
            etat: EtatCommande::Creee,
            date_heure,
        }
    }

    pub fn email_client(&self) -> &str {
        &self.email_client
    }

    pub fn pizza(&self) -> &Pizza {
        &self.pizza
    }

    pub fn quantite(&self) -> i32 {
        self.quantite
    }

    pub fn etat(&self) -> EtatCommande {
        self.etat
    }

    /// Remplace l'état sans contrainte d'ordre : l'enchainement
    /// Creee -> Validee -> Traitee est de la responsabilité de l'appelant.
    pub fn set_etat(&mut self, etat: EtatCommande) {
        self.etat = etat;
    }

    pub fn date_heure(&self) -> DateTime<Utc> {
        self.date_heure
    }
}

// Deux commandes sont identiques si elles viennent du même client au même
// instant, indépendamment de leur contenu.
impl PartialEq for Commande {
    fn eq(&self, other: &Self) -> bool {
        self.email_client == other.email_client && self.date_heure == other.date_heure
    }
}

impl Eq for Commande {}

impl Hash for Commande {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email_client.hash(state);
        self.date_heure.hash(state);
    }
}

impl fmt::Display for Commande {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Commande[email={}, pizza={}, quantite={}, etat={}]",
            self.email_client,
            self.pizza.nom(),
            self.quantite,
            self.etat
        )
    }
}

/// Commande en cours de composition par un client connecté. Elle ne devient
/// une [`Commande`] qu'à la validation, en conservant sa date de création.
#[derive(Debug, Clone, Serialize)]
pub struct CommandeEnCours {
    id: Uuid,
    email_client: String,
    pizza: Option<String>,
    quantite: i32,
    date_heure: DateTime<Utc>,
}

impl CommandeEnCours {
    pub(crate) fn new(email_client: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            email_client: email_client.to_string(),
            pizza: None,
            quantite: 0,
            date_heure: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email_client(&self) -> &str {
        &self.email_client
    }

    pub fn pizza(&self) -> Option<&str> {
        self.pizza.as_deref()
    }

    pub fn quantite(&self) -> i32 {
        self.quantite
    }

    pub fn date_heure(&self) -> DateTime<Utc> {
        self.date_heure
    }

    /// Ajoute des pizzas à la ligne de commande. Une commande ne porte que
    /// sur une seule pizza : un nom différent de la ligne déjà présente est
    /// refusé.
    pub(crate) fn ajouter(&mut self, nom_pizza: &str, nombre: i32) -> bool {
        match &self.pizza {
            None => {
                self.pizza = Some(nom_pizza.to_string());
                self.quantite = nombre;
                true
            }
            Some(nom) if nom == nom_pizza => {
                self.quantite += nombre;
                true
            }
            Some(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pizza::TypePizza;
    use std::collections::hash_map::DefaultHasher;

    fn margarita() -> Pizza {
        let mut pizza = Pizza::new("Margarita", TypePizza::Vegetarienne);
        pizza.set_prix_vente(8.50);
        pizza
    }

    fn hash_de(commande: &Commande) -> u64 {
        let mut hasher = DefaultHasher::new();
        commande.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_creation_commande() {
        let commande = Commande::new("client@test.com", margarita(), 2);
        assert_eq!(commande.email_client(), "client@test.com");
        assert_eq!(commande.pizza(), &margarita());
        assert_eq!(commande.quantite(), 2);
        assert_eq!(commande.etat(), EtatCommande::Creee);
    }

    #[test]
    fn test_set_etat() {
        let mut commande = Commande::new("client@test.com", margarita(), 2);
        commande.set_etat(EtatCommande::Validee);
        assert_eq!(commande.etat(), EtatCommande::Validee);
        commande.set_etat(EtatCommande::Traitee);
        assert_eq!(commande.etat(), EtatCommande::Traitee);
    }

    #[test]
    fn test_affichage() {
        let commande = Commande::new("client@test.com", margarita(), 2);
        let texte = commande.to_string();
        assert!(texte.contains("client@test.com"));
        assert!(texte.contains("Margarita"));
        assert!(texte.contains("quantite=2"));
        assert!(texte.contains("CREEE"));
    }

    #[test]
    fn test_egalite_sur_email_et_date() {
        let commande = Commande::new("client@test.com", margarita(), 2);
        // Même client, même instant : la commande est la même, quel que soit
        // le contenu.
        let mut autre = Commande::new("client@test.com", margarita(), 5);
        autre.date_heure = commande.date_heure;
        assert_eq!(commande, autre);
        assert_eq!(hash_de(&commande), hash_de(&autre));
    }

    #[test]
    fn test_clients_differents() {
        let commande = Commande::new("client@test.com", margarita(), 2);
        let mut autre = Commande::new("autre@mail.com", margarita(), 2);
        autre.date_heure = commande.date_heure;
        assert_ne!(commande, autre);
    }

    #[test]
    fn test_dates_differentes() {
        let commande = Commande::new("client@test.com", margarita(), 2);
        let mut autre = commande.clone();
        autre.date_heure = commande.date_heure + chrono::Duration::seconds(1);
        assert_ne!(commande, autre);
    }

    #[test]
    fn test_commande_en_cours_une_seule_pizza() {
        let mut en_cours = CommandeEnCours::new("client@test.com");
        assert!(en_cours.pizza().is_none());
        assert!(en_cours.ajouter("Margarita", 2));
        assert_eq!(en_cours.pizza(), Some("Margarita"));
        assert_eq!(en_cours.quantite(), 2);
        // La même pizza s'accumule, une autre est refusée.
        assert!(en_cours.ajouter("Margarita", 3));
        assert_eq!(en_cours.quantite(), 5);
        assert!(!en_cours.ajouter("Reine", 1));
        assert_eq!(en_cours.quantite(), 5);
    }
}
