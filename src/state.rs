// état partagé de l'application : tout vit en mémoire, aucune base de données

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use crate::models::client::CompteClient;
use crate::models::commande::{Commande, CommandeEnCours, EtatCommande};
use crate::models::filtre::Filtres;
use crate::models::information_personnelle::InformationPersonnelle;
use crate::models::ingredient::Ingredient;
use crate::models::pizza::{Pizza, TypePizza};

/// Toutes les données de la pizzeria. Les BTreeMap donnent des parcours dans
/// l'ordre des noms, ce qui rend les réponses de l'API stables.
#[derive(Default)]
pub(crate) struct Donnees {
    pub(crate) comptes: BTreeMap<String, CompteClient>,
    pub(crate) sessions: HashSet<String>,
    pub(crate) ingredients: BTreeMap<String, Ingredient>,
    pub(crate) interdits: HashMap<TypePizza, HashSet<String>>,
    pub(crate) pizzas: BTreeMap<String, Pizza>,
    pub(crate) en_cours: Vec<CommandeEnCours>,
    pub(crate) commandes: Vec<Commande>,
    pub(crate) filtres: HashMap<String, Filtres>,
    // couples (email, pizza) pour lesquels une évaluation a déjà été faite
    pub(crate) evaluations_faites: HashSet<(String, String)>,
}

impl Donnees {
    /// Prix minimal d'une pizza : somme des prix de ses ingrédients
    /// augmentée de 40% et arrondie à la dizaine d'euros supérieure. Un même
    /// ingrédient présent plusieurs fois compte autant de fois.
    pub(crate) fn prix_minimal(&self, pizza: &Pizza) -> f64 {
        let somme: f64 = pizza
            .ingredients()
            .iter()
            .filter_map(|nom| self.ingredients.get(nom))
            .map(|ingredient| ingredient.prix)
            .sum();
        ((somme * 1.4) / 10.0).ceil() * 10.0
    }

    /// Prix de vente effectif : le prix fixé manuellement s'il y en a un,
    /// sinon le prix minimal calculé depuis les ingrédients.
    pub(crate) fn prix_effectif(&self, pizza: &Pizza) -> f64 {
        if pizza.prix_vente() > 0.0 {
            pizza.prix_vente()
        } else {
            self.prix_minimal(pizza)
        }
    }

    /// Bénéfice unitaire d'une pizza : prix effectif moins prix minimal.
    pub(crate) fn benefice_unitaire(&self, pizza: &Pizza) -> f64 {
        self.prix_effectif(pizza) - self.prix_minimal(pizza)
    }

    /// Les commandes déjà traitées, de la plus ancienne à la plus récente.
    pub(crate) fn commandes_traitees(&self) -> Vec<Commande> {
        let mut traitees: Vec<Commande> = self
            .commandes
            .iter()
            .filter(|commande| commande.etat() == EtatCommande::Traitee)
            .cloned()
            .collect();
        traitees.sort_by_key(|commande| commande.date_heure());
        traitees
    }

    /// Vrai si le client a déjà commandé cette pizza dans une commande
    /// validée, traitée ou non.
    pub(crate) fn a_commande(&self, email: &str, nom_pizza: &str) -> bool {
        self.commandes
            .iter()
            .any(|commande| commande.email_client() == email && commande.pizza().nom() == nom_pizza)
    }

    pub(crate) fn info_client(&self, email: &str) -> Option<&InformationPersonnelle> {
        self.comptes.get(email).map(|compte| &compte.info)
    }
}

/// L'état partagé de l'application, distribué aux handlers comme le serait
/// une connexion base de données.
pub struct Pizzeria {
    donnees: Mutex<Donnees>,
}

impl Pizzeria {
    pub fn new() -> Self {
        Self {
            donnees: Mutex::new(Donnees::default()),
        }
    }

    // Les sections critiques restent courtes : on verrouille, on agit, on
    // relâche, jamais de .await pendant que le verrou est tenu.
    pub(crate) fn verrou(&self) -> MutexGuard<'_, Donnees> {
        self.donnees.lock().expect("verrou des données empoisonné")
    }
}

impl Default for Pizzeria {
    fn default() -> Self {
        Self::new()
    }
}
