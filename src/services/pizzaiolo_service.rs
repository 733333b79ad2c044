use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::commande::{Commande, EtatCommande};
use crate::models::information_personnelle::InformationPersonnelle;
use crate::models::ingredient::Ingredient;
use crate::models::pizza::{Pizza, TypePizza};
use crate::state::Pizzeria;

/// Services utilisés par le pizzaïolo pour concevoir les pizzas avec leurs
/// ingrédients et pour obtenir des statistiques sur les ventes.
///
/// Les statistiques se basent sur les commandes déjà traitées. Les
/// opérations sur les ingrédients gardent la convention de codes de retour
/// documentée sur chaque méthode.
#[async_trait]
pub trait ServicePizzaiolo {
    /// Crée un nouvel ingrédient avec son prix, disponible ensuite pour la
    /// composition des pizzas.
    ///
    /// Renvoie 0 si tout s'est bien passé, -1 si le nom est vide, -2 s'il
    /// existait déjà un ingrédient du même nom, -3 si le prix est inférieur
    /// ou égal à 0.
    async fn creer_ingredient(&self, nom: &str, prix: f64) -> i32;

    /// Change le prix d'un ingrédient existant.
    ///
    /// Renvoie 0 si tout s'est bien passé, -1 si le nom est vide, -2 si le
    /// prix est inférieur ou égal à 0, -3 si aucun ingrédient de ce nom
    /// n'existe.
    async fn changer_prix_ingredient(&self, nom: &str, prix: f64) -> i32;

    /// Interdit un ingrédient pour un type de pizza, par exemple le jambon
    /// pour les pizzas végétariennes. Renvoie false si l'ingrédient
    /// n'existe pas.
    async fn interdire_ingredient(&self, nom_ingredient: &str, type_pizza: TypePizza) -> bool;

    /// Les ingrédients du registre avec leur prix.
    async fn ingredients(&self) -> Vec<Ingredient>;

    /// Crée une nouvelle pizza, immédiatement visible par les clients.
    /// Renvoie None si le nom est vide ou si une pizza du même nom existe.
    async fn creer_pizza(&self, nom: &str, type_pizza: TypePizza) -> Option<Pizza>;

    /// Ajoute un ingrédient du registre à une pizza. Ne fait rien si
    /// l'ingrédient est déjà sur la pizza.
    ///
    /// Renvoie 0 si tout s'est bien passé, -1 si la pizza n'existe pas, -2
    /// si le nom d'ingrédient est vide ou inconnu, -3 si l'ingrédient est
    /// interdit pour le type de la pizza.
    async fn ajouter_ingredient_pizza(&self, nom_pizza: &str, nom_ingredient: &str) -> i32;

    /// Retire un ingrédient d'une pizza.
    ///
    /// Renvoie 0 si tout s'est bien passé, -1 si la pizza n'existe pas, -2
    /// si le nom d'ingrédient est vide ou inconnu, -3 si l'ingrédient
    /// n'était pas sur la pizza.
    async fn retirer_ingredient_pizza(&self, nom_pizza: &str, nom_ingredient: &str) -> i32;

    /// Les ingrédients de la pizza devenus interdits pour son type, utile
    /// quand des interdictions ont été ajoutées après la composition.
    /// Renvoie None si la pizza n'existe pas.
    async fn verifier_ingredients_pizza(&self, nom_pizza: &str) -> Option<HashSet<String>>;

    /// Associe une photo à une pizza, en remplaçant la précédente. Renvoie
    /// false si la pizza n'existe pas ou si le fichier ne contient pas une
    /// image ; une erreur de lecture du fichier est propagée.
    async fn ajouter_photo(&self, nom_pizza: &str, fichier: &str)
        -> Result<bool, std::io::Error>;

    /// Le prix de vente d'une pizza : le prix fixé manuellement, sinon le
    /// prix minimal basé sur ses ingrédients. Renvoie -1 si la pizza
    /// n'existe pas.
    async fn prix_pizza(&self, nom_pizza: &str) -> f64;

    /// Fixe le prix de vente d'une pizza. Le prix doit être supérieur ou
    /// égal au prix minimal, sinon il n'est pas modifié et false est
    /// renvoyé.
    async fn fixer_prix_pizza(&self, nom_pizza: &str, prix: f64) -> bool;

    /// Le prix minimal d'une pizza : la somme des prix de ses ingrédients
    /// augmentée de 40% et arrondie à la dizaine d'euros supérieure.
    /// Renvoie -1 si la pizza n'existe pas.
    async fn prix_minimal_pizza(&self, nom_pizza: &str) -> f64;

    /// L'ensemble des pizzas créées.
    async fn pizzas(&self) -> Vec<Pizza>;

    /// L'ensemble des clients qui ont un compte dans la pizzeria.
    async fn ensemble_clients(&self) -> Vec<InformationPersonnelle>;

    /// Les commandes déjà traitées, de la plus ancienne à la plus récente.
    async fn commandes_deja_traitees(&self) -> Vec<Commande>;

    /// Les commandes validées pas encore traitées, de la plus ancienne à la
    /// plus récente. Une fois lues par cet appel, elles sont considérées
    /// comme traitées.
    async fn commandes_non_traitees(&self) -> Vec<Commande>;

    /// Les commandes déjà traitées d'un certain client, de la plus ancienne
    /// à la plus récente. Renvoie None si le client est inconnu.
    async fn commandes_traitees_client(
        &self,
        client: &InformationPersonnelle,
    ) -> Option<Vec<Commande>>;

    /// Le bénéfice unitaire de chaque pizza en vente : la différence entre
    /// son prix de vente effectif et son prix minimal.
    async fn benefice_par_pizza(&self) -> HashMap<Pizza, f64>;

    /// Le bénéfice d'une commande : la quantité commandée multipliée par le
    /// bénéfice unitaire de sa pizza. Renvoie -1 si la commande est
    /// inconnue.
    async fn benefice_commande(&self, email: &str, date_heure: DateTime<Utc>) -> f64;

    /// Le bénéfice global de toutes les commandes déjà traitées.
    async fn benefice_toutes_commandes(&self) -> f64;

    /// Le nombre total de pizzas commandées par chaque client, sur les
    /// commandes déjà traitées.
    async fn nombre_pizzas_commandees_par_client(&self) -> HashMap<InformationPersonnelle, i32>;

    /// Le bénéfice généré par chaque client, sur les commandes déjà
    /// traitées.
    async fn benefice_par_client(&self) -> HashMap<InformationPersonnelle, f64>;

    /// Le nombre de fois où une pizza a été commandée, sur les commandes
    /// déjà traitées. Renvoie -1 si la pizza n'existe pas.
    async fn nombre_pizzas_commandees(&self, nom_pizza: &str) -> i32;

    /// Les pizzas classées de la plus commandée à la moins commandée, sur
    /// les commandes déjà traitées.
    async fn classement_pizzas_par_nombre_commandes(&self) -> Vec<Pizza>;
}

// Signatures minimales suffisantes pour reconnaitre les formats d'image
// acceptés pour les photos.
fn est_une_image(contenu: &[u8]) -> bool {
    contenu.starts_with(b"\x89PNG\r\n\x1a\n")
        || contenu.starts_with(b"\xff\xd8\xff")
        || contenu.starts_with(b"GIF87a")
        || contenu.starts_with(b"GIF89a")
}

#[async_trait]
impl ServicePizzaiolo for Pizzeria {
    async fn creer_ingredient(&self, nom: &str, prix: f64) -> i32 {
        if nom.is_empty() {
            return -1;
        }
        let mut donnees = self.verrou();
        if donnees.ingredients.contains_key(nom) {
            return -2;
        }
        if prix <= 0.0 {
            return -3;
        }
        donnees
            .ingredients
            .insert(nom.to_string(), Ingredient::new(nom, prix));
        0
    }

    async fn changer_prix_ingredient(&self, nom: &str, prix: f64) -> i32 {
        if nom.is_empty() {
            return -1;
        }
        if prix <= 0.0 {
            return -2;
        }
        let mut donnees = self.verrou();
        match donnees.ingredients.get_mut(nom) {
            Some(ingredient) => {
                ingredient.prix = prix;
                0
            }
            None => -3,
        }
    }

    async fn interdire_ingredient(&self, nom_ingredient: &str, type_pizza: TypePizza) -> bool {
        let mut donnees = self.verrou();
        if !donnees.ingredients.contains_key(nom_ingredient) {
            return false;
        }
        donnees
            .interdits
            .entry(type_pizza)
            .or_default()
            .insert(nom_ingredient.to_string());
        true
    }

    async fn ingredients(&self) -> Vec<Ingredient> {
        self.verrou().ingredients.values().cloned().collect()
    }

    async fn creer_pizza(&self, nom: &str, type_pizza: TypePizza) -> Option<Pizza> {
        if nom.is_empty() {
            return None;
        }
        let mut donnees = self.verrou();
        if donnees.pizzas.contains_key(nom) {
            return None;
        }
        let pizza = Pizza::new(nom, type_pizza);
        donnees.pizzas.insert(nom.to_string(), pizza.clone());
        Some(pizza)
    }

    async fn ajouter_ingredient_pizza(&self, nom_pizza: &str, nom_ingredient: &str) -> i32 {
        let mut donnees = self.verrou();
        if !donnees.pizzas.contains_key(nom_pizza) {
            return -1;
        }
        if nom_ingredient.is_empty() || !donnees.ingredients.contains_key(nom_ingredient) {
            return -2;
        }
        let type_pizza = match donnees.pizzas.get(nom_pizza) {
            Some(pizza) => pizza.type_pizza(),
            None => return -1,
        };
        let interdit = donnees
            .interdits
            .get(&type_pizza)
            .is_some_and(|exclus| exclus.contains(nom_ingredient));
        if interdit {
            return -3;
        }
        if let Some(pizza) = donnees.pizzas.get_mut(nom_pizza) {
            // Pas de doublon par cette opération : l'ajout est ignoré si
            // l'ingrédient est déjà sur la pizza.
            if !pizza.ingredients().iter().any(|i| i == nom_ingredient) {
                pizza.ajouter_ingredient(nom_ingredient);
            }
        }
        0
    }

    async fn retirer_ingredient_pizza(&self, nom_pizza: &str, nom_ingredient: &str) -> i32 {
        let mut donnees = self.verrou();
        if !donnees.pizzas.contains_key(nom_pizza) {
            return -1;
        }
        if nom_ingredient.is_empty() || !donnees.ingredients.contains_key(nom_ingredient) {
            return -2;
        }
        match donnees.pizzas.get_mut(nom_pizza) {
            Some(pizza) => {
                if pizza.retirer_ingredient(nom_ingredient) {
                    0
                } else {
                    -3
                }
            }
            _ => -3,
        }
    }

    async fn verifier_ingredients_pizza(&self, nom_pizza: &str) -> Option<HashSet<String>> {
        let donnees = self.verrou();
        let pizza = donnees.pizzas.get(nom_pizza)?;
        let exclus = donnees.interdits.get(&pizza.type_pizza());
        Some(
            pizza
                .ingredients()
                .iter()
                .filter(|nom| exclus.is_some_and(|exclus| exclus.contains(*nom)))
                .cloned()
                .collect(),
        )
    }

    async fn ajouter_photo(
        &self,
        nom_pizza: &str,
        fichier: &str,
    ) -> Result<bool, std::io::Error> {
        {
            let donnees = self.verrou();
            if !donnees.pizzas.contains_key(nom_pizza) {
                return Ok(false);
            }
        }
        // Lecture hors verrou : pas de .await pendant qu'il est tenu.
        let contenu = tokio::fs::read(fichier).await?;
        if !est_une_image(&contenu) {
            return Ok(false);
        }
        let mut donnees = self.verrou();
        match donnees.pizzas.get_mut(nom_pizza) {
            Some(pizza) => {
                pizza.set_chemin_photo(Some(fichier.to_string()));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn prix_pizza(&self, nom_pizza: &str) -> f64 {
        let donnees = self.verrou();
        match donnees.pizzas.get(nom_pizza) {
            Some(pizza) => donnees.prix_effectif(pizza),
            None => -1.0,
        }
    }

    async fn fixer_prix_pizza(&self, nom_pizza: &str, prix: f64) -> bool {
        let mut donnees = self.verrou();
        let minimal = match donnees.pizzas.get(nom_pizza) {
            Some(pizza) => donnees.prix_minimal(pizza),
            None => return false,
        };
        if prix < minimal {
            return false;
        }
        if let Some(pizza) = donnees.pizzas.get_mut(nom_pizza) {
            pizza.set_prix_vente(prix);
        }
        true
    }

    async fn prix_minimal_pizza(&self, nom_pizza: &str) -> f64 {
        let donnees = self.verrou();
        match donnees.pizzas.get(nom_pizza) {
            Some(pizza) => donnees.prix_minimal(pizza),
            None => -1.0,
        }
    }

    async fn pizzas(&self) -> Vec<Pizza> {
        self.verrou().pizzas.values().cloned().collect()
    }

    async fn ensemble_clients(&self) -> Vec<InformationPersonnelle> {
        self.verrou()
            .comptes
            .values()
            .map(|compte| compte.info.clone())
            .collect()
    }

    async fn commandes_deja_traitees(&self) -> Vec<Commande> {
        self.verrou().commandes_traitees()
    }

    async fn commandes_non_traitees(&self) -> Vec<Commande> {
        let mut donnees = self.verrou();
        let mut lues = Vec::new();
        for commande in donnees.commandes.iter_mut() {
            if commande.etat() == EtatCommande::Validee {
                commande.set_etat(EtatCommande::Traitee);
                lues.push(commande.clone());
            }
        }
        lues.sort_by_key(|commande| commande.date_heure());
        lues
    }

    async fn commandes_traitees_client(
        &self,
        client: &InformationPersonnelle,
    ) -> Option<Vec<Commande>> {
        let donnees = self.verrou();
        let email = donnees
            .comptes
            .values()
            .find(|compte| compte.info == *client)
            .map(|compte| compte.email.clone())?;
        Some(
            donnees
                .commandes_traitees()
                .into_iter()
                .filter(|commande| commande.email_client() == email)
                .collect(),
        )
    }

    async fn benefice_par_pizza(&self) -> HashMap<Pizza, f64> {
        let donnees = self.verrou();
        donnees
            .pizzas
            .values()
            .map(|pizza| (pizza.clone(), donnees.benefice_unitaire(pizza)))
            .collect()
    }

    async fn benefice_commande(&self, email: &str, date_heure: DateTime<Utc>) -> f64 {
        let donnees = self.verrou();
        let commande = donnees
            .commandes
            .iter()
            .find(|c| c.email_client() == email && c.date_heure() == date_heure);
        match commande {
            Some(commande) => {
                // Le bénéfice se calcule sur la pizza du catalogue, dont le
                // prix a pu changer depuis la commande.
                let pizza = donnees
                    .pizzas
                    .get(commande.pizza().nom())
                    .unwrap_or_else(|| commande.pizza());
                f64::from(commande.quantite()) * donnees.benefice_unitaire(pizza)
            }
            None => -1.0,
        }
    }

    async fn benefice_toutes_commandes(&self) -> f64 {
        let donnees = self.verrou();
        donnees
            .commandes_traitees()
            .iter()
            .map(|commande| {
                let pizza = donnees
                    .pizzas
                    .get(commande.pizza().nom())
                    .unwrap_or_else(|| commande.pizza());
                f64::from(commande.quantite()) * donnees.benefice_unitaire(pizza)
            })
            .sum()
    }

    async fn nombre_pizzas_commandees_par_client(
        &self,
    ) -> HashMap<InformationPersonnelle, i32> {
        let donnees = self.verrou();
        let mut totaux: HashMap<InformationPersonnelle, i32> = HashMap::new();
        for commande in donnees.commandes_traitees() {
            if let Some(info) = donnees.info_client(commande.email_client()) {
                *totaux.entry(info.clone()).or_insert(0) += commande.quantite();
            }
        }
        totaux
    }

    async fn benefice_par_client(&self) -> HashMap<InformationPersonnelle, f64> {
        let donnees = self.verrou();
        let mut benefices: HashMap<InformationPersonnelle, f64> = HashMap::new();
        for commande in donnees.commandes_traitees() {
            let Some(info) = donnees.info_client(commande.email_client()) else {
                continue;
            };
            let pizza = donnees
                .pizzas
                .get(commande.pizza().nom())
                .unwrap_or_else(|| commande.pizza());
            *benefices.entry(info.clone()).or_insert(0.0) +=
                f64::from(commande.quantite()) * donnees.benefice_unitaire(pizza);
        }
        benefices
    }

    async fn nombre_pizzas_commandees(&self, nom_pizza: &str) -> i32 {
        let donnees = self.verrou();
        if !donnees.pizzas.contains_key(nom_pizza) {
            return -1;
        }
        donnees
            .commandes_traitees()
            .iter()
            .filter(|commande| commande.pizza().nom() == nom_pizza)
            .map(Commande::quantite)
            .sum()
    }

    async fn classement_pizzas_par_nombre_commandes(&self) -> Vec<Pizza> {
        let donnees = self.verrou();
        let mut comptes_par_pizza: HashMap<&str, i32> = HashMap::new();
        for commande in donnees.commandes.iter() {
            if commande.etat() == EtatCommande::Traitee {
                *comptes_par_pizza.entry(commande.pizza().nom()).or_insert(0) +=
                    commande.quantite();
            }
        }
        let mut classement: Vec<(i32, &Pizza)> = donnees
            .pizzas
            .values()
            .map(|pizza| (comptes_par_pizza.get(pizza.nom()).copied().unwrap_or(0), pizza))
            .collect();
        // Les BTreeMap parcourent par nom : à nombre égal, l'ordre
        // alphabétique est conservé par le tri stable.
        classement.sort_by(|a, b| b.0.cmp(&a.0));
        classement.into_iter().map(|(_, pizza)| pizza.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::client::CompteClient;
    use crate::models::erreurs::ErreurService;
    use crate::services::client_service::ServiceClient;
    use std::io::Write;

    fn info(nom: &str, prenom: &str) -> InformationPersonnelle {
        InformationPersonnelle::new(nom, prenom)
    }

    fn connecter_direct(pizzeria: &Pizzeria, email: &str, nom: &str, prenom: &str) {
        let mut donnees = pizzeria.verrou();
        donnees.comptes.insert(
            email.to_string(),
            CompteClient {
                email: email.to_string(),
                mdp_hash: String::new(),
                info: info(nom, prenom),
            },
        );
        donnees.sessions.insert(email.to_string());
    }

    async fn catalogue(pizzeria: &Pizzeria) {
        assert_eq!(pizzeria.creer_ingredient("tomate", 3.0).await, 0);
        assert_eq!(pizzeria.creer_ingredient("jambon", 4.0).await, 0);
        assert!(pizzeria.creer_pizza("Reine", TypePizza::Viande).await.is_some());
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Reine", "tomate").await, 0);
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Reine", "jambon").await, 0);
        assert!(pizzeria.creer_pizza("Margarita", TypePizza::Vegetarienne).await.is_some());
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Margarita", "tomate").await, 0);
    }

    async fn commander(pizzeria: &Pizzeria, email: &str, nom_pizza: &str, nombre: i32) {
        let commande = pizzeria.debuter_commande(email).await.unwrap();
        pizzeria
            .ajouter_pizza(email, commande.id(), nom_pizza, nombre)
            .await
            .unwrap();
        pizzeria.valider_commande(email, commande.id()).await.unwrap();
    }

    #[tokio::test]
    async fn test_creer_ingredient_codes() {
        let pizzeria = Pizzeria::new();
        assert_eq!(pizzeria.creer_ingredient("", 2.0).await, -1);
        assert_eq!(pizzeria.creer_ingredient("tomate", 0.0).await, -3);
        assert_eq!(pizzeria.creer_ingredient("tomate", 3.0).await, 0);
        assert_eq!(pizzeria.creer_ingredient("tomate", 5.0).await, -2);
    }

    #[tokio::test]
    async fn test_changer_prix_ingredient_codes() {
        let pizzeria = Pizzeria::new();
        assert_eq!(pizzeria.creer_ingredient("tomate", 3.0).await, 0);
        assert_eq!(pizzeria.changer_prix_ingredient("", 2.0).await, -1);
        assert_eq!(pizzeria.changer_prix_ingredient("tomate", -1.0).await, -2);
        assert_eq!(pizzeria.changer_prix_ingredient("basilic", 2.0).await, -3);
        assert_eq!(pizzeria.changer_prix_ingredient("tomate", 4.5).await, 0);
        let ingredients = pizzeria.ingredients().await;
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].prix, 4.5);
    }

    #[tokio::test]
    async fn test_creer_pizza() {
        let pizzeria = Pizzeria::new();
        assert!(pizzeria.creer_pizza("", TypePizza::Viande).await.is_none());
        let reine = pizzeria.creer_pizza("Reine", TypePizza::Viande).await.unwrap();
        assert_eq!(reine.nom(), "Reine");
        // Une pizza du même nom existe déjà.
        assert!(pizzeria.creer_pizza("Reine", TypePizza::Regionale).await.is_none());
    }

    #[tokio::test]
    async fn test_composition_et_interdictions() {
        let pizzeria = Pizzeria::new();
        assert_eq!(pizzeria.creer_ingredient("tomate", 3.0).await, 0);
        assert_eq!(pizzeria.creer_ingredient("jambon", 4.0).await, 0);
        assert!(pizzeria.creer_pizza("Veggie", TypePizza::Vegetarienne).await.is_some());

        assert!(!pizzeria.interdire_ingredient("boeuf", TypePizza::Vegetarienne).await);
        assert!(pizzeria.interdire_ingredient("jambon", TypePizza::Vegetarienne).await);

        assert_eq!(pizzeria.ajouter_ingredient_pizza("Inconnue", "tomate").await, -1);
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Veggie", "").await, -2);
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Veggie", "ananas").await, -2);
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Veggie", "jambon").await, -3);
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Veggie", "tomate").await, 0);
        // Déjà présent : l'ajout est ignoré sans erreur.
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Veggie", "tomate").await, 0);
        let pizzas = ServicePizzaiolo::pizzas(&pizzeria).await;
        let veggie = pizzas.iter().find(|p| p.nom() == "Veggie").unwrap();
        assert_eq!(veggie.ingredients().len(), 1);

        assert_eq!(pizzeria.retirer_ingredient_pizza("Inconnue", "tomate").await, -1);
        assert_eq!(pizzeria.retirer_ingredient_pizza("Veggie", "ananas").await, -2);
        assert_eq!(pizzeria.retirer_ingredient_pizza("Veggie", "jambon").await, -3);
        assert_eq!(pizzeria.retirer_ingredient_pizza("Veggie", "tomate").await, 0);
    }

    #[tokio::test]
    async fn test_verification_apres_interdiction() {
        let pizzeria = Pizzeria::new();
        assert_eq!(pizzeria.creer_ingredient("tomate", 3.0).await, 0);
        assert_eq!(pizzeria.creer_ingredient("jambon", 4.0).await, 0);
        assert!(pizzeria.creer_pizza("Veggie", TypePizza::Vegetarienne).await.is_some());
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Veggie", "jambon").await, 0);
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Veggie", "tomate").await, 0);

        // L'interdiction arrive après la composition.
        assert!(pizzeria.interdire_ingredient("jambon", TypePizza::Vegetarienne).await);

        let interdits = pizzeria.verifier_ingredients_pizza("Veggie").await.unwrap();
        assert_eq!(interdits.len(), 1);
        assert!(interdits.contains("jambon"));
        assert!(pizzeria.verifier_ingredients_pizza("Inconnue").await.is_none());
    }

    #[tokio::test]
    async fn test_prix_minimal_arrondi_a_la_dizaine() {
        let pizzeria = Pizzeria::new();
        assert_eq!(pizzeria.creer_ingredient("tomate", 3.0).await, 0);
        assert_eq!(pizzeria.creer_ingredient("jambon", 4.0).await, 0);
        assert_eq!(pizzeria.creer_ingredient("reblochon", 8.0).await, 0);
        assert!(pizzeria.creer_pizza("Reine", TypePizza::Viande).await.is_some());
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Reine", "tomate").await, 0);
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Reine", "jambon").await, 0);
        // (3 + 4) * 1.4 = 9.8 -> 10
        assert_eq!(pizzeria.prix_minimal_pizza("Reine").await, 10.0);

        assert!(pizzeria.creer_pizza("Savoyarde", TypePizza::Regionale).await.is_some());
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Savoyarde", "reblochon").await, 0);
        assert_eq!(pizzeria.ajouter_ingredient_pizza("Savoyarde", "tomate").await, 0);
        // (8 + 3) * 1.4 = 15.4 -> 20
        assert_eq!(pizzeria.prix_minimal_pizza("Savoyarde").await, 20.0);

        // Pizza sans ingrédient : prix minimal nul.
        assert!(pizzeria.creer_pizza("Vide", TypePizza::Viande).await.is_some());
        assert_eq!(pizzeria.prix_minimal_pizza("Vide").await, 0.0);

        assert_eq!(pizzeria.prix_minimal_pizza("Inconnue").await, -1.0);
    }

    #[tokio::test]
    async fn test_prix_pizza_et_fixation() {
        let pizzeria = Pizzeria::new();
        catalogue(&pizzeria).await;

        // Sans prix fixé, le prix effectif est le prix minimal.
        assert_eq!(pizzeria.prix_pizza("Reine").await, 10.0);

        // En dessous du minimal : refusé, le prix ne bouge pas.
        assert!(!pizzeria.fixer_prix_pizza("Reine", 9.0).await);
        assert_eq!(pizzeria.prix_pizza("Reine").await, 10.0);

        assert!(pizzeria.fixer_prix_pizza("Reine", 12.0).await);
        assert_eq!(pizzeria.prix_pizza("Reine").await, 12.0);

        assert!(!pizzeria.fixer_prix_pizza("Inconnue", 12.0).await);
        assert_eq!(pizzeria.prix_pizza("Inconnue").await, -1.0);
    }

    #[tokio::test]
    async fn test_ajouter_photo() {
        let pizzeria = Pizzeria::new();
        catalogue(&pizzeria).await;

        let dossier = tempfile::tempdir().unwrap();
        let chemin_png = dossier.path().join("reine.png");
        let mut fichier = std::fs::File::create(&chemin_png).unwrap();
        fichier.write_all(b"\x89PNG\r\n\x1a\nreste").unwrap();
        let chemin_texte = dossier.path().join("reine.txt");
        std::fs::write(&chemin_texte, b"pas une image").unwrap();

        let chemin_png = chemin_png.to_str().unwrap().to_string();
        assert!(pizzeria.ajouter_photo("Reine", &chemin_png).await.unwrap());
        let pizzas = ServicePizzaiolo::pizzas(&pizzeria).await;
        let reine = pizzas.iter().find(|p| p.nom() == "Reine").unwrap();
        assert_eq!(reine.chemin_photo(), Some(chemin_png.as_str()));

        // Un fichier qui n'est pas une image est refusé sans erreur.
        assert!(!pizzeria
            .ajouter_photo("Reine", chemin_texte.to_str().unwrap())
            .await
            .unwrap());
        // Pizza inconnue : refus sans toucher au fichier.
        assert!(!pizzeria.ajouter_photo("Inconnue", &chemin_png).await.unwrap());
        // Fichier illisible : l'erreur d'entrée/sortie est propagée.
        assert!(pizzeria.ajouter_photo("Reine", "/introuvable.png").await.is_err());
    }

    #[tokio::test]
    async fn test_file_de_commandes() {
        let pizzeria = Pizzeria::new();
        catalogue(&pizzeria).await;
        connecter_direct(&pizzeria, "luke@tatooine.com", "Skywalker", "Luke");

        commander(&pizzeria, "luke@tatooine.com", "Reine", 2).await;
        commander(&pizzeria, "luke@tatooine.com", "Margarita", 1).await;

        assert!(pizzeria.commandes_deja_traitees().await.is_empty());

        let lues = pizzeria.commandes_non_traitees().await;
        assert_eq!(lues.len(), 2);
        assert!(lues.iter().all(|c| c.etat() == EtatCommande::Traitee));
        assert!(lues[0].date_heure() <= lues[1].date_heure());

        // Une fois lues, elles sont traitées : la file est vide.
        assert!(pizzeria.commandes_non_traitees().await.is_empty());
        assert_eq!(pizzeria.commandes_deja_traitees().await.len(), 2);
    }

    #[tokio::test]
    async fn test_commandes_traitees_client() {
        let pizzeria = Pizzeria::new();
        catalogue(&pizzeria).await;
        connecter_direct(&pizzeria, "luke@tatooine.com", "Skywalker", "Luke");
        connecter_direct(&pizzeria, "leia@alderaan.com", "Organa", "Leia");

        commander(&pizzeria, "luke@tatooine.com", "Reine", 2).await;
        commander(&pizzeria, "leia@alderaan.com", "Margarita", 1).await;
        pizzeria.commandes_non_traitees().await;

        let luke = info("Skywalker", "Luke");
        let commandes = pizzeria.commandes_traitees_client(&luke).await.unwrap();
        assert_eq!(commandes.len(), 1);
        assert_eq!(commandes[0].pizza().nom(), "Reine");

        // Client inconnu du registre des comptes.
        assert!(pizzeria
            .commandes_traitees_client(&info("Solo", "Han"))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_benefices() {
        let pizzeria = Pizzeria::new();
        catalogue(&pizzeria).await;
        // Reine : minimal 10, vendue 12 -> bénéfice unitaire 2.
        assert!(pizzeria.fixer_prix_pizza("Reine", 12.0).await);
        connecter_direct(&pizzeria, "luke@tatooine.com", "Skywalker", "Luke");

        commander(&pizzeria, "luke@tatooine.com", "Reine", 3).await;
        let commandes = pizzeria.commandes_non_traitees().await;
        assert_eq!(commandes.len(), 1);

        let par_pizza = pizzeria.benefice_par_pizza().await;
        let reine = Pizza::new("Reine", TypePizza::Viande);
        assert_eq!(par_pizza.get(&reine).copied(), Some(2.0));
        // La Margarita n'a pas de prix fixé : bénéfice nul.
        let margarita = Pizza::new("Margarita", TypePizza::Vegetarienne);
        assert_eq!(par_pizza.get(&margarita).copied(), Some(0.0));

        let commande = &commandes[0];
        assert_eq!(
            pizzeria
                .benefice_commande(commande.email_client(), commande.date_heure())
                .await,
            6.0
        );
        assert_eq!(
            pizzeria.benefice_commande("inconnu@mail.com", Utc::now()).await,
            -1.0
        );
        assert_eq!(pizzeria.benefice_toutes_commandes().await, 6.0);
    }

    #[tokio::test]
    async fn test_statistiques_par_client() {
        let pizzeria = Pizzeria::new();
        catalogue(&pizzeria).await;
        assert!(pizzeria.fixer_prix_pizza("Reine", 12.0).await);
        connecter_direct(&pizzeria, "luke@tatooine.com", "Skywalker", "Luke");
        connecter_direct(&pizzeria, "leia@alderaan.com", "Organa", "Leia");

        commander(&pizzeria, "luke@tatooine.com", "Reine", 2).await;
        commander(&pizzeria, "luke@tatooine.com", "Margarita", 1).await;
        commander(&pizzeria, "leia@alderaan.com", "Reine", 1).await;
        pizzeria.commandes_non_traitees().await;

        let nombres = pizzeria.nombre_pizzas_commandees_par_client().await;
        assert_eq!(nombres.get(&info("Skywalker", "Luke")).copied(), Some(3));
        assert_eq!(nombres.get(&info("Organa", "Leia")).copied(), Some(1));

        let benefices = pizzeria.benefice_par_client().await;
        assert_eq!(benefices.get(&info("Skywalker", "Luke")).copied(), Some(4.0));
        assert_eq!(benefices.get(&info("Organa", "Leia")).copied(), Some(2.0));
    }

    #[tokio::test]
    async fn test_classement_et_nombre_commandes() {
        let pizzeria = Pizzeria::new();
        catalogue(&pizzeria).await;
        connecter_direct(&pizzeria, "luke@tatooine.com", "Skywalker", "Luke");

        commander(&pizzeria, "luke@tatooine.com", "Margarita", 5).await;
        commander(&pizzeria, "luke@tatooine.com", "Reine", 2).await;
        pizzeria.commandes_non_traitees().await;

        assert_eq!(pizzeria.nombre_pizzas_commandees("Margarita").await, 5);
        assert_eq!(pizzeria.nombre_pizzas_commandees("Reine").await, 2);
        assert_eq!(pizzeria.nombre_pizzas_commandees("Inconnue").await, -1);

        let classement = pizzeria.classement_pizzas_par_nombre_commandes().await;
        assert_eq!(classement.len(), 2);
        assert_eq!(classement[0].nom(), "Margarita");
        assert_eq!(classement[1].nom(), "Reine");
    }

    #[tokio::test]
    async fn test_statistiques_sur_commandes_traitees_seulement() {
        let pizzeria = Pizzeria::new();
        catalogue(&pizzeria).await;
        assert!(pizzeria.fixer_prix_pizza("Reine", 12.0).await);
        connecter_direct(&pizzeria, "luke@tatooine.com", "Skywalker", "Luke");

        // Commande validée mais pas encore traitée : aucune statistique.
        commander(&pizzeria, "luke@tatooine.com", "Reine", 2).await;
        assert_eq!(pizzeria.nombre_pizzas_commandees("Reine").await, 0);
        assert_eq!(pizzeria.benefice_toutes_commandes().await, 0.0);
        assert!(pizzeria.nombre_pizzas_commandees_par_client().await.is_empty());

        pizzeria.commandes_non_traitees().await;
        assert_eq!(pizzeria.nombre_pizzas_commandees("Reine").await, 2);
        assert_eq!(pizzeria.benefice_toutes_commandes().await, 4.0);
    }
}
