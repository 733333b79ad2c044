use async_trait::async_trait;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::models::client::CompteClient;
use crate::models::commande::{Commande, CommandeEnCours, EtatCommande};
use crate::models::erreurs::ErreurService;
use crate::models::evaluation::Evaluation;
use crate::models::information_personnelle::InformationPersonnelle;
use crate::models::pizza::{Pizza, TypePizza};
use crate::state::{Donnees, Pizzeria};
use crate::utils::password;

/// Services utilisés par un client pour commander et évaluer des pizzas.
///
/// Les opérations de commande exigent un client connecté et échouent avec
/// [`ErreurService::NonConnecte`] sinon. Les problèmes liés aux commandes
/// elles-mêmes (commande inconnue, commande d'un autre client, contenu
/// invalide) échouent avec [`ErreurService::Commande`].
#[async_trait]
pub trait ServiceClient {
    /// Inscription d'un client. L'email choisi ne doit pas déjà exister.
    ///
    /// Renvoie 0 si l'inscription s'est bien déroulée, -1 si l'email est
    /// déjà utilisé, -2 si l'email ou le mot de passe est vide, -3 si les
    /// informations personnelles ne sont pas bien précisées, -4 si l'email
    /// n'est pas bien formé.
    async fn inscription(&self, email: &str, mdp: &str, info: InformationPersonnelle) -> i32;

    /// Connexion d'un client. Renvoie false en cas de couple email/mot de
    /// passe invalide.
    async fn connexion(&self, email: &str, mdp: &str) -> bool;

    /// Déconnecte le client.
    async fn deconnexion(&self, email: &str) -> Result<(), ErreurService>;

    /// Crée une nouvelle commande en cours pour le client connecté. On y
    /// ajoutera des pizzas avant de la valider.
    async fn debuter_commande(&self, email: &str) -> Result<CommandeEnCours, ErreurService>;

    /// Ajoute un certain nombre d'une pizza à une commande en cours.
    async fn ajouter_pizza(
        &self,
        email: &str,
        commande: Uuid,
        nom_pizza: &str,
        nombre: i32,
    ) -> Result<CommandeEnCours, ErreurService>;

    /// Valide une commande en cours : elle devient visible par le pizzaïolo
    /// et le client ne peut plus la modifier.
    async fn valider_commande(&self, email: &str, commande: Uuid)
        -> Result<Commande, ErreurService>;

    /// Annule une commande en cours : elle n'existe plus ensuite.
    async fn annuler_commande(&self, email: &str, commande: Uuid) -> Result<(), ErreurService>;

    /// Les commandes en cours du client connecté, de la plus ancienne à la
    /// plus récente.
    async fn commandes_en_cours(&self, email: &str)
        -> Result<Vec<CommandeEnCours>, ErreurService>;

    /// Les commandes validées du client connecté, pas nécessairement encore
    /// traitées par le pizzaïolo, de la plus ancienne à la plus récente.
    async fn commandes_passees(&self, email: &str) -> Result<Vec<Commande>, ErreurService>;

    /// L'ensemble des pizzas en vente.
    async fn pizzas(&self) -> Vec<Pizza>;

    /// Ne conserve que les pizzas du type défini.
    async fn ajouter_filtre_type(&self, email: &str, type_pizza: TypePizza);

    /// Ne conserve que les pizzas contenant tous ces ingrédients. Un
    /// ingrédient inconnu est ignoré.
    async fn ajouter_filtre_ingredients(&self, email: &str, ingredients: &[String]);

    /// Ne conserve que les pizzas dont le prix est inférieur ou égal à ce
    /// prix. Ignoré si le prix n'est pas strictement positif.
    async fn ajouter_filtre_prix(&self, email: &str, prix_maximum: f64);

    /// Les pizzas qui valident tous les filtres définis par ce client.
    async fn selection_pizzas_filtrees(&self, email: &str) -> Vec<Pizza>;

    /// Supprime tous les filtres définis par ce client.
    async fn supprimer_filtres(&self, email: &str);

    /// Les évaluations d'une pizza, ou None si la pizza est inconnue.
    async fn evaluations_pizza(&self, nom_pizza: &str) -> Option<Vec<Evaluation>>;

    /// La note moyenne d'une pizza : -1 si aucune évaluation n'existe, -2 si
    /// la pizza est inconnue.
    async fn note_moyenne(&self, nom_pizza: &str) -> f64;

    /// Ajoute une évaluation de la part du client connecté. Le client doit
    /// avoir commandé la pizza dans une commande validée, sinon l'opération
    /// échoue avec [`ErreurService::Commande`]. Renvoie false sans rien
    /// ajouter si la pizza est inconnue, si la note est hors de [0, 5] ou si
    /// le client avait déjà évalué cette pizza.
    async fn ajouter_evaluation(
        &self,
        email: &str,
        nom_pizza: &str,
        note: i32,
        commentaire: Option<String>,
    ) -> Result<bool, ErreurService>;
}

fn exige_session(donnees: &Donnees, email: &str) -> Result<(), ErreurService> {
    if donnees.sessions.contains(email) {
        Ok(())
    } else {
        Err(ErreurService::NonConnecte)
    }
}

#[async_trait]
impl ServiceClient for Pizzeria {
    async fn inscription(&self, email: &str, mdp: &str, info: InformationPersonnelle) -> i32 {
        if email.is_empty() || mdp.is_empty() {
            return -2;
        }
        if !email.validate_email() {
            return -4;
        }
        if info.nom().is_empty() || info.prenom().is_empty() {
            return -3;
        }

        let mut donnees = self.verrou();
        if donnees.comptes.contains_key(email) {
            return -1;
        }

        let mdp_hash = match password::hash_password(mdp) {
            Ok(hash) => hash,
            Err(_) => return -2,
        };
        donnees.comptes.insert(
            email.to_string(),
            CompteClient {
                email: email.to_string(),
                mdp_hash,
                info,
            },
        );
        0
    }

    async fn connexion(&self, email: &str, mdp: &str) -> bool {
        let mut donnees = self.verrou();
        let valide = match donnees.comptes.get(email) {
            Some(compte) => password::verify_password(mdp, &compte.mdp_hash).unwrap_or(false),
            None => false,
        };
        if valide {
            donnees.sessions.insert(email.to_string());
        }
        valide
    }

    async fn deconnexion(&self, email: &str) -> Result<(), ErreurService> {
        let mut donnees = self.verrou();
        if donnees.sessions.remove(email) {
            Ok(())
        } else {
            Err(ErreurService::NonConnecte)
        }
    }

    async fn debuter_commande(&self, email: &str) -> Result<CommandeEnCours, ErreurService> {
        let mut donnees = self.verrou();
        exige_session(&donnees, email)?;
        let commande = CommandeEnCours::new(email);
        donnees.en_cours.push(commande.clone());
        Ok(commande)
    }

    async fn ajouter_pizza(
        &self,
        email: &str,
        commande: Uuid,
        nom_pizza: &str,
        nombre: i32,
    ) -> Result<CommandeEnCours, ErreurService> {
        let mut donnees = self.verrou();
        exige_session(&donnees, email)?;
        if nombre <= 0 || !donnees.pizzas.contains_key(nom_pizza) {
            return Err(ErreurService::Commande);
        }
        let brouillon = donnees
            .en_cours
            .iter_mut()
            .find(|c| c.id() == commande && c.email_client() == email)
            .ok_or(ErreurService::Commande)?;
        if !brouillon.ajouter(nom_pizza, nombre) {
            return Err(ErreurService::Commande);
        }
        Ok(brouillon.clone())
    }

    async fn valider_commande(
        &self,
        email: &str,
        commande: Uuid,
    ) -> Result<Commande, ErreurService> {
        let mut donnees = self.verrou();
        exige_session(&donnees, email)?;
        let position = donnees
            .en_cours
            .iter()
            .position(|c| c.id() == commande && c.email_client() == email)
            .ok_or(ErreurService::Commande)?;
        // Une commande sans pizza ne peut pas être validée.
        let nom_pizza = donnees.en_cours[position]
            .pizza()
            .map(str::to_string)
            .ok_or(ErreurService::Commande)?;
        let pizza = donnees
            .pizzas
            .get(&nom_pizza)
            .cloned()
            .ok_or(ErreurService::Commande)?;

        let brouillon = donnees.en_cours.remove(position);
        let mut validee = Commande::datee(email, pizza, brouillon.quantite(), brouillon.date_heure());
        validee.set_etat(EtatCommande::Validee);
        donnees.commandes.push(validee.clone());
        Ok(validee)
    }

    async fn annuler_commande(&self, email: &str, commande: Uuid) -> Result<(), ErreurService> {
        let mut donnees = self.verrou();
        exige_session(&donnees, email)?;
        let position = donnees
            .en_cours
            .iter()
            .position(|c| c.id() == commande && c.email_client() == email)
            .ok_or(ErreurService::Commande)?;
        donnees.en_cours.remove(position);
        Ok(())
    }

    async fn commandes_en_cours(
        &self,
        email: &str,
    ) -> Result<Vec<CommandeEnCours>, ErreurService> {
        let donnees = self.verrou();
        exige_session(&donnees, email)?;
        Ok(donnees
            .en_cours
            .iter()
            .filter(|c| c.email_client() == email)
            .cloned()
            .collect())
    }

    async fn commandes_passees(&self, email: &str) -> Result<Vec<Commande>, ErreurService> {
        let donnees = self.verrou();
        exige_session(&donnees, email)?;
        let mut passees: Vec<Commande> = donnees
            .commandes
            .iter()
            .filter(|c| c.email_client() == email)
            .cloned()
            .collect();
        passees.sort_by_key(|c| c.date_heure());
        Ok(passees)
    }

    async fn pizzas(&self) -> Vec<Pizza> {
        self.verrou().pizzas.values().cloned().collect()
    }

    async fn ajouter_filtre_type(&self, email: &str, type_pizza: TypePizza) {
        let mut donnees = self.verrou();
        donnees
            .filtres
            .entry(email.to_string())
            .or_default()
            .fixer_type(type_pizza);
    }

    async fn ajouter_filtre_ingredients(&self, email: &str, ingredients: &[String]) {
        let mut donnees = self.verrou();
        // Seuls les ingrédients connus du registre sont retenus.
        let connus: Vec<String> = ingredients
            .iter()
            .filter(|nom| donnees.ingredients.contains_key(*nom))
            .cloned()
            .collect();
        donnees
            .filtres
            .entry(email.to_string())
            .or_default()
            .exiger_ingredients(connus.iter().map(String::as_str));
    }

    async fn ajouter_filtre_prix(&self, email: &str, prix_maximum: f64) {
        let mut donnees = self.verrou();
        donnees
            .filtres
            .entry(email.to_string())
            .or_default()
            .fixer_prix_maximum(prix_maximum);
    }

    async fn selection_pizzas_filtrees(&self, email: &str) -> Vec<Pizza> {
        let donnees = self.verrou();
        let filtres = donnees.filtres.get(email).cloned().unwrap_or_default();
        donnees
            .pizzas
            .values()
            .filter(|pizza| filtres.accepte(pizza, donnees.prix_effectif(pizza)))
            .cloned()
            .collect()
    }

    async fn supprimer_filtres(&self, email: &str) {
        self.verrou().filtres.remove(email);
    }

    async fn evaluations_pizza(&self, nom_pizza: &str) -> Option<Vec<Evaluation>> {
        self.verrou()
            .pizzas
            .get(nom_pizza)
            .map(|pizza| pizza.evaluations().to_vec())
    }

    async fn note_moyenne(&self, nom_pizza: &str) -> f64 {
        let donnees = self.verrou();
        match donnees.pizzas.get(nom_pizza) {
            None => -2.0,
            Some(pizza) if pizza.evaluations().is_empty() => -1.0,
            Some(pizza) => {
                let total: i32 = pizza.evaluations().iter().map(Evaluation::note).sum();
                f64::from(total) / pizza.evaluations().len() as f64
            }
        }
    }

    async fn ajouter_evaluation(
        &self,
        email: &str,
        nom_pizza: &str,
        note: i32,
        commentaire: Option<String>,
    ) -> Result<bool, ErreurService> {
        let mut donnees = self.verrou();
        exige_session(&donnees, email)?;
        if !donnees.pizzas.contains_key(nom_pizza) {
            return Ok(false);
        }
        if !donnees.a_commande(email, nom_pizza) {
            return Err(ErreurService::Commande);
        }
        if !(0..=5).contains(&note) {
            return Ok(false);
        }
        let cle = (email.to_string(), nom_pizza.to_string());
        if donnees.evaluations_faites.contains(&cle) {
            return Ok(false);
        }

        let evaluation = Evaluation::avec_commentaire(note, commentaire.as_deref().unwrap_or(""));
        if let Some(pizza) = donnees.pizzas.get_mut(nom_pizza) {
            pizza.ajouter_evaluation(evaluation);
        }
        donnees.evaluations_faites.insert(cle);
        Ok(true)
    }
}
