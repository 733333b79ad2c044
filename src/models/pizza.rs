use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::models::evaluation::Evaluation;

/// Type d'une pizza parmi viande, végétarienne ou régionale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypePizza {
    /// Pizzas classiques à la viande : reine, pepperoni, bolognaise...
    Viande,
    /// Pizzas végétariennes : quatre fromages, vegan aux légumes...
    Vegetarienne,
    /// Pizzas composées d'ingrédients régionaux : bretonne aux noix de
    /// Saint-Jacques, landaise au canard, savoyarde au reblochon...
    Regionale,
}

impl fmt::Display for TypePizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nom = match self {
            TypePizza::Viande => "Viande",
            TypePizza::Vegetarienne => "Vegetarienne",
            TypePizza::Regionale => "Regionale",
        };
        write!(f, "{nom}")
    }
}

/// Pizza disponible dans l'application : un nom unique, un type, des
/// ingrédients, un prix de vente, une photo optionnelle et les évaluations
/// laissées par les clients.
#[derive(Debug, Clone, Serialize)]
pub struct Pizza {
    nom: String,
    #[serde(rename = "type")]
    type_pizza: TypePizza,
    ingredients: Vec<String>,
    prix_vente: f64,
    chemin_photo: Option<String>,
    evaluations: Vec<Evaluation>,
}

impl Pizza {
    pub fn new(nom: &str, type_pizza: TypePizza) -> Self {
        Self {
            nom: nom.to_string(),
            type_pizza,
            ingredients: Vec::new(),
            prix_vente: 0.0,
            chemin_photo: None,
            evaluations: Vec::new(),
        }
    }

    pub fn nom(&self) -> &str {
        &self.nom
    }

    pub fn type_pizza(&self) -> TypePizza {
        self.type_pizza
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn prix_vente(&self) -> f64 {
        self.prix_vente
    }

    pub fn set_prix_vente(&mut self, prix: f64) {
        self.prix_vente = prix;
    }

    pub fn chemin_photo(&self) -> Option<&str> {
        self.chemin_photo.as_deref()
    }

    pub fn set_chemin_photo(&mut self, chemin: Option<String>) {
        self.chemin_photo = chemin;
    }

    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    /// Ajoute un ingrédient en fin de liste. Un même nom peut apparaitre
    /// plusieurs fois et compte alors pour autant d'occurrences.
    pub fn ajouter_ingredient(&mut self, ingredient: &str) {
        self.ingredients.push(ingredient.to_string());
    }

    /// Retire la première occurrence de l'ingrédient. Renvoie false si la
    /// pizza ne le contenait pas.
    pub(crate) fn retirer_ingredient(&mut self, ingredient: &str) -> bool {
        match self.ingredients.iter().position(|i| i == ingredient) {
            Some(position) => {
                self.ingredients.remove(position);
                true
            }
            None => false,
        }
    }

    /// Ajoute une évaluation en fin de liste, sans dédoublonnage.
    pub fn ajouter_evaluation(&mut self, evaluation: Evaluation) {
        self.evaluations.push(evaluation);
    }
}

// L'identité d'une pizza est son nom : deux pizzas de même nom sont la même
// pizza, quels que soient leur type et leur prix.
impl PartialEq for Pizza {
    fn eq(&self, other: &Self) -> bool {
        self.nom == other.nom
    }
}

impl Eq for Pizza {}

impl Hash for Pizza {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nom.hash(state);
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pizza[nom={}, type={}, prix={}]",
            self.nom, self.type_pizza, self.prix_vente
        )
    }
}
