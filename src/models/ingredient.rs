use serde::Serialize;

/// Ingrédient disponible pour composer des pizzas, avec son prix. Le nom
/// sert de clé : le registre du pizzaïolo n'en garde qu'un par nom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub nom: String,
    pub prix: f64,
}

impl Ingredient {
    pub(crate) fn new(nom: &str, prix: f64) -> Self {
        Self {
            nom: nom.to_string(),
            prix,
        }
    }
}
