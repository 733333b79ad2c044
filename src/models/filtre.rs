use serde::Serialize;

use crate::models::pizza::{Pizza, TypePizza};

/// Filtres actifs d'un client sur le catalogue. Les trois critères se
/// cumulent : une pizza doit tous les valider pour être conservée.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Filtres {
    type_pizza: Option<TypePizza>,
    ingredients: Vec<String>,
    prix_maximum: Option<f64>,
}

impl Filtres {
    /// Ne conserve que les pizzas du type donné. Un seul type à la fois, le
    /// dernier défini l'emporte.
    pub fn fixer_type(&mut self, type_pizza: TypePizza) {
        self.type_pizza = Some(type_pizza);
    }

    /// Exige que les pizzas contiennent tous ces ingrédients. L'appelant ne
    /// transmet que des noms d'ingrédients connus.
    pub fn exiger_ingredients<'a>(&mut self, ingredients: impl IntoIterator<Item = &'a str>) {
        for ingredient in ingredients {
            if !self.ingredients.iter().any(|i| i == ingredient) {
                self.ingredients.push(ingredient.to_string());
            }
        }
    }

    /// Fixe le prix maximum des pizzas conservées. Ignoré si le prix n'est
    /// pas strictement positif.
    pub fn fixer_prix_maximum(&mut self, prix: f64) {
        if prix > 0.0 {
            self.prix_maximum = Some(prix);
        }
    }

    /// Vérifie qu'une pizza valide tous les filtres définis. Le prix
    /// transmis est le prix effectif de vente de la pizza.
    pub fn accepte(&self, pizza: &Pizza, prix: f64) -> bool {
        if let Some(type_filtre) = self.type_pizza {
            if pizza.type_pizza() != type_filtre {
                return false;
            }
        }
        let contient_tout = self
            .ingredients
            .iter()
            .all(|exige| pizza.ingredients().iter().any(|i| i == exige));
        if !contient_tout {
            return false;
        }
        match self.prix_maximum {
            Some(maximum) => prix <= maximum,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reine() -> Pizza {
        let mut pizza = Pizza::new("Reine", TypePizza::Viande);
        pizza.ajouter_ingredient("tomate");
        pizza.ajouter_ingredient("jambon");
        pizza
    }

    #[test]
    fn test_sans_filtre_tout_passe() {
        let filtres = Filtres::default();
        assert!(filtres.accepte(&reine(), 12.0));
    }

    #[test]
    fn test_filtre_type() {
        let mut filtres = Filtres::default();
        filtres.fixer_type(TypePizza::Vegetarienne);
        assert!(!filtres.accepte(&reine(), 12.0));
        // Le dernier type défini l'emporte.
        filtres.fixer_type(TypePizza::Viande);
        assert!(filtres.accepte(&reine(), 12.0));
    }

    #[test]
    fn test_filtre_ingredients_conjonction() {
        let mut filtres = Filtres::default();
        filtres.exiger_ingredients(["tomate", "jambon"]);
        assert!(filtres.accepte(&reine(), 12.0));
        filtres.exiger_ingredients(["champignon"]);
        assert!(!filtres.accepte(&reine(), 12.0));
    }

    #[test]
    fn test_filtre_prix() {
        let mut filtres = Filtres::default();
        filtres.fixer_prix_maximum(10.0);
        assert!(!filtres.accepte(&reine(), 12.0));
        assert!(filtres.accepte(&reine(), 10.0));
    }

    #[test]
    fn test_prix_non_positif_ignore() {
        let mut filtres = Filtres::default();
        filtres.fixer_prix_maximum(0.0);
        assert!(filtres.accepte(&reine(), 1000.0));
        filtres.fixer_prix_maximum(-5.0);
        assert!(filtres.accepte(&reine(), 1000.0));
    }

    #[test]
    fn test_criteres_cumules() {
        let mut filtres = Filtres::default();
        filtres.fixer_type(TypePizza::Viande);
        filtres.exiger_ingredients(["jambon"]);
        filtres.fixer_prix_maximum(15.0);
        assert!(filtres.accepte(&reine(), 12.0));
        assert!(!filtres.accepte(&reine(), 16.0));
    }
}
