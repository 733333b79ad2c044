//pour les réponses structurées des statistiques
use serde::Serialize;

use crate::models::information_personnelle::InformationPersonnelle;

#[derive(Debug, Serialize)]
pub struct NoteMoyenneResponse {
    pub pizza: String,
    pub note_moyenne: f64,
}

#[derive(Debug, Serialize)]
pub struct BeneficePizzaResponse {
    pub pizza: String,
    pub benefice: f64,
}

#[derive(Debug, Serialize)]
pub struct PizzasParClientResponse {
    pub client: InformationPersonnelle,
    pub nombre_pizzas: i32,
}

#[derive(Debug, Serialize)]
pub struct BeneficeClientResponse {
    pub client: InformationPersonnelle,
    pub benefice: f64,
}

#[derive(Debug, Serialize)]
pub struct ClassementPizzaResponse {
    pub pizza: String,
    pub nombre_commandes: i32,
}
