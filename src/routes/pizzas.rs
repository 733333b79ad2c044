use actix_web::{delete, get, post, web, HttpResponse};
use serde::Deserialize;

use crate::middleware::AuthClient;
use crate::models::dto::NoteMoyenneResponse;
use crate::models::pizza::TypePizza;
use crate::routes::reponse_erreur;
use crate::services::client_service::ServiceClient;
use crate::state::Pizzeria;

// DTO pour le filtre par type
#[derive(Deserialize)]
pub struct FiltreTypeRequest {
    #[serde(rename = "type")]
    pub type_pizza: TypePizza,
}

// DTO pour le filtre par ingrédients
#[derive(Deserialize)]
pub struct FiltreIngredientsRequest {
    pub ingredients: Vec<String>,
}

// DTO pour le filtre de prix maximum
#[derive(Deserialize)]
pub struct FiltrePrixRequest {
    pub prix_maximum: f64,
}

// DTO pour déposer une évaluation
#[derive(Deserialize)]
pub struct EvaluationRequest {
    pub note: i32,
    pub commentaire: Option<String>,
}

/// GET /pizzas - Le catalogue complet (PUBLIC)
#[get("")]
pub async fn catalogue(pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    HttpResponse::Ok().json(pizzeria.pizzas().await)
}

/// POST /pizzas/filtres/type - Filtrer le catalogue par type (PROTÉGÉE)
#[post("/filtres/type")]
pub async fn filtre_type(
    client: AuthClient,
    body: web::Json<FiltreTypeRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    pizzeria.ajouter_filtre_type(&client.email, body.type_pizza).await;
    HttpResponse::Ok().json(serde_json::json!({ "message": "Filtre ajouté" }))
}

/// POST /pizzas/filtres/ingredients - Exiger des ingrédients (PROTÉGÉE)
#[post("/filtres/ingredients")]
pub async fn filtre_ingredients(
    client: AuthClient,
    body: web::Json<FiltreIngredientsRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    pizzeria
        .ajouter_filtre_ingredients(&client.email, &body.ingredients)
        .await;
    HttpResponse::Ok().json(serde_json::json!({ "message": "Filtre ajouté" }))
}

/// POST /pizzas/filtres/prix - Fixer un prix maximum (PROTÉGÉE)
#[post("/filtres/prix")]
pub async fn filtre_prix(
    client: AuthClient,
    body: web::Json<FiltrePrixRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    pizzeria.ajouter_filtre_prix(&client.email, body.prix_maximum).await;
    HttpResponse::Ok().json(serde_json::json!({ "message": "Filtre ajouté" }))
}

/// GET /pizzas/filtres/selection - Les pizzas validant tous les filtres (PROTÉGÉE)
#[get("/filtres/selection")]
pub async fn selection(client: AuthClient, pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    HttpResponse::Ok().json(pizzeria.selection_pizzas_filtrees(&client.email).await)
}

/// DELETE /pizzas/filtres - Supprimer tous les filtres (PROTÉGÉE)
#[delete("/filtres")]
pub async fn supprimer_filtres(
    client: AuthClient,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    pizzeria.supprimer_filtres(&client.email).await;
    HttpResponse::Ok().json(serde_json::json!({ "message": "Filtres supprimés" }))
}

/// GET /pizzas/{nom}/evaluations - Les évaluations d'une pizza (PUBLIC)
#[get("/{nom}/evaluations")]
pub async fn evaluations_pizza(
    path: web::Path<String>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    let nom = path.into_inner();
    match pizzeria.evaluations_pizza(&nom).await {
        Some(evaluations) => HttpResponse::Ok().json(evaluations),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Pizza inconnue: {}", nom)
        })),
    }
}

/// GET /pizzas/{nom}/note - La note moyenne d'une pizza (PUBLIC)
/// La note vaut -1 tant qu'aucune évaluation n'existe.
#[get("/{nom}/note")]
pub async fn note_moyenne(
    path: web::Path<String>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    let nom = path.into_inner();
    let note = pizzeria.note_moyenne(&nom).await;
    if note == -2.0 {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Pizza inconnue: {}", nom)
        }));
    }
    HttpResponse::Ok().json(NoteMoyenneResponse {
        pizza: nom,
        note_moyenne: note,
    })
}

/// POST /pizzas/{nom}/evaluations - Évaluer une pizza (PROTÉGÉE)
/// Le client doit avoir commandé la pizza dans une commande validée.
#[post("/{nom}/evaluations")]
pub async fn ajouter_evaluation(
    client: AuthClient,
    path: web::Path<String>,
    body: web::Json<EvaluationRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    let nom = path.into_inner();
    match pizzeria
        .ajouter_evaluation(&client.email, &nom, body.note, body.commentaire.clone())
        .await
    {
        Ok(true) => HttpResponse::Created().json(serde_json::json!({
            "message": "Évaluation ajoutée"
        })),
        Ok(false) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Évaluation non ajoutée (pizza inconnue, note invalide ou évaluation déjà faite)"
        })),
        Err(erreur) => reponse_erreur(erreur),
    }
}

pub fn pizzas_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pizzas")
            .service(catalogue)
            // Les routes fixes avant les routes à segment dynamique
            .service(filtre_type)
            .service(filtre_ingredients)
            .service(filtre_prix)
            .service(selection)
            .service(supprimer_filtres)
            .service(evaluations_pizza)
            .service(note_moyenne)
            .service(ajouter_evaluation)
    );
}
