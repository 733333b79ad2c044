pub mod auth;
pub mod commandes;
pub mod health;
pub mod pizzaiolo;
pub mod pizzas;

use actix_web::{web, HttpResponse};

use crate::models::erreurs::ErreurService;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(health::health_check)
            .configure(auth::auth_routes)
            .configure(pizzas::pizzas_routes)
            .configure(commandes::commandes_routes)
            .configure(pizzaiolo::pizzaiolo_routes),
    );
}

// Traduction HTTP des deux familles d'échec des services.
pub(crate) fn reponse_erreur(erreur: ErreurService) -> HttpResponse {
    match erreur {
        ErreurService::NonConnecte => HttpResponse::Unauthorized().json(serde_json::json!({
            "error": erreur.to_string()
        })),
        ErreurService::Commande => HttpResponse::BadRequest().json(serde_json::json!({
            "error": erreur.to_string()
        })),
    }
}
