use actix_web::{delete, get, post, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::middleware::AuthClient;
use crate::routes::reponse_erreur;
use crate::services::client_service::ServiceClient;
use crate::state::Pizzeria;

// DTO pour ajouter des pizzas à une commande en cours
#[derive(Deserialize)]
pub struct AjoutPizzaRequest {
    pub pizza: String,
    pub nombre: i32,
}

/// POST /commandes - Débuter une nouvelle commande (PROTÉGÉE)
#[post("")]
pub async fn debuter(client: AuthClient, pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    match pizzeria.debuter_commande(&client.email).await {
        Ok(commande) => HttpResponse::Created().json(commande),
        Err(erreur) => reponse_erreur(erreur),
    }
}

/// POST /commandes/{id}/pizzas - Ajouter des pizzas à une commande en cours (PROTÉGÉE)
#[post("/{id}/pizzas")]
pub async fn ajouter_pizza(
    client: AuthClient,
    path: web::Path<Uuid>,
    body: web::Json<AjoutPizzaRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    match pizzeria
        .ajouter_pizza(&client.email, path.into_inner(), &body.pizza, body.nombre)
        .await
    {
        Ok(commande) => HttpResponse::Ok().json(commande),
        Err(erreur) => reponse_erreur(erreur),
    }
}

/// POST /commandes/{id}/validation - Valider une commande en cours (PROTÉGÉE)
/// La commande devient visible par le pizzaïolo et n'est plus modifiable.
#[post("/{id}/validation")]
pub async fn valider(
    client: AuthClient,
    path: web::Path<Uuid>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    match pizzeria.valider_commande(&client.email, path.into_inner()).await {
        Ok(commande) => HttpResponse::Ok().json(commande),
        Err(erreur) => reponse_erreur(erreur),
    }
}

/// DELETE /commandes/{id} - Annuler une commande en cours (PROTÉGÉE)
#[delete("/{id}")]
pub async fn annuler(
    client: AuthClient,
    path: web::Path<Uuid>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    match pizzeria.annuler_commande(&client.email, path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(erreur) => reponse_erreur(erreur),
    }
}

/// GET /commandes/en-cours - Les commandes en cours du client (PROTÉGÉE)
#[get("/en-cours")]
pub async fn en_cours(client: AuthClient, pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    match pizzeria.commandes_en_cours(&client.email).await {
        Ok(commandes) => HttpResponse::Ok().json(commandes),
        Err(erreur) => reponse_erreur(erreur),
    }
}

/// GET /commandes/passees - Les commandes validées du client (PROTÉGÉE)
#[get("/passees")]
pub async fn passees(client: AuthClient, pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    match pizzeria.commandes_passees(&client.email).await {
        Ok(commandes) => HttpResponse::Ok().json(commandes),
        Err(erreur) => reponse_erreur(erreur),
    }
}

pub fn commandes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/commandes")
            .service(debuter)
            // Les routes fixes avant les routes à segment dynamique
            .service(en_cours)
            .service(passees)
            .service(ajouter_pizza)
            .service(valider)
            .service(annuler)
    );
}
