use actix_web::{post, get, web, HttpResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::middleware::AuthClient;
use crate::models::information_personnelle::InformationPersonnelle;
use crate::routes::reponse_erreur;
use crate::services::client_service::ServiceClient;
use crate::state::Pizzeria;
use crate::utils::jwt;

// DTO pour l'inscription
#[derive(Deserialize)]
pub struct InscriptionRequest {
    pub email: String,
    pub mdp: String,
    pub nom: String,
    pub prenom: String,
    pub adresse: Option<String>,
    pub age: Option<i32>,
}

// DTO pour la connexion
#[derive(Deserialize, Validate)]
pub struct ConnexionRequest {
    #[validate(email)]
    pub email: String,
    pub mdp: String,
}

// Réponse après connexion
#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub email: String,
}

/// POST /auth/inscription - Créer un compte client (PUBLIC)
#[post("/inscription")]
pub async fn inscription(
    body: web::Json<InscriptionRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    // 1. Construire les informations personnelles du client
    let info = InformationPersonnelle::complete(
        &body.nom,
        &body.prenom,
        body.adresse.clone(),
        body.age.unwrap_or(0),
    );

    // 2. Tenter l'inscription
    let code = pizzeria.inscription(&body.email, &body.mdp, info).await;

    // 3. Traduire le code de retour
    match code {
        0 => HttpResponse::Created().json(serde_json::json!({
            "code": 0,
            "message": "Inscription réussie"
        })),
        -1 => HttpResponse::Conflict().json(serde_json::json!({
            "code": -1,
            "error": "Email déjà utilisé"
        })),
        -2 => HttpResponse::BadRequest().json(serde_json::json!({
            "code": -2,
            "error": "Email ou mot de passe vide"
        })),
        -3 => HttpResponse::BadRequest().json(serde_json::json!({
            "code": -3,
            "error": "Informations personnelles mal précisées"
        })),
        _ => HttpResponse::BadRequest().json(serde_json::json!({
            "code": -4,
            "error": "Adresse email mal formée"
        })),
    }
}

/// POST /auth/connexion - Se connecter (PUBLIC)
#[post("/connexion")]
pub async fn connexion(
    body: web::Json<ConnexionRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    if let Err(errors) = body.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    // 1. Vérifier le couple email / mot de passe
    if !pizzeria.connexion(&body.email, &body.mdp).await {
        return HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Email ou mot de passe invalide"
        }));
    }

    // 2. Générer le JWT de session
    match jwt::generate_token(&body.email) {
        Ok(token) => HttpResponse::Ok().json(AuthResponse {
            token,
            email: body.email.clone(),
        }),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to generate token: {}", e)
        })),
    }
}

/// POST /auth/deconnexion - Se déconnecter (PROTÉGÉE)
#[post("/deconnexion")]
pub async fn deconnexion(client: AuthClient, pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    match pizzeria.deconnexion(&client.email).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Déconnexion réussie"
        })),
        Err(erreur) => reponse_erreur(erreur),
    }
}

/// GET /auth/me - Vérifier le token (PROTÉGÉE)
#[get("/me")]
pub async fn me(client: AuthClient) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "email": client.email
    }))
}

pub fn auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(inscription)
            .service(connexion)
            .service(deconnexion)
            .service(me)
    );
}
