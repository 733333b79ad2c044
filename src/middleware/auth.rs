use actix_web::{dev::Payload, web, Error, FromRequest, HttpRequest, HttpResponse};
use futures::future::{ready, Ready};
use serde::{Deserialize, Serialize};

use crate::state::Pizzeria;
use crate::utils::jwt;

/// Structure qui identifie le client authentifié d'une requête.
/// Utilisée comme extracteur dans les routes protégées : le token doit être
/// valide et le client doit toujours être connecté côté serveur (il a pu se
/// déconnecter depuis l'émission du token).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClient {
    pub email: String,
}

fn refuse(message: &str) -> Ready<Result<AuthClient, Error>> {
    let response = HttpResponse::Unauthorized().json(serde_json::json!({
        "error": message
    }));
    ready(Err(
        actix_web::error::InternalError::from_response("", response).into()
    ))
}

/// Implémentation de FromRequest pour AuthClient
/// Cela permet à Actix-Web d'extraire automatiquement AuthClient des requêtes
impl FromRequest for AuthClient {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // 1. Extraire le header Authorization
        let auth_header = match req.headers().get("Authorization") {
            Some(header) => header,
            None => return refuse("Missing Authorization header"),
        };

        // 2. Convertir le header en string
        let auth_str = match auth_header.to_str() {
            Ok(s) => s,
            Err(_) => return refuse("Invalid Authorization header"),
        };

        // 3. Extraire le token (format: "Bearer <token>")
        let token = match auth_str.strip_prefix("Bearer ") {
            Some(token) => token,
            None => return refuse("Invalid Authorization format (expected: Bearer <token>)"),
        };

        // 4. Vérifier le token JWT
        let claims = match jwt::verify_token(token) {
            Ok(claims) => claims,
            Err(_) => return refuse("Invalid token"),
        };

        // 5. Vérifier que le client est toujours connecté
        let connecte = req
            .app_data::<web::Data<Pizzeria>>()
            .map(|pizzeria| pizzeria.verrou().sessions.contains(&claims.sub))
            .unwrap_or(false);
        if !connecte {
            return refuse("aucun client n'est connecté");
        }

        ready(Ok(AuthClient { email: claims.sub }))
    }
}
