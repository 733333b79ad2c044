use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::dto::{
    BeneficeClientResponse, BeneficePizzaResponse, ClassementPizzaResponse,
    PizzasParClientResponse,
};
use crate::models::information_personnelle::InformationPersonnelle;
use crate::models::pizza::TypePizza;
use crate::services::pizzaiolo_service::ServicePizzaiolo;
use crate::state::Pizzeria;

// DTO pour créer un ingrédient
#[derive(Deserialize)]
pub struct CreerIngredientRequest {
    pub nom: String,
    pub prix: f64,
}

// DTO pour changer un prix (ingrédient ou pizza)
#[derive(Deserialize)]
pub struct PrixRequest {
    pub prix: f64,
}

// DTO pour interdire un ingrédient sur un type de pizza
#[derive(Deserialize)]
pub struct InterdictionRequest {
    #[serde(rename = "type")]
    pub type_pizza: TypePizza,
}

// DTO pour créer une pizza
#[derive(Deserialize)]
pub struct CreerPizzaRequest {
    pub nom: String,
    #[serde(rename = "type")]
    pub type_pizza: TypePizza,
}

// DTO pour ajouter un ingrédient à une pizza
#[derive(Deserialize)]
pub struct AjoutIngredientRequest {
    pub ingredient: String,
}

// DTO pour associer une photo à une pizza
#[derive(Deserialize, Validate)]
pub struct PhotoRequest {
    #[validate(length(min = 1))]
    pub fichier: String,
}

// Identité d'un client telle que le pizzaïolo la connait
#[derive(Deserialize)]
pub struct ClientQuery {
    pub nom: String,
    pub prenom: String,
    pub adresse: Option<String>,
    pub age: Option<i32>,
}

// Identité d'une commande : le couple (email, date de création)
#[derive(Deserialize)]
pub struct CommandeQuery {
    pub email: String,
    pub date_heure: DateTime<Utc>,
}

/// POST /pizzaiolo/ingredients - Créer un ingrédient
#[post("/ingredients")]
pub async fn creer_ingredient(
    body: web::Json<CreerIngredientRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    match pizzeria.creer_ingredient(&body.nom, body.prix).await {
        0 => HttpResponse::Created().json(serde_json::json!({
            "code": 0,
            "message": "Ingrédient créé"
        })),
        -1 => HttpResponse::BadRequest().json(serde_json::json!({
            "code": -1,
            "error": "Nom d'ingrédient invalide"
        })),
        -2 => HttpResponse::Conflict().json(serde_json::json!({
            "code": -2,
            "error": "Un ingrédient de ce nom existe déjà"
        })),
        _ => HttpResponse::BadRequest().json(serde_json::json!({
            "code": -3,
            "error": "Prix invalide"
        })),
    }
}

/// GET /pizzaiolo/ingredients - Le registre des ingrédients
#[get("/ingredients")]
pub async fn ingredients(pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    HttpResponse::Ok().json(pizzeria.ingredients().await)
}

/// PUT /pizzaiolo/ingredients/{nom}/prix - Changer le prix d'un ingrédient
#[put("/ingredients/{nom}/prix")]
pub async fn changer_prix_ingredient(
    path: web::Path<String>,
    body: web::Json<PrixRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    match pizzeria.changer_prix_ingredient(&path, body.prix).await {
        0 => HttpResponse::Ok().json(serde_json::json!({
            "code": 0,
            "message": "Prix modifié"
        })),
        -1 => HttpResponse::BadRequest().json(serde_json::json!({
            "code": -1,
            "error": "Nom d'ingrédient invalide"
        })),
        -2 => HttpResponse::BadRequest().json(serde_json::json!({
            "code": -2,
            "error": "Prix invalide"
        })),
        _ => HttpResponse::NotFound().json(serde_json::json!({
            "code": -3,
            "error": "Ingrédient inconnu"
        })),
    }
}

/// POST /pizzaiolo/ingredients/{nom}/interdictions - Interdire un ingrédient
/// pour un type de pizza
#[post("/ingredients/{nom}/interdictions")]
pub async fn interdire_ingredient(
    path: web::Path<String>,
    body: web::Json<InterdictionRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    if pizzeria.interdire_ingredient(&path, body.type_pizza).await {
        HttpResponse::Ok().json(serde_json::json!({ "message": "Interdiction ajoutée" }))
    } else {
        HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Ingrédient inconnu: {}", path)
        }))
    }
}

/// POST /pizzaiolo/pizzas - Créer une pizza
#[post("/pizzas")]
pub async fn creer_pizza(
    body: web::Json<CreerPizzaRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    match pizzeria.creer_pizza(&body.nom, body.type_pizza).await {
        Some(pizza) => HttpResponse::Created().json(pizza),
        None => HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Nom invalide ou pizza déjà existante"
        })),
    }
}

/// GET /pizzaiolo/pizzas - L'ensemble des pizzas
#[get("/pizzas")]
pub async fn pizzas(pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    HttpResponse::Ok().json(ServicePizzaiolo::pizzas(pizzeria.get_ref()).await)
}

/// POST /pizzaiolo/pizzas/{nom}/ingredients - Ajouter un ingrédient à une pizza
#[post("/pizzas/{nom}/ingredients")]
pub async fn ajouter_ingredient_pizza(
    path: web::Path<String>,
    body: web::Json<AjoutIngredientRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    match pizzeria.ajouter_ingredient_pizza(&path, &body.ingredient).await {
        0 => HttpResponse::Ok().json(serde_json::json!({
            "code": 0,
            "message": "Ingrédient ajouté"
        })),
        -1 => HttpResponse::NotFound().json(serde_json::json!({
            "code": -1,
            "error": "Pizza inconnue"
        })),
        -2 => HttpResponse::BadRequest().json(serde_json::json!({
            "code": -2,
            "error": "Ingrédient invalide ou inconnu"
        })),
        _ => HttpResponse::Conflict().json(serde_json::json!({
            "code": -3,
            "error": "Ingrédient interdit pour ce type de pizza"
        })),
    }
}

/// DELETE /pizzaiolo/pizzas/{nom}/ingredients/{ingredient} - Retirer un
/// ingrédient d'une pizza
#[delete("/pizzas/{nom}/ingredients/{ingredient}")]
pub async fn retirer_ingredient_pizza(
    path: web::Path<(String, String)>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    let (nom, ingredient) = path.into_inner();
    match pizzeria.retirer_ingredient_pizza(&nom, &ingredient).await {
        0 => HttpResponse::Ok().json(serde_json::json!({
            "code": 0,
            "message": "Ingrédient retiré"
        })),
        -1 => HttpResponse::NotFound().json(serde_json::json!({
            "code": -1,
            "error": "Pizza inconnue"
        })),
        -2 => HttpResponse::BadRequest().json(serde_json::json!({
            "code": -2,
            "error": "Ingrédient invalide ou inconnu"
        })),
        _ => HttpResponse::BadRequest().json(serde_json::json!({
            "code": -3,
            "error": "L'ingrédient n'était pas sur la pizza"
        })),
    }
}

/// GET /pizzaiolo/pizzas/{nom}/verification - Les ingrédients de la pizza
/// devenus interdits pour son type
#[get("/pizzas/{nom}/verification")]
pub async fn verifier_ingredients(
    path: web::Path<String>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    match pizzeria.verifier_ingredients_pizza(&path).await {
        Some(interdits) => {
            let mut interdits: Vec<String> = interdits.into_iter().collect();
            interdits.sort();
            HttpResponse::Ok().json(interdits)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Pizza inconnue: {}", path)
        })),
    }
}

/// POST /pizzaiolo/pizzas/{nom}/photo - Associer une photo à une pizza
#[post("/pizzas/{nom}/photo")]
pub async fn ajouter_photo(
    path: web::Path<String>,
    body: web::Json<PhotoRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    if let Err(errors) = body.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    match pizzeria.ajouter_photo(&path, &body.fichier).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Photo ajoutée"
        })),
        Ok(false) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Pizza inconnue ou fichier qui ne contient pas une image"
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Erreur de lecture du fichier: {}", e)
        })),
    }
}

/// GET /pizzaiolo/pizzas/{nom}/prix - Le prix de vente effectif d'une pizza
#[get("/pizzas/{nom}/prix")]
pub async fn prix_pizza(path: web::Path<String>, pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    let nom = path.into_inner();
    let prix = pizzeria.prix_pizza(&nom).await;
    if prix < 0.0 {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Pizza inconnue: {}", nom)
        }));
    }
    HttpResponse::Ok().json(serde_json::json!({ "pizza": nom, "prix": prix }))
}

/// PUT /pizzaiolo/pizzas/{nom}/prix - Fixer le prix de vente d'une pizza
/// Le prix doit être supérieur ou égal au prix minimal.
#[put("/pizzas/{nom}/prix")]
pub async fn fixer_prix_pizza(
    path: web::Path<String>,
    body: web::Json<PrixRequest>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    if pizzeria.fixer_prix_pizza(&path, body.prix).await {
        HttpResponse::Ok().json(serde_json::json!({ "message": "Prix modifié" }))
    } else {
        HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Prix inférieur au prix minimal ou pizza inconnue"
        }))
    }
}

/// GET /pizzaiolo/pizzas/{nom}/prix-minimal - Le prix minimal d'une pizza
#[get("/pizzas/{nom}/prix-minimal")]
pub async fn prix_minimal_pizza(
    path: web::Path<String>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    let nom = path.into_inner();
    let prix = pizzeria.prix_minimal_pizza(&nom).await;
    if prix < 0.0 {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Pizza inconnue: {}", nom)
        }));
    }
    HttpResponse::Ok().json(serde_json::json!({ "pizza": nom, "prix_minimal": prix }))
}

/// GET /pizzaiolo/clients - L'ensemble des clients inscrits
#[get("/clients")]
pub async fn clients(pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    HttpResponse::Ok().json(pizzeria.ensemble_clients().await)
}

/// GET /pizzaiolo/clients/commandes - Les commandes traitées d'un client,
/// identifié par ses informations personnelles
#[get("/clients/commandes")]
pub async fn commandes_client(
    query: web::Query<ClientQuery>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    let client = InformationPersonnelle::complete(
        &query.nom,
        &query.prenom,
        query.adresse.clone(),
        query.age.unwrap_or(0),
    );
    match pizzeria.commandes_traitees_client(&client).await {
        Some(commandes) => HttpResponse::Ok().json(commandes),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Client inconnu"
        })),
    }
}

/// GET /pizzaiolo/commandes/traitees - Les commandes déjà traitées
#[get("/commandes/traitees")]
pub async fn commandes_traitees(pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    HttpResponse::Ok().json(pizzeria.commandes_deja_traitees().await)
}

/// GET /pizzaiolo/commandes/a-traiter - Les commandes validées à traiter.
/// Les lire les fait passer dans les commandes traitées.
#[get("/commandes/a-traiter")]
pub async fn commandes_a_traiter(pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    HttpResponse::Ok().json(pizzeria.commandes_non_traitees().await)
}

/// GET /pizzaiolo/statistiques/benefices-pizzas - Le bénéfice unitaire de
/// chaque pizza en vente
#[get("/statistiques/benefices-pizzas")]
pub async fn benefices_pizzas(pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    let mut benefices: Vec<BeneficePizzaResponse> = pizzeria
        .benefice_par_pizza()
        .await
        .into_iter()
        .map(|(pizza, benefice)| BeneficePizzaResponse {
            pizza: pizza.nom().to_string(),
            benefice,
        })
        .collect();
    benefices.sort_by(|a, b| a.pizza.cmp(&b.pizza));
    HttpResponse::Ok().json(benefices)
}

/// GET /pizzaiolo/statistiques/benefice-commande - Le bénéfice d'une
/// commande identifiée par son email et sa date de création
#[get("/statistiques/benefice-commande")]
pub async fn benefice_commande(
    query: web::Query<CommandeQuery>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    let benefice = pizzeria
        .benefice_commande(&query.email, query.date_heure)
        .await;
    if benefice < 0.0 {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": "Commande inconnue"
        }));
    }
    HttpResponse::Ok().json(serde_json::json!({ "benefice": benefice }))
}

/// GET /pizzaiolo/statistiques/benefice-total - Le bénéfice global des
/// commandes déjà traitées
#[get("/statistiques/benefice-total")]
pub async fn benefice_total(pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "benefice": pizzeria.benefice_toutes_commandes().await
    }))
}

/// GET /pizzaiolo/statistiques/pizzas-par-client - Le nombre de pizzas
/// commandées par chaque client
#[get("/statistiques/pizzas-par-client")]
pub async fn pizzas_par_client(pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    let mut nombres: Vec<PizzasParClientResponse> = pizzeria
        .nombre_pizzas_commandees_par_client()
        .await
        .into_iter()
        .map(|(client, nombre_pizzas)| PizzasParClientResponse {
            client,
            nombre_pizzas,
        })
        .collect();
    nombres.sort_by(|a, b| {
        (a.client.nom(), a.client.prenom()).cmp(&(b.client.nom(), b.client.prenom()))
    });
    HttpResponse::Ok().json(nombres)
}

/// GET /pizzaiolo/statistiques/benefices-clients - Le bénéfice généré par
/// chaque client
#[get("/statistiques/benefices-clients")]
pub async fn benefices_clients(pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    let mut benefices: Vec<BeneficeClientResponse> = pizzeria
        .benefice_par_client()
        .await
        .into_iter()
        .map(|(client, benefice)| BeneficeClientResponse { client, benefice })
        .collect();
    benefices.sort_by(|a, b| {
        (a.client.nom(), a.client.prenom()).cmp(&(b.client.nom(), b.client.prenom()))
    });
    HttpResponse::Ok().json(benefices)
}

/// GET /pizzaiolo/statistiques/commandes-pizza/{nom} - Le nombre de fois où
/// une pizza a été commandée
#[get("/statistiques/commandes-pizza/{nom}")]
pub async fn commandes_pizza(
    path: web::Path<String>,
    pizzeria: web::Data<Pizzeria>,
) -> HttpResponse {
    let nom = path.into_inner();
    let nombre = pizzeria.nombre_pizzas_commandees(&nom).await;
    if nombre < 0 {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Pizza inconnue: {}", nom)
        }));
    }
    HttpResponse::Ok().json(ClassementPizzaResponse {
        pizza: nom,
        nombre_commandes: nombre,
    })
}

/// GET /pizzaiolo/statistiques/classement-pizzas - Les pizzas de la plus
/// commandée à la moins commandée
#[get("/statistiques/classement-pizzas")]
pub async fn classement_pizzas(pizzeria: web::Data<Pizzeria>) -> HttpResponse {
    let mut classement = Vec::new();
    for pizza in pizzeria.classement_pizzas_par_nombre_commandes().await {
        let nombre = pizzeria.nombre_pizzas_commandees(pizza.nom()).await;
        classement.push(ClassementPizzaResponse {
            pizza: pizza.nom().to_string(),
            nombre_commandes: nombre.max(0),
        });
    }
    HttpResponse::Ok().json(classement)
}

pub fn pizzaiolo_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pizzaiolo")
            .service(creer_ingredient)
            .service(ingredients)
            .service(changer_prix_ingredient)
            .service(interdire_ingredient)
            .service(creer_pizza)
            .service(pizzas)
            .service(ajouter_ingredient_pizza)
            .service(retirer_ingredient_pizza)
            .service(verifier_ingredients)
            .service(ajouter_photo)
            .service(prix_pizza)
            .service(fixer_prix_pizza)
            .service(prix_minimal_pizza)
            .service(clients)
            .service(commandes_client)
            .service(commandes_traitees)
            .service(commandes_a_traiter)
            .service(benefices_pizzas)
            .service(benefice_commande)
            .service(benefice_total)
            .service(pizzas_par_client)
            .service(benefices_clients)
            .service(commandes_pizza)
            .service(classement_pizzas)
    );
}
