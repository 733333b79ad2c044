// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données de la pizzeria.
//   Les données vivent en mémoire dans l'état partagé (state::Pizzeria).
//
// Liste des modules:
//   - health : Health check API
//   - information_personnelle : Identité, âge et adresse d'un client
//   - evaluation : Note (0 à 5) et commentaire laissés sur une pizza
//   - pizza : Pizzas en vente et leur type (viande, végétarienne, régionale)
//   - commande : Commandes validées et commandes en cours de composition
//   - ingredient : Ingrédients disponibles avec leur prix
//   - client : Comptes clients (email + mot de passe hashé)
//   - filtre : Filtres de consultation du catalogue par un client
//   - erreurs : Échecs des services (non connecté / commande invalide)
//   - dto : Data Transfer Objects pour les réponses API
//
// Points d'attention:
//   - L'égalité des pizzas repose uniquement sur le nom
//   - L'égalité des commandes repose sur le couple (email, date de création)
//   - Les setters des modèles ignorent silencieusement les valeurs invalides
//
// ============================================================================

pub mod client;
pub mod commande;
pub mod dto;
pub mod erreurs;
pub mod evaluation;
pub mod filtre;
pub mod health;
pub mod information_personnelle;
pub mod ingredient;
pub mod pizza;
