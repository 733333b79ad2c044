pub mod client_service;
pub mod pizzaiolo_service;
pub mod sauvegarde;
