use serde::Serialize;
use std::fmt;

/// Informations personnelles d'une personne : identité, âge et adresse.
/// Le nom et le prénom ne changent plus après la création.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InformationPersonnelle {
    nom: String,
    prenom: String,
    age: i32,     // 0 correspond à un âge non défini
    adresse: String, // une chaine vide correspond à une adresse non définie
}

impl InformationPersonnelle {
    /// Crée une personne avec ses informations obligatoires.
    pub fn new(nom: &str, prenom: &str) -> Self {
        Self::complete(nom, prenom, None, 0)
    }

    /// Crée une personne avec toutes ses informations. Une adresse absente
    /// devient la chaine vide et un âge négatif devient 0.
    pub fn complete(nom: &str, prenom: &str, adresse: Option<String>, age: i32) -> Self {
        Self {
            nom: nom.to_string(),
            prenom: prenom.to_string(),
            adresse: adresse.unwrap_or_default(),
            age: age.max(0),
        }
    }

    pub fn nom(&self) -> &str {
        &self.nom
    }

    pub fn prenom(&self) -> &str {
        &self.prenom
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Modifie l'âge, uniquement si la nouvelle valeur est supérieure à 0.
    pub fn set_age(&mut self, age: i32) {
        if age > 0 {
            self.age = age;
        }
    }

    pub fn adresse(&self) -> &str {
        &self.adresse
    }

    /// Modifie l'adresse, uniquement si une valeur est fournie.
    pub fn set_adresse(&mut self, adresse: Option<String>) {
        if let Some(adresse) = adresse {
            self.adresse = adresse;
        }
    }
}

impl fmt::Display for InformationPersonnelle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} d'age {} ans, habite {}",
            self.prenom, self.nom, self.age, self.adresse
        )
    }
}
