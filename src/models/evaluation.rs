use serde::Serialize;
use std::fmt;

/// Évaluation laissée par un client sur une pizza : une note de 0 à 5 et un
/// commentaire facultatif.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    note: i32,
    commentaire: String,
}

impl Evaluation {
    /// Crée une évaluation avec une note et sans commentaire.
    pub fn new(note: i32) -> Self {
        Self::avec_commentaire(note, "")
    }

    /// Crée une évaluation complète. Une note en dehors de [0, 5] est
    /// ramenée dans l'intervalle.
    pub fn avec_commentaire(note: i32, commentaire: &str) -> Self {
        Self {
            note: note.clamp(0, 5),
            commentaire: commentaire.to_string(),
        }
    }

    pub fn note(&self) -> i32 {
        self.note
    }

    /// Modifie la note si elle est comprise entre 0 et 5, la laisse
    /// inchangée sinon.
    pub fn set_note(&mut self, note: i32) {
        if (0..=5).contains(&note) {
            self.note = note;
        }
    }

    pub fn commentaire(&self) -> &str {
        &self.commentaire
    }

    /// Modifie le commentaire, uniquement si une valeur est fournie.
    pub fn set_commentaire(&mut self, commentaire: Option<String>) {
        if let Some(commentaire) = commentaire {
            self.commentaire = commentaire;
        }
    }

    /// Une évaluation est positive à partir d'une note de 4.
    pub fn est_positive(&self) -> bool {
        self.note >= 4
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.commentaire.is_empty() {
            write!(f, "Note : {}/5", self.note)
        } else {
            write!(f, "Note : {}/5 - \"{}\"", self.note, self.commentaire)
        }
    }
}
