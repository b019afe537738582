//! # Tables, character sheets and accounts on the Mesa API
//!
//! | Struct | Collection | Owner field |
//! |--------|-----------|-------------|
//! | [`NewMestre`] | `Mestre` | none |
//! | [`Mesa`] | `Mesa` | `mestreId` |
//! | [`Ficha`] | `Ficha` | `mesaId` |
//!
//! Character attributes use one canonical shape: a positional sequence of six
//! numbers, see [`Atributos`].

use serde::{Deserialize, Serialize};

use super::de::{opt_string_or_number, string_or_number};

/// Registration payload for the `Mestre` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMestre {
    pub nome: String,
    pub senha: String,
}

/// A game table owned by a mestre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mesa {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub tema: String,
    #[serde(
        rename = "mestreId",
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub mestre_id: Option<String>,
}

/// A player character scoped to a table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ficha {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub classe: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub habilidades: Vec<String>,
    #[serde(default)]
    pub atributos: Atributos,
    #[serde(
        rename = "mesaId",
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub mesa_id: Option<String>,
}

/// The six character stats, in the fixed order of [`Atributos::LABELS`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Atributos(pub [i64; 6]);

impl Default for Atributos {
    fn default() -> Self {
        Self([10; 6])
    }
}

impl Atributos {
    pub const LABELS: [&'static str; 6] = [
        "Força",
        "Destreza",
        "Constituição",
        "Carisma",
        "Sabedoria",
        "Inteligência",
    ];

    pub fn strength(&self) -> i64 {
        self.0[0]
    }

    pub fn dexterity(&self) -> i64 {
        self.0[1]
    }

    pub fn constitution(&self) -> i64 {
        self.0[2]
    }

    pub fn charisma(&self) -> i64 {
        self.0[3]
    }

    pub fn wisdom(&self) -> i64 {
        self.0[4]
    }

    pub fn intelligence(&self) -> i64 {
        self.0[5]
    }

    /// Pairs of display label and value, in canonical order.
    pub fn labeled(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        Self::LABELS.iter().copied().zip(self.0.iter().copied())
    }
}
