use serde::{Deserialize, Serialize};

use crate::domain::PersonId;

/// Summary of a cast or crew member as attached to a content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub name_localized: Option<String>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub sex: Option<String>,
    pub height_cm: Option<i32>,
    pub photo: Option<String>,
}
