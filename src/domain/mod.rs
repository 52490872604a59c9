//! Domain types for the content catalog with strong typing.
//!
//! Identifiers use the Newtype pattern so a content id can never be passed
//! where a person id is expected. The content type tag and the participation
//! roles are closed enums, so every branch over them is checked at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }
    };
}

id_newtype!(
    /// Unique identifier of a movie or series.
    ///
    /// ```rust
    /// use cinecat::domain::ContentId;
    ///
    /// let id = ContentId::new(42);
    /// assert_eq!(id.value(), 42);
    /// assert_eq!(id.to_string(), "42");
    /// ```
    ContentId
);

id_newtype!(
    /// Unique identifier of a person (cast or crew member).
    PersonId
);

id_newtype!(
    /// Unique identifier of a registered user.
    UserId
);

/// Declared type tag of a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
}

impl ContentType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type: {0}")]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "series" => Ok(Self::Series),
            other => Err(UnknownContentType(other.to_string())),
        }
    }
}

/// A named function a person performs on a content item.
///
/// The taxonomy is fixed; the `role` table is seeded with exactly these
/// names and the database id of each one is resolved at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Actor,
    Director,
    Producer,
    Writer,
    Cinematographer,
    Composer,
    Editor,
}

impl Role {
    pub const ALL: [Self; 7] = [
        Self::Actor,
        Self::Director,
        Self::Producer,
        Self::Writer,
        Self::Cinematographer,
        Self::Composer,
        Self::Editor,
    ];

    /// Canonical name as stored in the `role` table.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Director => "director",
            Self::Producer => "producer",
            Self::Writer => "writer",
            Self::Cinematographer => "cinematographer",
            Self::Composer => "composer",
            Self::Editor => "editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_round_trips_through_its_tag() {
        for ty in [ContentType::Movie, ContentType::Series] {
            assert_eq!(ty.as_str().parse::<ContentType>().unwrap(), ty);
        }
        assert!("cartoon".parse::<ContentType>().is_err());
    }

    #[test]
    fn role_names_are_unique() {
        let mut names: Vec<_> = Role::ALL.iter().map(Role::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Role::ALL.len());
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&ContentId::new(7)).unwrap();
        assert_eq!(json, "7");
        let id: PersonId = serde_json::from_str("12").unwrap();
        assert_eq!(id.value(), 12);
    }
}
