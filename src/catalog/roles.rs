use std::sync::Arc;

use tracing::debug;

use super::{CatalogError, EntityStore};
use crate::domain::{ContentId, PersonId, Role};
use crate::models::Person;

/// Maps canonical role names to database ids and loads a content's
/// participants for one role.
#[derive(Clone)]
pub struct RoleResolver {
    store: Arc<dyn EntityStore>,
}

impl RoleResolver {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Looks up the numeric id of `role`.
    ///
    /// A role absent from the role table is a deployment problem rather than
    /// a lookup failure, so it surfaces as [`CatalogError::Configuration`].
    pub async fn resolve_role_id(&self, role: Role) -> Result<i32, CatalogError> {
        self.store.role_id(role.name()).await?.ok_or_else(|| {
            CatalogError::Configuration(format!("role '{role}' is not seeded"))
        })
    }

    /// Person ids linked to `content` under `role_id`, in store order.
    pub async fn list_participants(
        &self,
        role_id: i32,
        content: ContentId,
    ) -> Result<Vec<PersonId>, CatalogError> {
        Ok(self.store.participant_ids(role_id, content).await?)
    }

    /// Resolves the role, lists its participants and loads every person.
    ///
    /// Person lookups run one after another so the result keeps the order
    /// of the participant list. A listed person without a row fails the
    /// whole call.
    pub async fn participants(
        &self,
        role: Role,
        content: ContentId,
    ) -> Result<Vec<Person>, CatalogError> {
        let role_id = self.resolve_role_id(role).await?;
        let ids = self.list_participants(role_id, content).await?;

        let mut persons = Vec::with_capacity(ids.len());
        for id in ids {
            persons.push(self.store.person(id).await?);
        }

        debug!(content = %content, role = %role, count = persons.len(), "Loaded participants");
        Ok(persons)
    }
}
