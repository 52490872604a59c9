use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::domain::PersonId;
use crate::entities::{content_person, person, prelude::*};
use crate::models::Person;

pub struct PersonRepository {
    conn: DatabaseConnection,
}

impl PersonRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: person::Model) -> Person {
        Person {
            id: PersonId::new(model.id),
            name: model.name,
            name_localized: model.name_localized,
            birth_date: model.birth_date,
            death_date: model.death_date,
            sex: model.sex,
            height_cm: model.height_cm,
            photo: model.photo,
        }
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<Person>> {
        let model = person::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(model.map(Self::map_model))
    }

    /// Content ids the person participates in, under any role.
    pub async fn content_ids(&self, person_id: i32) -> anyhow::Result<Vec<i32>> {
        let ids = ContentPerson::find()
            .select_only()
            .column(content_person::Column::ContentId)
            .distinct()
            .filter(content_person::Column::PersonId.eq(person_id))
            .order_by_asc(content_person::Column::ContentId)
            .into_tuple::<i32>()
            .all(&self.conn)
            .await?;
        Ok(ids)
    }
}
