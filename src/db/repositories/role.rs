use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::entities::{content_person, role, prelude::*};

pub struct RoleRepository {
    conn: DatabaseConnection,
}

impl RoleRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn id_by_name(&self, name: &str) -> anyhow::Result<Option<i32>> {
        let id = Role::find()
            .select_only()
            .column(role::Column::Id)
            .filter(role::Column::Name.eq(name))
            .into_tuple::<i32>()
            .one(&self.conn)
            .await?;
        Ok(id)
    }

    /// Person ids in billing order.
    pub async fn participant_ids(&self, role_id: i32, content_id: i32) -> anyhow::Result<Vec<i32>> {
        let ids = ContentPerson::find()
            .select_only()
            .column(content_person::Column::PersonId)
            .filter(content_person::Column::RoleId.eq(role_id))
            .filter(content_person::Column::ContentId.eq(content_id))
            .order_by_asc(content_person::Column::Position)
            .order_by_asc(content_person::Column::Id)
            .into_tuple::<i32>()
            .all(&self.conn)
            .await?;
        Ok(ids)
    }
}
