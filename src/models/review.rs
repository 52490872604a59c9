use serde::{Deserialize, Serialize};

use crate::domain::{ContentId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub content_id: ContentId,
    pub user_id: UserId,
    pub username: String,
    pub score: i32,
    pub text: String,
    pub created_at: String,
}
