use db::models::chat_room::Model as ChatRoomModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateChatRoomRequest {
    #[validate(length(min = 1, max = 100, message = "Room name must be between 1 and 100 characters"))]
    pub name: String,

    #[serde(default)]
    pub subjects: Vec<String>,

    pub learning_style: Option<String>,
    pub study_time: Option<String>,

    /// Profile id of the owner, who approves join requests.
    pub created_by: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRoomResponse {
    pub id: i64,
    pub name: String,
    pub subjects: Vec<String>,
    pub learning_style: Option<String>,
    pub study_time: Option<String>,
    pub created_by: i64,
    pub created_at: String,
}

impl From<ChatRoomModel> for ChatRoomResponse {
    fn from(room: ChatRoomModel) -> Self {
        Self {
            subjects: room.subject_list(),
            id: room.id,
            name: room.name,
            learning_style: room.learning_style,
            study_time: room.study_time,
            created_by: room.created_by,
            created_at: room.created_at.to_rfc3339(),
        }
    }
}
