pub mod chat_room;
pub mod join_request;
pub mod profile;
