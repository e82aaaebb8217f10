pub mod m202510010001_create_profiles;
pub mod m202510010002_create_chat_rooms;
pub mod m202510010003_create_join_requests;
