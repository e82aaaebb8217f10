pub mod chat_room;
pub mod join_request;
pub mod profile;

pub use chat_room::Entity as ChatRoom;
pub use join_request::Entity as JoinRequest;
pub use profile::Entity as Profile;
