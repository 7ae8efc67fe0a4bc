pub mod friendships;
pub mod messages;
pub mod notifications;
pub mod sessions;
pub mod suggestions;
pub mod users;
