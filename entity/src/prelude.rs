pub use super::sent_ping::Entity as SentPing;
