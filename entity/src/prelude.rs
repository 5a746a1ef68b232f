pub use super::comment::Entity as Comment;
