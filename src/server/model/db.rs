//! Database model type aliases.

/// Type alias for the comment database model.
///
/// # Fields (from `entity::comment::Model`)
/// - `id` - Primary key, UUID v4 generated when the comment is created
/// - `movie_id` - SWAPI film id the comment belongs to
/// - `message` - Comment text
/// - `ip_address` - Address of the client that posted the comment
/// - `created_at` - Timestamp when the comment was posted
/// - `updated_at` - Timestamp of the last edit, if any
/// - `deleted_at` - Soft delete marker, deleted comments are hidden from listings and counts
pub type CommentModel = entity::comment::Model;
