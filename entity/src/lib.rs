pub mod prelude;

pub mod comment;
