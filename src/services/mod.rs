// Services module for business logic
pub mod cleanup;
pub mod directory_renamer;
pub mod file_rewriter;
pub mod renamer;
