// User domain module
// Contains the user record, its value objects, request shapes, and errors

#![allow(clippy::module_inception)]

pub mod errors;
pub mod requests;
pub mod user;
pub mod value_objects;

// Re-export main types for convenience
pub use errors::{UserError, UserResult};
pub use requests::{CreateUserRequest, JsonObject, UpdateUserRequest};
pub use user::{NewUser, User, UserPatch, UserStatus};
