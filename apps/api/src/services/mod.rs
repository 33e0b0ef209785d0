// Application services
// Business rules sit here, between the API adapters and the repository ports

pub mod user_service;

pub use user_service::UserService;
