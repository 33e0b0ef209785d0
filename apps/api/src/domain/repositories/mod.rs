// Repository ports (interfaces implemented by infrastructure adapters)

pub mod user_repository;

pub use user_repository::UserRepository;
