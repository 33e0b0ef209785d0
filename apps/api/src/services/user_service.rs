use std::sync::Arc;
use uuid::Uuid;

use crate::domain::repositories::UserRepository;
use crate::domain::user::value_objects::{Age, Email, PersonName, PhoneNumber};
use crate::domain::user::{
    CreateUserRequest, NewUser, UpdateUserRequest, User, UserError, UserPatch, UserResult,
    UserStatus,
};

pub const EMPTY_PATCH_MESSAGE: &str = "at least one field must be provided";

/// Business rules for user records
///
/// Validates requests before anything reaches the repository and otherwise
/// passes repository results (and errors) through untouched.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Validates and stores a new user; status defaults to Active.
    pub async fn create(&self, req: CreateUserRequest) -> UserResult<User> {
        let new_user = validate_create(req).inspect_err(log_rejection)?;
        let user = self.repo.create(new_user).await?;
        tracing::info!(user_id = %user.user_id, "user created");
        Ok(user)
    }

    pub async fn get_by_id(&self, id: Uuid) -> UserResult<User> {
        self.repo.get_by_id(id).await
    }

    pub async fn list(&self) -> UserResult<Vec<User>> {
        self.repo.list().await
    }

    /// Applies a partial patch. An empty patch is rejected without touching
    /// the repository.
    pub async fn update(&self, id: Uuid, req: UpdateUserRequest) -> UserResult<User> {
        let patch = validate_update(req).inspect_err(log_rejection)?;
        let user = self.repo.update(id, patch).await?;
        tracing::info!(user_id = %user.user_id, "user updated");
        Ok(user)
    }

    pub async fn delete(&self, id: Uuid) -> UserResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }
}

fn log_rejection(err: &UserError) {
    tracing::debug!(error = %err, "request rejected by validation");
}

/// Collects field-level failures so a request reports all of them at once.
#[derive(Default)]
struct Violations(Vec<String>);

impl Violations {
    fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(reason) => {
                self.0.push(format!("{}: {}", field, reason));
                None
            }
        }
    }

    fn check_optional<T>(&mut self, field: &str, value: Option<Result<T, String>>) -> Option<T> {
        value.and_then(|result| self.check(field, result))
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_error(self) -> UserError {
        UserError::Validation(self.0.join("; "))
    }
}

/// On create, an empty optional string means the field was not given.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn validate_create(req: CreateUserRequest) -> UserResult<NewUser> {
    let mut violations = Violations::default();

    let first_name = violations.check(
        "firstName",
        PersonName::new(req.first_name.unwrap_or_default()),
    );
    let last_name = violations.check(
        "lastName",
        PersonName::new(req.last_name.unwrap_or_default()),
    );
    let email = violations.check("email", Email::new(req.email.unwrap_or_default()));
    let phone = violations.check_optional("phone", non_empty(req.phone).map(PhoneNumber::new));
    let age = violations.check_optional("age", req.age.map(Age::new));
    let status = violations.check_optional(
        "status",
        non_empty(req.status).map(|s| s.parse::<UserStatus>()),
    );

    match (first_name, last_name, email) {
        (Some(first_name), Some(last_name), Some(email)) if violations.is_empty() => {
            Ok(NewUser {
                first_name,
                last_name,
                email,
                phone,
                age,
                status: status.unwrap_or_default(),
            })
        }
        _ => Err(violations.into_error()),
    }
}

fn validate_update(req: UpdateUserRequest) -> UserResult<UserPatch> {
    if !req.has_updates() {
        return Err(UserError::Validation(EMPTY_PATCH_MESSAGE.to_string()));
    }

    let mut violations = Violations::default();

    let patch = UserPatch {
        first_name: violations.check_optional("firstName", req.first_name.map(PersonName::new)),
        last_name: violations.check_optional("lastName", req.last_name.map(PersonName::new)),
        email: violations.check_optional("email", req.email.map(Email::new)),
        phone: violations.check_optional("phone", req.phone.map(PhoneNumber::new)),
        age: violations.check_optional("age", req.age.map(Age::new)),
        status: violations.check_optional(
            "status",
            req.status.map(|s| s.parse::<UserStatus>()),
        ),
    };

    if violations.is_empty() {
        Ok(patch)
    } else {
        Err(violations.into_error())
    }
}
