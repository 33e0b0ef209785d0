use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::value_objects::{Age, Email, PersonName, PhoneNumber};

/// Lifecycle status of a user account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }
}

impl FromStr for UserStatus {
    type Err = String;

    /// Parses the exact wire form; matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(UserStatus::Active),
            "Inactive" => Ok(UserStatus::Inactive),
            _ => Err("must be one of: Active, Inactive".to_string()),
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User record as seen by business logic
///
/// Serialized with lowerCamelCase keys; `phone` and `age` are left out
/// entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: Uuid,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
    pub status: UserStatus,
}

impl User {
    /// Builds a stored user from validated creation data.
    pub fn new(user_id: Uuid, new_user: NewUser) -> Self {
        Self {
            user_id,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            phone: new_user.phone,
            age: new_user.age,
            status: new_user.status,
        }
    }

    /// Merges every field present in `patch` onto this record.
    ///
    /// Absent fields keep their current value; `user_id` never changes.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(age) = patch.age {
            self.age = Some(age);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Validated data for a user that does not exist yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub phone: Option<PhoneNumber>,
    pub age: Option<Age>,
    pub status: UserStatus,
}

/// Validated partial update; `None` means "leave unchanged"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub email: Option<Email>,
    pub phone: Option<PhoneNumber>,
    pub age: Option<Age>,
    pub status: Option<UserStatus>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.age.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user() -> User {
        User::new(
            Uuid::new_v4(),
            NewUser {
                first_name: PersonName::new("John").unwrap(),
                last_name: PersonName::new("Doe").unwrap(),
                email: Email::new("john@example.com").unwrap(),
                phone: Some(PhoneNumber::new("+14155552671").unwrap()),
                age: Some(Age::new(30).unwrap()),
                status: UserStatus::Active,
            },
        )
    }

    #[test]
    fn status_parses_exact_names_only() {
        assert_eq!("Active".parse::<UserStatus>(), Ok(UserStatus::Active));
        assert_eq!("Inactive".parse::<UserStatus>(), Ok(UserStatus::Inactive));
        assert!("active".parse::<UserStatus>().is_err());
        assert!("".parse::<UserStatus>().is_err());
    }

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(UserStatus::default(), UserStatus::Active);
        assert_eq!(UserStatus::Inactive.to_string(), "Inactive");
    }

    #[test]
    fn apply_single_field_leaves_others_untouched() {
        let original = sample_user();
        let mut updated = original.clone();
        updated.apply(UserPatch {
            first_name: Some(PersonName::new("Jane").unwrap()),
            ..Default::default()
        });

        assert_eq!(updated.first_name.as_str(), "Jane");
        assert_eq!(updated.user_id, original.user_id);
        assert_eq!(updated.last_name, original.last_name);
        assert_eq!(updated.email, original.email);
        assert_eq!(updated.phone, original.phone);
        assert_eq!(updated.age, original.age);
        assert_eq!(updated.status, original.status);
    }

    #[test]
    fn apply_sets_previously_absent_optional_fields() {
        let mut user = sample_user();
        user.phone = None;
        user.age = None;
        user.apply(UserPatch {
            phone: Some(PhoneNumber::new("+442071838750").unwrap()),
            age: Some(Age::new(41).unwrap()),
            status: Some(UserStatus::Inactive),
            ..Default::default()
        });

        assert_eq!(user.phone.as_ref().map(|p| p.as_str()), Some("+442071838750"));
        assert_eq!(user.age.map(|a| a.value()), Some(41));
        assert_eq!(user.status, UserStatus::Inactive);
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(UserPatch::default().is_empty());
        let patch = UserPatch {
            age: Some(Age::new(1).unwrap()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn wire_format_uses_camel_case_and_omits_absent_optionals() {
        let mut user = sample_user();
        user.phone = None;
        user.age = None;

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "userId": user.user_id.to_string(),
                "firstName": "John",
                "lastName": "Doe",
                "email": "john@example.com",
                "status": "Active"
            })
        );
    }
}
