use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// Dot-separated atoms before the `@`; the domain needs at least two labels.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

static E164_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9][0-9]{1,14}$")
        .expect("E.164 pattern is a valid regex")
});

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

/// First or last name of a user
///
/// # Invariants
/// - Between 2 and 50 characters (counted as Unicode scalar values)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Creates a new PersonName value object
    ///
    /// # Example
    /// ```
    /// use users_api::domain::user::value_objects::PersonName;
    ///
    /// assert!(PersonName::new("Jo").is_ok());
    /// assert!(PersonName::new("J").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        let len = name.chars().count();
        if name.is_empty() {
            Err("is required".to_string())
        } else if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
            Err(format!(
                "must be between {} and {} characters",
                NAME_MIN_CHARS, NAME_MAX_CHARS
            ))
        } else {
            Ok(PersonName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email value object representing a syntactically valid address
///
/// # Invariants
/// - Exactly one '@' separating a non-empty local part from a domain
/// - Domain is made of dot-separated DNS labels
/// - Is immutable after construction
///
/// Uniqueness is a storage concern and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Arguments
    /// * `email` - The email string to validate
    ///
    /// # Returns
    /// * `Ok(Email)` - If email is valid
    /// * `Err(String)` - If email is missing or malformed
    ///
    /// # Example
    /// ```
    /// use users_api::domain::user::value_objects::Email;
    ///
    /// let email = Email::new("test@example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "test@example.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into();
        if email.is_empty() {
            Err("is required".to_string())
        } else if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err("must be a valid email address".to_string())
        }
    }

    fn is_valid(email: &str) -> bool {
        email.len() <= 254 && EMAIL_PATTERN.is_match(email)
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phone number in E.164 form: a leading '+' followed by 2 to 15 digits,
/// the first of which is not zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(phone: impl Into<String>) -> Result<Self, String> {
        let phone = phone.into();
        if E164_PATTERN.is_match(&phone) {
            Ok(PhoneNumber(phone))
        } else {
            Err("must be in E.164 format (e.g. +14155552671)".to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

/// Age in years, strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Age(i32);

impl Age {
    pub fn new(age: i32) -> Result<Self, String> {
        if age > 0 {
            Ok(Age(age))
        } else {
            Err("must be greater than 0".to_string())
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Age {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Age> for i32 {
    fn from(age: Age) -> Self {
        age.0
    }
}
