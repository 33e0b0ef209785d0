use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A request body that must be a JSON object
///
/// Derived struct decoding also accepts a JSON array of positional fields;
/// this wrapper rejects arrays and scalars before `T` is decoded.
#[derive(Debug, Clone)]
pub struct JsonObject<T>(pub T);

impl<'de, T: DeserializeOwned> Deserialize<'de> for JsonObject<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        serde_json::from_value(Value::Object(fields))
            .map(JsonObject)
            .map_err(de::Error::custom)
    }
}

/// Unvalidated body of a create request
///
/// Required strings are optional here so that a missing or `null` value is
/// reported by the service as a validation failure instead of a JSON error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub status: Option<String>,
}

/// Unvalidated body of an update request (partial patch)
///
/// A field that is missing or `null` is left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub status: Option<String>,
}

impl UpdateUserRequest {
    pub fn has_updates(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.age.is_some()
            || self.status.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_reads_camel_case_keys() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{"firstName":"John","lastName":"Doe","email":"john@example.com","age":30}"#,
        )
        .unwrap();
        assert_eq!(req.first_name.as_deref(), Some("John"));
        assert_eq!(req.last_name.as_deref(), Some("Doe"));
        assert_eq!(req.age, Some(30));
        assert_eq!(req.phone, None);
    }

    #[test]
    fn create_request_missing_fields_are_absent() {
        let req: CreateUserRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.first_name, None);
        assert_eq!(req.email, None);
    }

    #[test]
    fn create_request_null_required_field_is_absent() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{"firstName":null,"lastName":"Doe","email":"john@example.com"}"#,
        )
        .unwrap();
        assert_eq!(req.first_name, None);
        assert_eq!(req.last_name.as_deref(), Some("Doe"));
    }

    #[test]
    fn object_body_decodes_fields() {
        let JsonObject(req) =
            serde_json::from_str::<JsonObject<UpdateUserRequest>>(r#"{"lastName":"Smith"}"#)
                .unwrap();
        assert_eq!(req.last_name.as_deref(), Some("Smith"));
    }

    #[test]
    fn object_body_rejects_arrays_and_scalars() {
        for body in ["[]", r#"["John"]"#, "null", "42", r#""John""#] {
            assert!(
                serde_json::from_str::<JsonObject<UpdateUserRequest>>(body).is_err(),
                "{body} should be rejected"
            );
            assert!(
                serde_json::from_str::<JsonObject<CreateUserRequest>>(body).is_err(),
                "{body} should be rejected"
            );
        }
    }

    #[test]
    fn object_body_keeps_field_type_errors() {
        assert!(serde_json::from_str::<JsonObject<UpdateUserRequest>>(r#"{"age":"old"}"#).is_err());
    }

    #[test]
    fn null_update_fields_count_as_absent() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"firstName":null,"phone":null}"#).unwrap();
        assert!(!req.has_updates());
    }

    #[test]
    fn single_update_field_counts() {
        let req: UpdateUserRequest = serde_json::from_str(r#"{"lastName":"Smith"}"#).unwrap();
        assert!(req.has_updates());
    }
}
