use chrono::NaiveDateTime;
use marketdash_core::errors::ValidationError;
use marketdash_core::users::{NewUser, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Registration body. Fields stay loosely typed so that absent, empty and
/// wrongly-typed values can be told apart.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

fn is_blank(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

fn as_string(value: Option<Value>) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(s)) => Ok(s),
        _ => Err(ValidationError::InvalidPayload),
    }
}

/// Names are stored as text whatever JSON type they arrive as.
fn as_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

impl TryFrom<RegisterRequest> for NewUser {
    type Error = ValidationError;

    fn try_from(req: RegisterRequest) -> Result<Self, Self::Error> {
        if is_blank(&req.name) || is_blank(&req.email) || is_blank(&req.password) {
            return Err(ValidationError::MissingFields);
        }
        let email = as_string(req.email)?;
        let password = as_string(req.password)?;
        Ok(NewUser {
            name: as_text(req.name),
            email,
            password,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub ok: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    #[serde(rename = "type")]
    pub news_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
            email_verified: user.email_verified,
            image: user.image,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub db: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> RegisterRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_register_request_missing_fields() {
        for body in [
            json!({"email": "a@b.io", "password": "long enough"}),
            json!({"name": "", "email": "a@b.io", "password": "long enough"}),
            json!({"name": "A", "email": null, "password": "long enough"}),
            json!({"name": "A", "email": "a@b.io", "password": 0}),
        ] {
            let err = NewUser::try_from(request(body)).unwrap_err();
            assert_eq!(err, ValidationError::MissingFields);
        }
    }

    #[test]
    fn test_register_request_non_string_is_invalid() {
        let err = NewUser::try_from(request(
            json!({"name": "A", "email": "a@b.io", "password": 12345678}),
        ))
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidPayload);

        let err = NewUser::try_from(request(
            json!({"name": "A", "email": ["a@b.io"], "password": "long enough"}),
        ))
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidPayload);
    }

    #[test]
    fn test_register_request_accepts_non_string_name() {
        let user = NewUser::try_from(request(
            json!({"name": 42, "email": "n@x.io", "password": "long enough"}),
        ))
        .unwrap();
        assert_eq!(user.name, "42");

        let user = NewUser::try_from(request(
            json!({"name": true, "email": "t@x.io", "password": "long enough"}),
        ))
        .unwrap();
        assert_eq!(user.name, "true");
    }

    #[test]
    fn test_register_request_converts() {
        let user = NewUser::try_from(request(
            json!({"name": "Asha", "email": "asha@example.com", "password": "long enough"}),
        ))
        .unwrap();
        assert_eq!(user.name, "Asha");
        assert_eq!(user.email, "asha@example.com");
    }
}
