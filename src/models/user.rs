use serde::{Deserialize, Serialize};

/// One managed customer record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct User {
    pub name: String,
    pub email: String,
    pub gender: String,
}

/// Payload of the add-user form.
///
/// `name` must be present; `email` and `gender` fall back to an empty string
/// when the field is omitted (an untouched gender select submits nothing).
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct NewUser {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
}

impl From<NewUser> for User {
    fn from(form: NewUser) -> Self {
        Self {
            name: form.name,
            email: form.email,
            gender: form.gender,
        }
    }
}

impl User {
    pub fn new(name: &str, email: &str, gender: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            gender: gender.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_optional_fields_default_to_empty() {
        let form: NewUser = serde_json::from_str(r#"{"name": "Yaw"}"#).unwrap();
        let user = User::from(form);

        assert_eq!(user.name, "Yaw");
        assert_eq!(user.email, "");
        assert_eq!(user.gender, "");
    }

    #[test]
    fn test_new_user_requires_name() {
        let result = serde_json::from_str::<NewUser>(r#"{"email": "a@b.c", "gender": "Male"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let form: NewUser = serde_json::from_str(
            r#"{"name": "  Esi ", "email": "ESI@MAIL", "gender": "female"}"#,
        )
        .unwrap();
        let user = User::from(form);

        assert_eq!(user, User::new("  Esi ", "ESI@MAIL", "female"));
    }
}
