// User models
// Wire shapes for the users resource plus the helpers the list view searches over

use serde::{Deserialize, Serialize};

/// A user record as stored by the backing service.
///
/// `id == 0` is reserved for a draft that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Create payload: a user without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl User {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// "First Last", trimmed when either half is empty
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name).trim().to_string()
    }

    /// Case-insensitive match against full name, username, email and phone.
    /// `needle` must already be lowercased. The name is matched as
    /// `"{name} {last_name}"` without trimming.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let fields = [
            Some(format!("{} {}", self.name, self.last_name)),
            self.username.clone(),
            Some(self.email.clone()),
            self.phone.clone(),
        ];
        fields
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Everything but the id, for a create request
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
        }
    }
}

impl NewUser {
    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            last_name: self.last_name,
            email: self.email,
            username: self.username,
            phone: self.phone,
            website: self.website,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_record() {
        // Demo backends often return extra nested objects and no lastName
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.last_name, "");
        assert_eq!(user.username.as_deref(), Some("Bret"));
        assert_eq!(user.website.as_deref(), Some("hildegard.org"));
    }

    #[test]
    fn test_serialize_uses_camel_case_and_skips_missing() {
        let user = User::new(3, "Ann", "Lee", "ann@example.com");
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["lastName"], "Lee");
        assert!(value.get("last_name").is_none());
        assert!(value.get("phone").is_none());
    }

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new(9, "Bo", "Diddley", "bo@example.com").with_phone("555");
        let payload = serde_json::to_value(user.to_new_user()).unwrap();
        assert!(payload.get("id").is_none());
        assert_eq!(payload["phone"], "555");
    }

    #[test]
    fn test_matches_full_name_across_halves() {
        let user = User::new(1, "Ann", "Lee", "a@example.com");
        assert!(user.matches("ann lee"));
        assert!(user.matches("n l"));
        assert!(!user.matches("lee ann"));
    }

    #[test]
    fn test_matches_trailing_space_with_empty_last_name() {
        let user = User::new(1, "Ann", "", "a@example.com");
        assert_eq!(user.full_name(), "Ann");
        assert!(user.matches("ann "));
        assert!(!user.matches("ann x"));
    }

    #[test]
    fn test_matches_optional_fields() {
        let user = User::new(1, "Ann", "Lee", "a@example.com")
            .with_username("annie")
            .with_phone("555-0101")
            .with_website("ann.dev");
        assert!(user.matches("annie"));
        assert!(user.matches("0101"));
        // website is displayed but not searched
        assert!(!user.matches("ann.dev"));
    }
}
