//! User profile types.

use serde::{Deserialize, Serialize};

/// Interface language of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Spanish.
    Es,
    /// English.
    En,
}

impl Lang {
    /// The wire representation (`"es"` / `"en"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Postal address attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: u32,
}

/// Full user profile as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub mobile_phone: String,
    pub address: Address,
    pub lang: Lang,
}

/// Avatar image payload for `profile().update_profile()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    /// File name reported in the multipart part (e.g. `avatar.png`).
    pub file_name: String,
    /// MIME type of the file contents (e.g. `image/png`).
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Partial profile update sent as a multipart form.
///
/// Unset fields are omitted from the form entirely. The avatar is
/// mandatory and always sent as a file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_phone: Option<String>,
    pub address: Option<Address>,
    pub lang: Option<Lang>,
    pub avatar: AvatarUpload,
}

impl ProfileUpdate {
    /// Start an update carrying only the avatar.
    pub fn new(avatar: AvatarUpload) -> Self {
        Self {
            first_name: None,
            last_name: None,
            mobile_phone: None,
            address: None,
            lang: None,
            avatar,
        }
    }

    /// Set the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the mobile phone number.
    pub fn mobile_phone(mut self, mobile_phone: impl Into<String>) -> Self {
        self.mobile_phone = Some(mobile_phone.into());
        self
    }

    /// Set the postal address.
    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Set the interface language.
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = Some(lang);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_wire_values() {
        assert_eq!(serde_json::to_value(Lang::Es).unwrap(), "es");
        assert_eq!(serde_json::to_value(Lang::En).unwrap(), "en");
        assert_eq!(serde_json::from_str::<Lang>("\"en\"").unwrap(), Lang::En);
    }

    #[test]
    fn test_user_profile_from_server_json() {
        let body = r#"{
            "first_name": "Ana",
            "last_name": "Diaz",
            "mobile_phone": "+5355512345",
            "address": {
                "address": "Calle 23 #456",
                "city": "La Habana",
                "state": "La Habana",
                "country": "CU",
                "postal_code": 10400
            },
            "lang": "es"
        }"#;

        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.first_name, "Ana");
        assert_eq!(profile.address.postal_code, 10400);
        assert_eq!(profile.lang, Lang::Es);
    }

    #[test]
    fn test_profile_update_builder_sets_only_named_fields() {
        let update = ProfileUpdate::new(AvatarUpload::new("a.png", "image/png", vec![1, 2]))
            .first_name("Ana")
            .lang(Lang::En);

        assert_eq!(update.first_name.as_deref(), Some("Ana"));
        assert_eq!(update.lang, Some(Lang::En));
        assert!(update.last_name.is_none());
        assert!(update.address.is_none());
    }
}
