//! Signed-in user profile as returned by the portal login endpoint.

use serde::{Deserialize, Serialize};

/// Identity codes attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMeta {
    #[serde(default)]
    pub code: String,
    #[serde(default, rename = "governmentID")]
    pub government_id: String,
}

/// A single-sign-on provider offered to the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamlProvider {
    pub autologin: bool,
    pub label: String,
    pub method: String,
    pub request: String,
    pub sigalg: String,
    pub signature: String,
    pub slo: bool,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    #[serde(rename = "clientIP")]
    pub client_ip: String,
    pub email: String,
    pub id: i64,
    pub last_accessed_time: i64,
    pub meta: UserMeta,
    #[serde(rename = "personUUID")]
    pub person_uuid: String,
    pub saml: Vec<SamlProvider>,
    pub status: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub user_code: String,
    pub user_desc: String,
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// `data:` URL of the school photo, when it was fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}
