//! Users

use serde::{Deserialize, Serialize};

use crate::{addresses::Address, ids::Id, secret::Secret};

/// User Id
pub type UserId = Id<User>;

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    /// Ordinary customer
    #[default]
    #[serde(rename = "ROLE_CUSTOMER")]
    Customer,

    /// Restaurant owner
    #[serde(rename = "ROLE_RESTAURANT_OWNER")]
    RestaurantOwner,

    /// Administrator
    #[serde(rename = "ROLE_ADMIN")]
    Admin,

    /// A role this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server id
    #[serde(default)]
    pub id: Option<UserId>,

    /// Full name
    #[serde(default)]
    pub full_name: String,

    /// Email address
    pub email: String,

    /// Role
    #[serde(default)]
    pub role: Role,

    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Default delivery address
    #[serde(default)]
    pub address: Option<Address>,
}

/// Sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Email address
    pub email: String,

    /// Password
    pub password: Secret,
}

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Full name
    pub full_name: String,

    /// Email address
    pub email: String,

    /// Password
    pub password: Secret,

    /// Requested role
    #[serde(default)]
    pub role: Role,
}

/// Profile update request body. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// New phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// New default delivery address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl ProfileUpdate {
    /// Returns true if the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.phone.is_none() && self.address.is_none()
    }
}

/// Response to sign-in and sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Session token
    pub jwt: Secret,

    /// Server message
    #[serde(default)]
    pub message: Option<String>,

    /// Role of the signed-in account
    #[serde(default)]
    pub role: Role,
}
