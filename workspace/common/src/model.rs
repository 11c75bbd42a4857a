//! Transport models for the `/api/allusers` payload.
//!
//! The backend speaks camelCase JSON and is lenient about optional data:
//! string fields may be missing or `null`, and `accounts` may be absent.
//! Everything here deserializes those shapes into plain owned values so the
//! view never has to special-case them again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Identifier of a user as sent by the backend.
pub type UserId = String;

/// A bank account owned by exactly one [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", try_from = "WireAccount")]
pub struct Account {
    pub id: String,
    pub bank_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub branch_name: String,
    pub account_holder_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Fields the search box looks at, in display order.
    pub fn searchable_fields(&self) -> [&str; 5] {
        [
            self.bank_name.as_str(),
            self.ifsc_code.as_str(),
            self.account_number.as_str(),
            self.account_holder_name.as_str(),
            self.branch_name.as_str(),
        ]
    }
}

/// A user row in the admin table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", try_from = "WireUser")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: Option<String>,
    pub accounts: Vec<Account>,
}

impl User {
    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    /// Email for display; absent renders as an empty cell.
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

/// Success body of `GET /api/allusers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UsersPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<User>,
}

// Wire shapes. Mongo-backed servers send `_id`, sometimes next to a virtual
// `id`; `id` wins when both are present.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAccount {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    bank_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    account_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    ifsc_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    branch_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    account_holder_name: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<WireAccount> for Account {
    type Error = &'static str;

    fn try_from(wire: WireAccount) -> Result<Self, Self::Error> {
        Ok(Self {
            id: pick_id(wire.id, wire.mongo_id)?,
            bank_name: wire.bank_name,
            account_number: wire.account_number,
            ifsc_code: wire.ifsc_code,
            branch_name: wire.branch_name,
            account_holder_name: wire.account_holder_name,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        })
    }
}

#[derive(Deserialize)]
struct WireUser {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    username: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    accounts: Vec<Account>,
}

impl TryFrom<WireUser> for User {
    type Error = &'static str;

    fn try_from(wire: WireUser) -> Result<Self, Self::Error> {
        Ok(Self {
            id: pick_id(wire.id, wire.mongo_id)?,
            username: wire.username,
            email: wire.email,
            accounts: wire.accounts,
        })
    }
}

fn pick_id(id: Option<String>, mongo_id: Option<String>) -> Result<String, &'static str> {
    id.filter(|id| !id.is_empty())
        .or(mongo_id)
        .ok_or("missing field `id`")
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// RFC 3339 timestamp, or `None` for anything else (null, numbers,
/// date-only strings). A bad timestamp only loses that field.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => match DateTime::parse_from_rfc3339(&raw) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(err) => {
                debug!(%raw, %err, "Ignoring unparseable timestamp");
                None
            }
        },
        _ => None,
    };
    Ok(parsed)
}
