use bigdecimal::BigDecimal;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::Entity;
use crate::validation::ALLOWED_PAYMENT_TYPES;

/// Review status of a submitted payment transaction.
///
/// Every transaction starts out `pending`; the review workflow moves it to
/// `received` or `rejected` and offers no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Received,
    Rejected,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Pending,
        TransactionStatus::Received,
        TransactionStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Received => "received",
            TransactionStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionStatus::Pending)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Finance,
}

/// Submitter details denormalized onto a transaction at creation time.
/// Read-only on the client; never part of a mutation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedUser {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// A user-submitted payment record awaiting financial review.
///
/// Wire names follow the backend's JSON: `_id`, camelCase fields, RFC 3339
/// timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: BigDecimal,
    pub company_account_number: String,
    pub transaction_user_id: String,
    pub user_account_number: String,
    pub user_account_holder_name: String,
    pub payment_type: String,
    pub payment_method: String,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user: EmbeddedUser,
}

impl Transaction {
    /// RFC 3339 rendering of `created_at`, as the date and time filters see it.
    pub fn created_at_rfc3339(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// A rejected transaction carries a non-empty note; any other status
    /// carries none.
    pub fn rejection_note_consistent(&self) -> bool {
        match self.status {
            TransactionStatus::Rejected => self
                .rejection_note
                .as_deref()
                .is_some_and(|note| !note.trim().is_empty()),
            _ => self
                .rejection_note
                .as_deref()
                .map_or(true, |note| note.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub ip_address: String,
    pub role: Role,
}

/// A payout/receiving bank or wallet profile the finance team manages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAccount {
    #[serde(rename = "_id")]
    pub id: String,
    pub bank_name: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "QRcode", default)]
    pub qr_code: String,
    pub min: BigDecimal,
    pub max: BigDecimal,
    pub payment_type: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub payment_method: String,
    #[serde(rename = "WalletAddress", default)]
    pub wallet_address: String,
}

impl CompanyAccount {
    /// Whether the account's payment type is still offered to users.
    pub fn has_active_payment_type(&self) -> bool {
        ALLOWED_PAYMENT_TYPES.contains(&self.payment_type.as_str())
    }
}

impl Entity for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for CompanyAccount {
    fn id(&self) -> &str {
        &self.id
    }
}
