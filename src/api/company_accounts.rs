use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ApiError;
use crate::models::CompanyAccount;
use crate::validation::{
    validate_amount_bounds, validate_max_len, validate_payment_type, validate_required,
    ValidationError, ACCOUNT_FIELD_MAX_LEN,
};

/// Full-record body for company account create and update; the backend does
/// no partial-field diffing, it stores what the caller sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAccountInput {
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

impl CompanyAccountInput {
    /// Field checks shared by create and update, before any network call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("bank_name", &self.bank_name)?;
        validate_payment_type(&self.payment_type)?;
        validate_required("account_holder_name", &self.account_holder_name)?;
        validate_required("account_number", &self.account_number)?;
        validate_max_len("account_number", &self.account_number, ACCOUNT_FIELD_MAX_LEN)?;
        validate_amount_bounds(&self.min, &self.max)?;
        Ok(())
    }
}

impl ApiClient {
    /// `GET /company-accounts`.
    pub async fn fetch_company_accounts(&self) -> Result<Vec<CompanyAccount>, ApiError> {
        self.execute(
            self.get("/company-accounts"),
            "Failed to fetch company accounts",
        )
        .await
    }

    /// `POST /company-accounts`.
    pub async fn create_company_account(
        &self,
        input: &CompanyAccountInput,
    ) -> Result<CompanyAccount, ApiError> {
        self.execute(
            self.post("/company-accounts").json(input),
            "Failed to create company account",
        )
        .await
    }

    /// `PATCH /company-accounts/{id}` with a full-record body.
    pub async fn update_company_account(
        &self,
        id: &str,
        input: &CompanyAccountInput,
    ) -> Result<CompanyAccount, ApiError> {
        self.execute(
            self.patch(&format!("/company-accounts/{id}")).json(input),
            "Failed to update company account",
        )
        .await
    }

    /// `DELETE /company-accounts/{id}`.
    pub async fn delete_company_account(&self, id: &str) -> Result<(), ApiError> {
        self.execute_empty(
            self.delete(&format!("/company-accounts/{id}")),
            "Failed to delete company account",
        )
        .await
    }
}
