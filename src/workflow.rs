use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionStatus};
use crate::validation::{sanitize_string, validate_rejection_note, ValidationError};

/// Minimal mutation payload for a status transition.
///
/// Server-computed and immutable fields (amount, payment type, creation time,
/// the embedded submitter) are deliberately absent so a stale client copy can
/// never overwrite them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusPatch {
    pub transaction_user_id: String,
    pub status: TransactionStatus,
    pub user_account_number: String,
    pub user_account_holder_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_note: Option<String>,
}

/// Transitions the review workflow offers from a given status.
///
/// `pending` is the entry state; once a transaction leaves it there is no way
/// back through this workflow.
pub fn offered_transitions(current: TransactionStatus) -> &'static [TransactionStatus] {
    match current {
        TransactionStatus::Pending => &[TransactionStatus::Received, TransactionStatus::Rejected],
        TransactionStatus::Received | TransactionStatus::Rejected => &[],
    }
}

/// Validates a proposed transition and builds the outgoing payload.
///
/// Rejecting requires a non-empty note; any other target status drops the
/// note from the payload entirely, even when one was supplied. Fails before
/// any network call is made.
pub fn build_status_patch(
    tx: &Transaction,
    proposed: TransactionStatus,
    rejection_note: Option<&str>,
) -> Result<TransactionStatusPatch, ValidationError> {
    let rejection_note = match proposed {
        TransactionStatus::Rejected => {
            let note = sanitize_string(rejection_note.unwrap_or_default());
            validate_rejection_note(&note)?;
            Some(note)
        }
        _ => None,
    };

    Ok(TransactionStatusPatch {
        transaction_user_id: tx.transaction_user_id.clone(),
        status: proposed,
        user_account_number: tx.user_account_number.clone(),
        user_account_holder_name: tx.user_account_holder_name.clone(),
        rejection_note,
    })
}
