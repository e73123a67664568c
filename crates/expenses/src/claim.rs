use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use claimdesk_core::{Amount, ClaimId, Entity, UserId};

use crate::ExpenseStatus;

/// The user a claim belongs to, as the backend nests it under `user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimOwner {
    pub id: UserId,
    pub name: String,
}

/// A single expense reimbursement request.
///
/// Created by a user submission, mutated only by admin status transitions.
/// Field names follow the backend's camelCase JSON (`expenseName`, `price`,
/// `proofImagePath`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseClaim {
    pub id: ClaimId,
    pub expense_name: String,
    pub price: Amount,
    pub date: NaiveDate,
    pub status: ExpenseStatus,
    /// Opaque reference to an uploaded receipt, resolvable through the
    /// files endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_image_path: Option<String>,
    /// Present on admin listings; the caller's own listings may omit it.
    #[serde(default, rename = "user", skip_serializing_if = "Option::is_none")]
    pub owner: Option<ClaimOwner>,
}

impl ExpenseClaim {
    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().map(|o| o.name.as_str())
    }

    pub fn has_receipt(&self) -> bool {
        self.proof_image_path.is_some()
    }
}

impl Entity for ExpenseClaim {
    type Id = ClaimId;

    fn id(&self) -> &ClaimId {
        &self.id
    }
}
