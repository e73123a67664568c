//! Admin dashboard: every claim, filters, and status transitions.

use chrono::{DateTime, Utc};

use claimdesk_client::{ApiResult, ExpenseApi};
use claimdesk_core::ClaimId;
use claimdesk_expenses::{AdminTotals, ClaimFilter, ExpenseClaim, ExpenseStatus};

use crate::notice::NoticeSlot;

#[derive(Debug)]
pub struct AdminDashboard {
    claims: Vec<ExpenseClaim>,
    loading: bool,
    epoch: u64,
    pub filter: ClaimFilter,
    pub notice: NoticeSlot,
}

impl AdminDashboard {
    pub fn mount() -> Self {
        Self {
            claims: Vec::new(),
            loading: true,
            epoch: 0,
            filter: ClaimFilter::default(),
            notice: NoticeSlot::default(),
        }
    }

    /// Fetch all claims. Runs once per mount.
    pub async fn load<A: ExpenseApi + ?Sized>(&mut self, api: &A, now: DateTime<Utc>) {
        let ticket = self.begin_load();
        let result = api.all_claims().await;
        self.apply_load(ticket, result, now);
    }

    pub fn begin_load(&self) -> u64 {
        self.epoch
    }

    pub fn apply_load(
        &mut self,
        ticket: u64,
        result: ApiResult<Vec<ExpenseClaim>>,
        now: DateTime<Utc>,
    ) {
        if ticket != self.epoch {
            tracing::debug!("discarding claims fetched for an unmounted view");
            return;
        }
        self.loading = false;
        match result {
            Ok(claims) => self.claims = claims,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch expenses");
                self.notice.error("Failed to fetch expenses", now);
            }
        }
    }

    /// The transition actions to offer for a claim, per the workflow.
    pub fn actions_for(&self, id: ClaimId) -> &'static [ExpenseStatus] {
        self.claims
            .iter()
            .find(|claim| claim.id == id)
            .map(|claim| claim.status.available_transitions())
            .unwrap_or(&[])
    }

    /// Move a claim to `new_status`.
    ///
    /// Only transitions the workflow offers are issued; the backend stays
    /// authoritative and its rejection surfaces as an error notice with the
    /// prior state unchanged. On success only the affected claim is updated
    /// in place; there is no refetch.
    pub async fn transition<A: ExpenseApi + ?Sized>(
        &mut self,
        api: &A,
        id: ClaimId,
        new_status: ExpenseStatus,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(current) = self
            .claims
            .iter()
            .find(|claim| claim.id == id)
            .map(|claim| claim.status)
        else {
            tracing::warn!(%id, "ignoring transition for unknown claim");
            return false;
        };

        if !current.can_transition(new_status) {
            tracing::warn!(%id, from = %current, to = %new_status, "transition not offered by the workflow");
            return false;
        }

        match api.update_status(id, new_status).await {
            Ok(()) => {
                if let Some(claim) = self.claims.iter_mut().find(|claim| claim.id == id) {
                    claim.status = new_status;
                }
                self.notice.success(transition_message(new_status), now);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to update expense status");
                self.notice.error("Failed to update expense status", now);
                false
            }
        }
    }

    /// Claims passing both admin filters.
    pub fn filtered(&self) -> Vec<&ExpenseClaim> {
        self.filter.apply(&self.claims)
    }

    pub fn claims(&self) -> &[ExpenseClaim] {
        &self.claims
    }

    pub fn totals(&self) -> AdminTotals {
        AdminTotals::compute(&self.claims)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Invalidate any in-flight fetch; its late result will be discarded.
    pub fn unmount(&mut self) {
        self.epoch += 1;
    }
}

fn transition_message(status: ExpenseStatus) -> &'static str {
    match status {
        ExpenseStatus::Approved => "Expense approved successfully!",
        ExpenseStatus::Rejected => "Expense rejected successfully!",
        ExpenseStatus::Paid => "Expense marked as paid successfully!",
        ExpenseStatus::Pending => "Expense status updated successfully!",
    }
}
