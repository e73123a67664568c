//! User dashboard: the caller's own claims plus the submission form.

use chrono::{DateTime, NaiveDate, Utc};

use claimdesk_client::{ApiResult, ExpenseApi};
use claimdesk_expenses::{ExpenseClaim, UserTotals};

use crate::notice::NoticeSlot;
use crate::submit::SubmitExpenseForm;

#[derive(Debug)]
pub struct UserDashboard {
    claims: Vec<ExpenseClaim>,
    loading: bool,
    epoch: u64,
    pub notice: NoticeSlot,
    pub form: SubmitExpenseForm,
}

impl UserDashboard {
    pub fn mount(today: NaiveDate) -> Self {
        Self {
            claims: Vec::new(),
            loading: true,
            epoch: 0,
            notice: NoticeSlot::default(),
            form: SubmitExpenseForm::new(today),
        }
    }

    /// Fetch the caller's claims. Runs once per mount, before any
    /// user-triggered mutation.
    pub async fn load<A: ExpenseApi + ?Sized>(&mut self, api: &A, now: DateTime<Utc>) {
        let ticket = self.begin_load();
        let result = api.my_claims().await;
        self.apply_load(ticket, result, now);
    }

    /// Start a fetch, returning the ticket that stamps its result.
    pub fn begin_load(&self) -> u64 {
        self.epoch
    }

    /// Apply a fetch result, unless the view was unmounted in the meantime.
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

    /// Drive the submission form; on success the created claim goes to the
    /// head of the list.
    pub async fn submit<A: ExpenseApi + ?Sized>(&mut self, api: &A, now: DateTime<Utc>) -> bool {
        match self.form.submit(api, now).await {
            Some(created) => {
                self.claims.insert(0, created);
                true
            }
            None => false,
        }
    }

    pub fn claims(&self) -> &[ExpenseClaim] {
        &self.claims
    }

    pub fn totals(&self) -> UserTotals {
        UserTotals::compute(&self.claims)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Invalidate any in-flight fetch; its late result will be discarded.
    pub fn unmount(&mut self) {
        self.epoch += 1;
    }
}
