//! Expense submission form state machine.

use chrono::{DateTime, NaiveDate, Utc};

use claimdesk_client::{Attachment, ExpenseApi, NewClaim};
use claimdesk_core::Amount;
use claimdesk_expenses::ExpenseClaim;

use crate::notice::NoticeSlot;

/// State of the "Submit New Expense" form.
///
/// `amount` stays raw text until submission so the user can type freely;
/// it is validated through [`Amount`] when the form is sent.
#[derive(Debug, Clone)]
pub struct SubmitExpenseForm {
    pub expense_name: String,
    pub amount: String,
    pub date: NaiveDate,
    pub attachment: Option<Attachment>,
    pub(crate) in_flight: bool,
    pub notice: NoticeSlot,
}

impl SubmitExpenseForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            expense_name: String::new(),
            amount: String::new(),
            date: today,
            attachment: None,
            in_flight: false,
            notice: NoticeSlot::default(),
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn set_attachment(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }

    pub fn clear_attachment(&mut self) {
        self.attachment = None;
    }

    pub(crate) fn validate(&self) -> Result<NewClaim, String> {
        let expense_name = self.expense_name.trim();
        if expense_name.is_empty() {
            return Err("Expense name is required".to_string());
        }

        let price: Amount = self
            .amount
            .trim()
            .parse()
            .map_err(|_| "Amount must be a positive number".to_string())?;
        if !price.is_positive() {
            return Err("Amount must be a positive number".to_string());
        }

        Ok(NewClaim {
            expense_name: expense_name.to_string(),
            price,
            date: self.date,
        })
    }

    /// Submit the form.
    ///
    /// Returns the created claim on success so the owning view can prepend
    /// it to its list. Fields and attachment are cleared only on success;
    /// a submission already in flight is refused outright.
    pub async fn submit<A: ExpenseApi + ?Sized>(
        &mut self,
        api: &A,
        now: DateTime<Utc>,
    ) -> Option<ExpenseClaim> {
        if self.in_flight {
            return None;
        }

        let claim = match self.validate() {
            Ok(claim) => claim,
            Err(message) => {
                self.notice.error(message, now);
                return None;
            }
        };

        self.in_flight = true;
        let result = api.submit_claim(&claim, self.attachment.as_ref()).await;
        self.in_flight = false;

        match result {
            Ok(created) => {
                self.reset(now.date_naive());
                self.notice.success("Expense submitted successfully!", now);
                Some(created)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to submit expense");
                self.notice
                    .error(err.user_message("Failed to submit expense"), now);
                None
            }
        }
    }

    fn reset(&mut self, today: NaiveDate) {
        self.expense_name.clear();
        self.amount.clear();
        self.date = today;
        self.attachment = None;
    }
}
