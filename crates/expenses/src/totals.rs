//! Derived aggregates for the dashboards.
//!
//! Always recomputed from the full in-memory list so a status change can
//! never leave a stale figure on screen.

use claimdesk_core::Amount;

use crate::{ExpenseClaim, ExpenseStatus};

/// Aggregates shown on the user dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserTotals {
    pub total: Amount,
    pub pending: Amount,
    pub paid: Amount,
}

impl UserTotals {
    pub fn compute(claims: &[ExpenseClaim]) -> Self {
        let mut totals = UserTotals::default();
        for claim in claims {
            totals.total = totals.total.saturating_add(claim.price);
            match claim.status {
                ExpenseStatus::Pending => totals.pending = totals.pending.saturating_add(claim.price),
                ExpenseStatus::Paid => totals.paid = totals.paid.saturating_add(claim.price),
                _ => {}
            }
        }
        totals
    }
}

/// Aggregates shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdminTotals {
    pub claim_count: usize,
    pub pending_count: usize,
    pub total_amount: Amount,
}

impl AdminTotals {
    pub fn compute(claims: &[ExpenseClaim]) -> Self {
        let mut totals = AdminTotals {
            claim_count: claims.len(),
            ..AdminTotals::default()
        };
        for claim in claims {
            if claim.status == ExpenseStatus::Pending {
                totals.pending_count += 1;
            }
            totals.total_amount = totals.total_amount.saturating_add(claim.price);
        }
        totals
    }
}
