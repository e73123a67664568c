use serde::{Deserialize, Serialize};

/// Expense claim lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseStatus {
    Pending,
    Approved,
    Paid,
    Rejected,
}

impl ExpenseStatus {
    pub const ALL: [ExpenseStatus; 4] = [
        ExpenseStatus::Pending,
        ExpenseStatus::Approved,
        ExpenseStatus::Paid,
        ExpenseStatus::Rejected,
    ];

    /// The transitions an administrator may trigger from this status.
    ///
    /// This is the whole approval workflow: a pending claim is approved or
    /// rejected, an approved claim is paid out. REJECTED and PAID are
    /// terminal in this client; any further change requires backend
    /// intervention.
    pub fn available_transitions(self) -> &'static [ExpenseStatus] {
        match self {
            ExpenseStatus::Pending => &[ExpenseStatus::Approved, ExpenseStatus::Rejected],
            ExpenseStatus::Approved => &[ExpenseStatus::Paid],
            ExpenseStatus::Paid | ExpenseStatus::Rejected => &[],
        }
    }

    pub fn can_transition(self, to: ExpenseStatus) -> bool {
        self.available_transitions().contains(&to)
    }

    pub fn is_terminal(self) -> bool {
        self.available_transitions().is_empty()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "PENDING",
            ExpenseStatus::Approved => "APPROVED",
            ExpenseStatus::Paid => "PAID",
            ExpenseStatus::Rejected => "REJECTED",
        }
    }
}

impl core::fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
