use crate::{ExpenseClaim, ExpenseStatus};

/// Client-side admin list filter: free text + exact status.
///
/// The two predicates are independent and composable. Free text matches
/// case-insensitively against the claim name or the owner's display name;
/// empty text matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimFilter {
    pub text: String,
    pub status: Option<ExpenseStatus>,
}

impl ClaimFilter {
    pub fn matches(&self, claim: &ExpenseClaim) -> bool {
        let needle = self.text.trim().to_lowercase();
        let matches_text = needle.is_empty()
            || claim.expense_name.to_lowercase().contains(&needle)
            || claim
                .owner_name()
                .is_some_and(|name| name.to_lowercase().contains(&needle));
        let matches_status = self.status.is_none_or(|status| status == claim.status);
        matches_text && matches_status
    }

    pub fn apply<'a>(&self, claims: &'a [ExpenseClaim]) -> Vec<&'a ExpenseClaim> {
        claims.iter().filter(|claim| self.matches(claim)).collect()
    }
}
