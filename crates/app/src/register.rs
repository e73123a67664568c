//! Registration form state.

use crate::notice::NoticeSlot;

#[derive(Debug, Clone, Default)]
pub struct RegisterFlow {
    pub name: String,
    pub email: String,
    pub password: String,
    pub(crate) in_flight: bool,
    pub notice: NoticeSlot,
}

impl RegisterFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub(crate) fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
    }
}
