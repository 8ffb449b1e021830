//! Header view toggle

use dealdesk_domain::IdentityConfig;

/// Which dashboard the header currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderState {
    employee_id: String,
    email: String,
    manager_view: bool,
}

impl HeaderState {
    pub fn new(employee_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self { employee_id: employee_id.into(), email: email.into(), manager_view: false }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub const fn is_manager_view(&self) -> bool {
        self.manager_view
    }

    /// Flip between the individual and manager views, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.manager_view = !self.manager_view;
        self.manager_view
    }

    pub fn set_manager_view(&mut self, manager_view: bool) {
        self.manager_view = manager_view;
    }
}

impl From<&IdentityConfig> for HeaderState {
    fn from(identity: &IdentityConfig) -> Self {
        Self::new(identity.employee_id.clone(), identity.email.clone())
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::from(&IdentityConfig::default())
    }
}
