/// The back-office operator behind an admin request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPrincipal {
    pub name: String,
}

impl AdminPrincipal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
