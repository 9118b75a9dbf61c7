/// Errors the quiz screens surface to the user instead of a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The route carried no usable `role_type` query value.
    MissingRole,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::MissingRole => "No role selected. Open the quiz from a role page.",
        }
    }
}
