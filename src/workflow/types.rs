//! Page states.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// Prospects fetched, nothing selected yet.
    Listing,
    /// The backend returned no selectable prospect. Terminal.
    NoProspects,
    /// A prospect is on screen.
    Selected { id: String },
    /// The chosen id did not resolve to a fetched record. Terminal.
    Failed(String),
}

impl PageState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PageState::NoProspects | PageState::Failed(_))
    }
}
