use crate::primitives::*;

/// Logical position of a list view.
///
/// `INITIAL --next--> FORWARD`, `FORWARD --next--> FORWARD`,
/// `FORWARD --previous--> BACKWARD`, `BACKWARD --previous--> BACKWARD`,
/// `BACKWARD --next--> FORWARD`. There is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaginationState {
    Initial,
    Forward(Cursor),
    Backward(Cursor),
}

impl PaginationState {
    pub fn cursor(&self) -> Option<&Cursor> {
        match self {
            Self::Initial => None,
            Self::Forward(cursor) | Self::Backward(cursor) => Some(cursor),
        }
    }
}

impl From<&PaginationRequest> for PaginationState {
    fn from(request: &PaginationRequest) -> Self {
        match (&request.after, &request.before) {
            (Some(after), _) => Self::Forward(after.clone()),
            (None, Some(before)) => Self::Backward(before.clone()),
            (None, None) => Self::Initial,
        }
    }
}

impl From<PaginationState> for PaginationRequest {
    fn from(state: PaginationState) -> Self {
        match state {
            PaginationState::Initial => PaginationRequest::first_page(),
            PaginationState::Forward(cursor) => PaginationRequest::after(cursor),
            PaginationState::Backward(cursor) => PaginationRequest::before(cursor),
        }
    }
}
