use crate::{primitives::*, store::RequestSink};

/// Turns the persisted request into the variables for the next fetch.
///
/// `after` takes precedence when both cursors are present.
pub fn resolve_variables(page_size: PageSize, request: &PaginationRequest) -> PaginationVariables {
    match (&request.after, &request.before) {
        (Some(after), _) => PaginationVariables::Forward {
            first: page_size,
            after: Some(after.clone()),
        },
        (None, Some(before)) => PaginationVariables::Backward {
            last: page_size,
            before: before.clone(),
        },
        (None, None) => PaginationVariables::Forward {
            first: page_size,
            after: None,
        },
    }
}

/// Derives the navigation affordances for the page described by `page_info`.
///
/// `request` must be the request whose variables produced `page_info`. When
/// the user arrived by paginating backward the endpoint's `has_next_page` only
/// describes the window before the cursor, so moving forward is always
/// offered; the same holds for `has_previous_page` after a forward step.
pub fn derive_navigation(page_info: Option<&PageInfo>, request: &PaginationRequest) -> Navigation {
    let Some(page_info) = page_info else {
        return Navigation::default();
    };
    Navigation {
        can_go_next: request.before.is_some() || page_info.has_next_page,
        can_go_previous: request.after.is_some() || page_info.has_previous_page,
        next: Some(PaginationRequest {
            after: page_info.end_cursor.clone(),
            before: None,
        }),
        previous: Some(PaginationRequest {
            after: None,
            before: page_info.start_cursor.clone(),
        }),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    pub can_go_next: bool,
    pub can_go_previous: bool,
    next: Option<PaginationRequest>,
    previous: Option<PaginationRequest>,
}

impl Navigation {
    /// `None` until a page has been fetched.
    pub fn next_request(&self) -> Option<&PaginationRequest> {
        self.next.as_ref()
    }

    pub fn previous_request(&self) -> Option<&PaginationRequest> {
        self.previous.as_ref()
    }

    /// Replaces the persisted request with the one pointing past the current
    /// page. Returns `false` when there is no page to navigate from.
    pub fn on_next<S: RequestSink + ?Sized>(&self, sink: &mut S) -> bool {
        Self::emit(self.next.as_ref(), sink)
    }

    pub fn on_previous<S: RequestSink + ?Sized>(&self, sink: &mut S) -> bool {
        Self::emit(self.previous.as_ref(), sink)
    }

    fn emit<S: RequestSink + ?Sized>(request: Option<&PaginationRequest>, sink: &mut S) -> bool {
        match request {
            Some(request) => {
                sink.replace(request.clone());
                true
            }
            None => false,
        }
    }
}
