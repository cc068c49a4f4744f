use serde::{Deserialize, Serialize};

use super::primitives::{Cursor, PageSize};

/// Fetch parameters for a connection-style list endpoint.
///
/// Exactly one of the `{first, after}` / `{last, before}` pairs is ever
/// populated. Serializes to the flat variable object a GraphQL client expects,
/// with absent keys omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaginationVariables {
    Forward {
        first: PageSize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        after: Option<Cursor>,
    },
    Backward {
        last: PageSize,
        before: Cursor,
    },
}

impl PaginationVariables {
    pub fn first(&self) -> Option<PageSize> {
        match self {
            Self::Forward { first, .. } => Some(*first),
            Self::Backward { .. } => None,
        }
    }

    pub fn after(&self) -> Option<&Cursor> {
        match self {
            Self::Forward { after, .. } => after.as_ref(),
            Self::Backward { .. } => None,
        }
    }

    pub fn last(&self) -> Option<PageSize> {
        match self {
            Self::Forward { .. } => None,
            Self::Backward { last, .. } => Some(*last),
        }
    }

    pub fn before(&self) -> Option<&Cursor> {
        match self {
            Self::Forward { .. } => None,
            Self::Backward { before, .. } => Some(before),
        }
    }

    pub fn page_size(&self) -> PageSize {
        match self {
            Self::Forward { first, .. } => *first,
            Self::Backward { last, .. } => *last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: u32) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn serializes_flat_variable_objects() {
        let first_page = PaginationVariables::Forward {
            first: size(20),
            after: None,
        };
        assert_eq!(serde_json::to_string(&first_page).unwrap(), r#"{"first":20}"#);

        let forward = PaginationVariables::Forward {
            first: size(20),
            after: Some(Cursor::from("X")),
        };
        assert_eq!(
            serde_json::to_string(&forward).unwrap(),
            r#"{"first":20,"after":"X"}"#
        );

        let backward = PaginationVariables::Backward {
            last: size(20),
            before: Cursor::from("Y"),
        };
        assert_eq!(
            serde_json::to_string(&backward).unwrap(),
            r#"{"last":20,"before":"Y"}"#
        );
    }

    #[test]
    fn deserializes_backward_variables() {
        let vars: PaginationVariables =
            serde_json::from_str(r#"{"last":10,"before":"Y"}"#).unwrap();
        assert_eq!(vars.last(), Some(size(10)));
        assert_eq!(vars.before(), Some(&Cursor::from("Y")));
        assert_eq!(vars.first(), None);
        assert_eq!(vars.after(), None);
    }
}
