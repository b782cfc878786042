//! Query builder for record selections.

/// Records the backend returns per page request.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// A filter condition over record fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Field equals the given value.
    Equals {
        /// Field name.
        field: String,
        /// Expected value, compared as its string form.
        value: String,
    },
    /// Field lies within the closed range. An absent bound is unbounded on
    /// that side.
    Between {
        /// Field name.
        field: String,
        /// Lower bound, inclusive.
        from: Option<String>,
        /// Upper bound, inclusive.
        to: Option<String>,
    },
    /// All inner conditions hold.
    And(Vec<Condition>),
}

impl Condition {
    /// Equality condition.
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Range condition; `None` bounds are unbounded.
    pub fn between(
        field: impl Into<String>,
        from: Option<String>,
        to: Option<String>,
    ) -> Self {
        Self::Between {
            field: field.into(),
            from,
            to,
        }
    }

    /// Conjunction of conditions.
    pub fn and(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::And(conditions.into_iter().collect())
    }
}

/// Sort direction for [`Query::order_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

/// A record selection: filter, ordering and page size.
///
/// Built per call and handed to [`RecordStore`](crate::RecordStore) methods;
/// the store never mutates it.
#[derive(Debug, Clone)]
pub struct Query {
    filter: Option<Condition>,
    order_by: Option<(String, Direction)>,
    page_size: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl Query {
    /// Creates a query with no filter and the default page size.
    pub fn new() -> Self {
        Self {
            filter: None,
            order_by: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the filter condition.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.filter = Some(condition);
        self
    }

    /// Sets the ordering.
    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by = Some((field.into(), direction));
        self
    }

    /// Sets the page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// The filter condition, if any.
    pub fn condition(&self) -> Option<&Condition> {
        self.filter.as_ref()
    }

    /// The ordering, if any.
    pub fn ordering(&self) -> Option<(&str, Direction)> {
        self.order_by.as_ref().map(|(f, d)| (f.as_str(), *d))
    }

    /// Records per page.
    pub fn page_len(&self) -> usize {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let query = Query::new();
        assert!(query.condition().is_none());
        assert!(query.ordering().is_none());
        assert_eq!(query.page_len(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_builder_chain() {
        let query = Query::new()
            .filter(Condition::and([
                Condition::equals("level", "error"),
                Condition::between("added_at", None, Some("2024-01-01 00:00:00".into())),
            ]))
            .order_by("id", Direction::Desc)
            .page_size(20);

        assert_eq!(query.ordering(), Some(("id", Direction::Desc)));
        match query.condition() {
            Some(Condition::And(inner)) => assert_eq!(inner.len(), 2),
            other => panic!("unexpected condition: {other:?}"),
        }
    }
}
