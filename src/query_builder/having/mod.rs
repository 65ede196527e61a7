
use crate::criteria::{ConnectedAggregate, IntoScope};
use crate::query_builder::QueryBuilder;

impl QueryBuilder {
    /// HAVING <scope>: тот же движок, что и WHERE
    pub fn having<S: IntoScope>(mut self, scope: S) -> Self {
        self.update_having(|h| scope.apply_to(h));
        self
    }

    pub fn and_having<S: IntoScope>(mut self, scope: S) -> Self {
        self.update_having(|h| h.and(scope));
        self
    }

    pub fn or_having<S: IntoScope>(mut self, scope: S) -> Self {
        self.update_having(|h| h.or(scope));
        self
    }

    pub fn having_not<S: IntoScope>(mut self, scope: S) -> Self {
        self.update_having(|h| h.not(scope));
        self
    }

    /// HAVING <raw SQL>
    pub fn having_raw(mut self, raw: &str) -> Self {
        self.update_having(|h| h.raw(raw));
        self
    }

    pub fn and_having_list<I>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = ConnectedAggregate>,
    {
        self.update_having(|h| h.and_list(criteria));
        self
    }

    pub fn or_having_list<I>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = ConnectedAggregate>,
    {
        self.update_having(|h| h.or_list(criteria));
        self
    }
}
