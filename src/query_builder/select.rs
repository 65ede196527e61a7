use super::QueryBuilder;
use super::args::ColumnList;

impl QueryBuilder {
    /// SELECT <cols...>; без вызова: `SELECT *`
    pub fn select<A: ColumnList>(mut self, columns: A) -> Self {
        self.columns.extend(columns.into_columns());
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// GROUP BY <cols...>
    pub fn group_by<A: ColumnList>(mut self, columns: A) -> Self {
        self.group_by.extend(columns.into_columns());
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }
}
