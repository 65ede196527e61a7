use super::SqlColumn;
use crate::param::Param;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
}

impl CmpOp {
    pub fn as_sql(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::NotEq => "<>",
            CmpOp::Gt => ">",
            CmpOp::GtEq => ">=",
            CmpOp::Lt => "<",
            CmpOp::LtEq => "<=",
        }
    }
}

/// Предикат над колонкой (правая часть условия).
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    /// `<col> <op> ?`
    Compare { op: CmpOp, value: Param },
    /// `<col> <op> <other col>`: в первую очередь для JOIN ... ON
    CompareColumn { op: CmpOp, column: SqlColumn },
    /// `IS [NOT] NULL`
    Null { negated: bool },
    /// `[NOT] IN (?, ?, ...)`
    ///
    /// `when_present = true`: пустой список не ошибка, условие просто не рендерится.
    In {
        values: Vec<Param>,
        negated: bool,
        when_present: bool,
    },
    /// `[NOT] BETWEEN ? AND ?`
    Between {
        low: Param,
        high: Param,
        negated: bool,
    },
    /// `[NOT] LIKE ?`
    Like { pattern: Param, negated: bool },
    /// Значение не передали (`*_when_present(None)`): условие молча пропускается.
    Absent,
}

impl Condition {
    /// Даст ли условие хоть какой-то SQL.
    pub fn is_renderable(&self) -> bool {
        match self {
            Condition::Absent => false,
            Condition::In {
                values,
                when_present: true,
                ..
            } => !values.is_empty(),
            _ => true,
        }
    }
}

/// Колонка + предикат. Лист дерева критериев.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnCondition {
    pub(crate) column: SqlColumn,
    pub(crate) condition: Condition,
}

impl ColumnCondition {
    pub fn new(column: SqlColumn, condition: Condition) -> Self {
        Self { column, condition }
    }

    #[inline]
    pub fn column(&self) -> &SqlColumn {
        &self.column
    }

    #[inline]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    #[inline]
    pub fn is_renderable(&self) -> bool {
        self.condition.is_renderable()
    }
}

#[inline]
fn compare<V: Into<Param>>(column: SqlColumn, op: CmpOp, value: V) -> ColumnCondition {
    ColumnCondition::new(
        column,
        Condition::Compare {
            op,
            value: value.into(),
        },
    )
}

#[inline]
fn compare_when_present<V: Into<Param>>(
    column: SqlColumn,
    op: CmpOp,
    value: Option<V>,
) -> ColumnCondition {
    match value {
        Some(v) => compare(column, op, v),
        None => ColumnCondition::new(column, Condition::Absent),
    }
}

#[inline]
fn compare_column(column: SqlColumn, op: CmpOp, other: SqlColumn) -> ColumnCondition {
    ColumnCondition::new(column, Condition::CompareColumn { op, column: other })
}

fn in_list<I, V>(column: SqlColumn, values: I, negated: bool) -> ColumnCondition
where
    I: IntoIterator<Item = V>,
    V: Into<Param>,
{
    ColumnCondition::new(
        column,
        Condition::In {
            values: values.into_iter().map(Into::into).collect(),
            negated,
            when_present: false,
        },
    )
}

fn in_list_when_present<I, V>(column: SqlColumn, values: I, negated: bool) -> ColumnCondition
where
    I: IntoIterator<Item = Option<V>>,
    V: Into<Param>,
{
    // None-значения выкидываем, пустой остаток → условие не рендерится
    ColumnCondition::new(
        column,
        Condition::In {
            values: values.into_iter().flatten().map(Into::into).collect(),
            negated,
            when_present: true,
        },
    )
}

impl SqlColumn {
    // ----- сравнения со значением -----

    pub fn is_equal_to<V: Into<Param>>(self, value: V) -> ColumnCondition {
        compare(self, CmpOp::Eq, value)
    }
    pub fn is_not_equal_to<V: Into<Param>>(self, value: V) -> ColumnCondition {
        compare(self, CmpOp::NotEq, value)
    }
    pub fn is_greater_than<V: Into<Param>>(self, value: V) -> ColumnCondition {
        compare(self, CmpOp::Gt, value)
    }
    pub fn is_greater_than_or_equal_to<V: Into<Param>>(self, value: V) -> ColumnCondition {
        compare(self, CmpOp::GtEq, value)
    }
    pub fn is_less_than<V: Into<Param>>(self, value: V) -> ColumnCondition {
        compare(self, CmpOp::Lt, value)
    }
    pub fn is_less_than_or_equal_to<V: Into<Param>>(self, value: V) -> ColumnCondition {
        compare(self, CmpOp::LtEq, value)
    }

    // ----- *_when_present: None → условие пропускается -----

    pub fn is_equal_to_when_present<V: Into<Param>>(self, value: Option<V>) -> ColumnCondition {
        compare_when_present(self, CmpOp::Eq, value)
    }
    pub fn is_not_equal_to_when_present<V: Into<Param>>(
        self,
        value: Option<V>,
    ) -> ColumnCondition {
        compare_when_present(self, CmpOp::NotEq, value)
    }
    pub fn is_greater_than_when_present<V: Into<Param>>(
        self,
        value: Option<V>,
    ) -> ColumnCondition {
        compare_when_present(self, CmpOp::Gt, value)
    }
    pub fn is_less_than_when_present<V: Into<Param>>(self, value: Option<V>) -> ColumnCondition {
        compare_when_present(self, CmpOp::Lt, value)
    }

    // ----- сравнения с другой колонкой -----

    pub fn is_equal_to_column(self, other: SqlColumn) -> ColumnCondition {
        compare_column(self, CmpOp::Eq, other)
    }
    pub fn is_not_equal_to_column(self, other: SqlColumn) -> ColumnCondition {
        compare_column(self, CmpOp::NotEq, other)
    }
    pub fn is_greater_than_column(self, other: SqlColumn) -> ColumnCondition {
        compare_column(self, CmpOp::Gt, other)
    }
    pub fn is_less_than_column(self, other: SqlColumn) -> ColumnCondition {
        compare_column(self, CmpOp::Lt, other)
    }

    // ----- NULL -----

    pub fn is_null(self) -> ColumnCondition {
        ColumnCondition::new(self, Condition::Null { negated: false })
    }
    pub fn is_not_null(self) -> ColumnCondition {
        ColumnCondition::new(self, Condition::Null { negated: true })
    }

    // ----- IN -----

    pub fn is_in<I, V>(self, values: I) -> ColumnCondition
    where
        I: IntoIterator<Item = V>,
        V: Into<Param>,
    {
        in_list(self, values, false)
    }
    pub fn is_not_in<I, V>(self, values: I) -> ColumnCondition
    where
        I: IntoIterator<Item = V>,
        V: Into<Param>,
    {
        in_list(self, values, true)
    }
    pub fn is_in_when_present<I, V>(self, values: I) -> ColumnCondition
    where
        I: IntoIterator<Item = Option<V>>,
        V: Into<Param>,
    {
        in_list_when_present(self, values, false)
    }
    pub fn is_not_in_when_present<I, V>(self, values: I) -> ColumnCondition
    where
        I: IntoIterator<Item = Option<V>>,
        V: Into<Param>,
    {
        in_list_when_present(self, values, true)
    }

    // ----- BETWEEN -----

    pub fn is_between<L, H>(self, low: L, high: H) -> ColumnCondition
    where
        L: Into<Param>,
        H: Into<Param>,
    {
        ColumnCondition::new(
            self,
            Condition::Between {
                low: low.into(),
                high: high.into(),
                negated: false,
            },
        )
    }
    pub fn is_not_between<L, H>(self, low: L, high: H) -> ColumnCondition
    where
        L: Into<Param>,
        H: Into<Param>,
    {
        ColumnCondition::new(
            self,
            Condition::Between {
                low: low.into(),
                high: high.into(),
                negated: true,
            },
        )
    }

    // ----- LIKE -----

    pub fn is_like<V: Into<Param>>(self, pattern: V) -> ColumnCondition {
        ColumnCondition::new(
            self,
            Condition::Like {
                pattern: pattern.into(),
                negated: false,
            },
        )
    }
    pub fn is_not_like<V: Into<Param>>(self, pattern: V) -> ColumnCondition {
        ColumnCondition::new(
            self,
            Condition::Like {
                pattern: pattern.into(),
                negated: true,
            },
        )
    }
    pub fn is_like_when_present<V: Into<Param>>(self, pattern: Option<V>) -> ColumnCondition {
        match pattern {
            Some(p) => self.is_like(p),
            None => ColumnCondition::new(self, Condition::Absent),
        }
    }
}
