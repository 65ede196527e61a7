use crate::expression::{SqlColumn, col};

/// Трейт, который позволяет передавать колонки в select()/group_by() «как удобно»:
/// - &str / String → `col("...")`
/// - SqlColumn → как есть
/// - массивы, Vec, кортежи из всего перечисленного
pub trait ColumnList {
    fn into_columns(self) -> Vec<SqlColumn>;
}

pub trait IntoColumn {
    fn into_column(self) -> SqlColumn;
}

impl IntoColumn for &str {
    #[inline]
    fn into_column(self) -> SqlColumn {
        col(self)
    }
}

impl IntoColumn for String {
    #[inline]
    fn into_column(self) -> SqlColumn {
        col(&self)
    }
}

impl IntoColumn for SqlColumn {
    #[inline]
    fn into_column(self) -> SqlColumn {
        self
    }
}

// ОДИНОЧНЫЙ аргумент: .select("id")
impl<T> ColumnList for T
where
    T: IntoColumn,
{
    #[inline]
    fn into_columns(self) -> Vec<SqlColumn> {
        vec![self.into_column()]
    }
}

impl<T, const N: usize> ColumnList for [T; N]
where
    T: IntoColumn,
{
    #[inline]
    fn into_columns(self) -> Vec<SqlColumn> {
        self.into_iter().map(IntoColumn::into_column).collect()
    }
}

impl<T> ColumnList for Vec<T>
where
    T: IntoColumn,
{
    #[inline]
    fn into_columns(self) -> Vec<SqlColumn> {
        self.into_iter().map(IntoColumn::into_column).collect()
    }
}

impl ColumnList for () {
    #[inline]
    fn into_columns(self) -> Vec<SqlColumn> {
        Vec::new()
    }
}

macro_rules! impl_column_list_for_tuple {
    ( $($T:ident),+ ) => {
        impl< $($T),+ > ColumnList for ( $($T,)+ )
        where
            $( $T: IntoColumn ),+
        {
            #[allow(non_snake_case)]
            fn into_columns(self) -> Vec<SqlColumn> {
                let ( $($T,)+ ) = self;
                vec![ $( $T.into_column() ),+ ]
            }
        }
    };
}

impl_column_list_for_tuple!(A, B);
impl_column_list_for_tuple!(A, B, C);
impl_column_list_for_tuple!(A, B, C, D);
impl_column_list_for_tuple!(A, B, C, D, E);
impl_column_list_for_tuple!(A, B, C, D, E, F);
impl_column_list_for_tuple!(A, B, C, D, E, F, G);
impl_column_list_for_tuple!(A, B, C, D, E, F, G, H);
