#[cfg(test)]
mod where_clause;
