#[cfg(test)]
mod cmp;

#[cfg(test)]
mod column;
