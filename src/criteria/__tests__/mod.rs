
#[cfg(test)]
mod list;

#[cfg(test)]
mod node;
