#[cfg(test)]
mod args;


#[cfg(test)]
mod build;
