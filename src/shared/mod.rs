pub mod exec;

#[cfg(test)]
pub mod testing;
