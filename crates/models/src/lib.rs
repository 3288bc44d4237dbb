pub mod errors;
pub mod db;
pub mod shopping;

#[cfg(test)]
mod tests;
