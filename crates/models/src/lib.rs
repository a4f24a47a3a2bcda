pub mod errors;
pub mod db;
pub mod user;
pub mod ad;

#[cfg(test)]
mod tests;
