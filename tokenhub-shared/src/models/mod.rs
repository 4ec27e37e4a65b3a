pub mod tokens;
pub mod balance;
pub mod deploy;
pub mod mint;
pub mod burn;
pub mod errors;
