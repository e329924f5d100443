pub mod create;
pub mod health;
