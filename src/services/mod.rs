pub mod health;
pub mod turn_timeout;
