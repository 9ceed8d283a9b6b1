pub mod millis;
pub mod time;
