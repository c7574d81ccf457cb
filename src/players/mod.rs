pub mod human;
pub mod robot;
