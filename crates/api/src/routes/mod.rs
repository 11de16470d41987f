pub mod cloud;
pub mod health;
pub mod search;
pub mod tags;
pub mod works;
