pub mod cloud;
pub mod search;
pub mod tags;
pub mod works;
