pub mod engagement;
pub mod publishing;
pub mod subscriptions;
