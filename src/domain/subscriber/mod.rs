pub mod entity;
pub mod repository;

pub use entity::{EmailAddress, NewSubscriber, Subscriber, SubscriberPreferences, SubscriberStatus, UnsubscribeToken};
pub use repository::SubscriberRepository;
