pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Draft, DraftStatus, DraftUpdate, NewDraft};
pub use repository::DraftRepository;
pub use value_objects::DraftId;
