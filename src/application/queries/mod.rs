pub mod articles;
pub mod drafts;
