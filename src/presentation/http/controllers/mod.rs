pub mod articles;
pub mod cron;
pub mod drafts;
pub mod subscribers;
