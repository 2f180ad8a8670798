mod create_draft;
mod delete_draft;
mod publish;
mod save_draft;
mod schedule;
mod service;

pub use create_draft::CreateDraftCommand;
pub use publish::PublishPayload;
pub use save_draft::SaveDraftCommand;
pub use schedule::ScheduleCommand;
pub use service::PublishingService;
