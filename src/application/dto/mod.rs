pub mod articles;
pub mod drafts;
pub mod publishing;
pub mod subscribers;

pub use articles::{ArticleDto, CommentDto, ViewSampleDto};
pub use drafts::DraftDto;
pub use publishing::{NotificationResult, PublishOutcome, PublishReceipt, SweepItemOutcome, SweepReport};
pub use subscribers::SubscriberDto;
