pub mod mail;
pub mod time;

pub use mail::RecordingMailer;
pub use time::{SteppingClock, fixed_now};
