pub mod logic;

pub use logic::{attach_existing_bucket_events, AttachOptions, AttachOutcome};
