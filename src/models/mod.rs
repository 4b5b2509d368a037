pub mod event_kind;
pub mod event_record;
pub mod location;
pub mod prediction;
