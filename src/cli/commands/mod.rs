pub mod ranks;
pub mod taxa;
pub mod transcripts;
