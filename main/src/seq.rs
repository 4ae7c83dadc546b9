pub mod guard;
pub mod note_event;
pub mod sequence_generator;
