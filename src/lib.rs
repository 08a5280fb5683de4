pub mod emitter; // Client-side note dispatch
pub mod event; // Message type and worker-side seam

pub use emitter::{NoteEmitter, NoteSender};
pub use event::{NoteEvent, NoteReceiver};

/// Default capacity for the note queue between host and worker.
pub const NOTE_QUEUE_SIZE: usize = 64;
