use crate::event::NoteEvent;

/*
Note Emitter
============

The client-side handle the host application plays through. Each call
builds one NoteEvent and hands it to the channel immediately; nothing is
batched, queued, or retried, and the emitter never reads from the channel.

The emitter wraps the send half of a channel rather than subclassing a
worker node, so it can be tested in isolation with a fake sender. It holds
no state of its own between calls.

Channel failures (queue full, worker gone) surface as the sender's own
error type, untouched. The emitter defines no errors of its own.
*/

/// Client-side half of the note channel.
pub trait NoteSender {
    type Error;

    fn send(&mut self, event: NoteEvent) -> Result<(), Self::Error>;
}

#[cfg(feature = "rtrb")]
impl NoteSender for rtrb::Producer<NoteEvent> {
    type Error = rtrb::PushError<NoteEvent>;

    fn send(&mut self, event: NoteEvent) -> Result<(), Self::Error> {
        rtrb::Producer::push(self, event)
    }
}

pub struct NoteEmitter<S> {
    tx: S,
}

impl<S: NoteSender> NoteEmitter<S> {
    pub fn new(tx: S) -> Self {
        Self { tx }
    }

    /// Send a note-on. Exactly one message per call, fire-and-forget.
    pub fn note_on(&mut self, key: u8, velocity: u8) -> Result<(), S::Error> {
        self.tx.send(NoteEvent::NoteOn { key, velocity })
    }

    /// Send a note-off. Symmetric to [`note_on`](Self::note_on).
    pub fn note_off(&mut self, key: u8, velocity: u8) -> Result<(), S::Error> {
        self.tx.send(NoteEvent::NoteOff { key, velocity })
    }

    /// Hand the send half back, e.g. for teardown by the owner of the
    /// channel.
    pub fn into_inner(self) -> S {
        self.tx
    }
}

#[cfg(feature = "rtrb")]
impl NoteEmitter<rtrb::Producer<NoteEvent>> {
    /// Create an emitter and the matching consumer end for the worker.
    pub fn with_queue(capacity: usize) -> (Self, rtrb::Consumer<NoteEvent>) {
        let (tx, rx) = rtrb::RingBuffer::new(capacity);
        (Self::new(tx), rx)
    }
}
