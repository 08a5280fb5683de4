#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Note Events
===========

A note event is the smallest unit of musical articulation: a key goes down
(note-on) or comes back up (note-off). The host application emits these;
the audio worker on the other end of the channel decides what they sound
like. This crate never interprets them.

Fields:
- key: MIDI note number (middle C = 60, A4 = 69).
- velocity: articulation strength, 0-127. A note-off velocity of 0 is
  common and valid.

Neither field is range-checked here. Out-of-range values pass through to
the worker unchanged.

With the `serde` feature the wire shape is adjacently tagged:

  { "type": "noteOn",  "data": { "key": 60, "velocity": 100 } }
  { "type": "noteOff", "data": { "key": 60, "velocity": 0 } }

A MIDI channel field is deliberately absent for now; routing is
single-channel.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "data", rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoteEvent {
    NoteOn { key: u8, velocity: u8 },
    NoteOff { key: u8, velocity: u8 },
}

impl NoteEvent {
    pub fn key(&self) -> u8 {
        match *self {
            NoteEvent::NoteOn { key, .. } | NoteEvent::NoteOff { key, .. } => key,
        }
    }

    pub fn velocity(&self) -> u8 {
        match *self {
            NoteEvent::NoteOn { velocity, .. } | NoteEvent::NoteOff { velocity, .. } => velocity,
        }
    }
}

/// Worker-side half of the note channel. The render loop drains this
/// before producing each block.
pub trait NoteReceiver {
    fn pop(&mut self) -> Option<NoteEvent>;
}

#[cfg(feature = "rtrb")]
impl NoteReceiver for rtrb::Consumer<NoteEvent> {
    fn pop(&mut self) -> Option<NoteEvent> {
        rtrb::Consumer::pop(self).ok()
    }
}
