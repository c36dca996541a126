//=========================================================================
// Channel Event Source
//=========================================================================
//
// EventSource backed by a crossbeam channel.
//
// Architecture:
//   producer thread ──Sender<E>──► ChannelEventSource ──poll()──► Engine
//
// The engine stays single-threaded; this source only gives an external
// producer (platform layer, replay reader) a way to feed it.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::debug;

//=== Internal Dependencies ===============================================

use super::{Event, EventSource};

//=== ChannelEventSource ==================================================

/// Non-blocking [`EventSource`] draining a crossbeam [`Receiver`].
///
/// Once the sending side disconnects, the source reports the end of the
/// stream (`None`) forever; the engine keeps running on its own cadence
/// with no further input.
pub struct ChannelEventSource<E: Event> {
    receiver: Receiver<E>,
    disconnected: bool,
}

impl<E: Event> ChannelEventSource<E> {
    pub fn new(receiver: Receiver<E>) -> Self {
        Self {
            receiver,
            disconnected: false,
        }
    }

    /// True once the producing side has hung up.
    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

impl<E: Event> EventSource<E> for ChannelEventSource<E> {
    fn poll(&mut self) -> Option<E> {
        if self.disconnected {
            return None;
        }

        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                debug!("Event channel disconnected, no further input will arrive");
                self.disconnected = true;
                None
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
