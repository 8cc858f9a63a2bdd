use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::id::RoomId;

/// Per-room serialization gates.
///
/// The create path is a check-then-act sequence (overlap check against the
/// room's current bookings, then insert). Two concurrent creates for the
/// same room could both pass the check against a stale snapshot, so the
/// service holds the room's gate across the whole sequence. Gates are
/// created lazily on first use and never removed; a room that has been
/// booked once keeps its gate for the process lifetime.
#[derive(Debug, Default)]
pub struct RoomGateRegistry {
    gates: RwLock<HashMap<RoomId, Arc<Mutex<()>>>>,
}

impl RoomGateRegistry {
    pub fn new() -> Self {
        Self { gates: RwLock::new(HashMap::new()) }
    }

    /// Returns the gate for `room_id`, creating it if absent.
    pub fn gate_for(&self, room_id: &RoomId) -> Arc<Mutex<()>> {
        {
            let guard = self.gates.read().expect("RwLock poisoned");
            if let Some(gate) = guard.get(room_id) {
                return gate.clone();
            }
        }

        let mut guard = self.gates.write().expect("RwLock poisoned");
        guard.entry(room_id.clone()).or_insert_with(|| Arc::new(Mutex::new(()))).clone()
    }
}
