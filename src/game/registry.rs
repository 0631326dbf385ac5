use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use teloxide::types::{ChatId, UserId};

use crate::game::error::GameError;
use crate::game::room::Room;

/// Active rooms keyed by chat, at most one per chat.
///
/// Every access goes through a shard guard, so a closure passed to
/// [`RoomRegistry::with_room`] observes and mutates the room atomically with
/// respect to any other operation on the same chat. Closures must not call
/// back into the registry.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: DashMap<ChatId, Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fresh `Open` room and returns a snapshot of it
    pub fn create(
        &self,
        chat_id: ChatId,
        starter: UserId,
        now: DateTime<Utc>,
    ) -> Result<Room, GameError> {
        match self.rooms.entry(chat_id) {
            Entry::Occupied(_) => Err(GameError::AlreadyExists),
            Entry::Vacant(slot) => {
                let room = Room::new(chat_id, starter, now);
                slot.insert(room.clone());
                Ok(room)
            }
        }
    }

    /// Runs `f` against the chat's room while holding its lock
    pub fn with_room<T>(
        &self,
        chat_id: ChatId,
        f: impl FnOnce(&mut Room) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let mut room = self.rooms.get_mut(&chat_id).ok_or(GameError::NotFound)?;
        f(room.value_mut())
    }

    /// Applies `f` to every room; used by background sweeps
    pub fn for_each_room<T>(&self, mut f: impl FnMut(&mut Room) -> Option<T>) -> Vec<T> {
        self.rooms
            .iter_mut()
            .filter_map(|mut entry| f(entry.value_mut()))
            .collect()
    }

    pub fn get(&self, chat_id: ChatId) -> Option<Room> {
        self.rooms.get(&chat_id).map(|room| room.value().clone())
    }

    pub fn delete(&self, chat_id: ChatId) -> Option<Room> {
        self.rooms.remove(&chat_id).map(|(_, room)| room)
    }

    pub fn contains(&self, chat_id: ChatId) -> bool {
        self.rooms.contains_key(&chat_id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
