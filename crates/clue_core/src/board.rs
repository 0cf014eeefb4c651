//! Board model: the rooms and the symmetric distance table between them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Registry, RoomName, SetupError};

/// Spaces between every room pair on the board.
///
/// Garage-Kitchen and Bedroom-Living Room really are 0: those pairs are
/// reachable from each other on any roll. Authoritative data, not a bug to
/// correct here.
const DISTANCES: &[(&str, &str, u32)] = &[
    ("Courtyard", "Garage", 5),
    ("Courtyard", "Game Room", 6),
    ("Courtyard", "Bedroom", 10),
    ("Courtyard", "Bathroom", 9),
    ("Courtyard", "Office", 8),
    ("Courtyard", "Kitchen", 8),
    ("Courtyard", "Dining Room", 6),
    ("Courtyard", "Living Room", 5),
    ("Garage", "Game Room", 4),
    ("Garage", "Bedroom", 9),
    ("Garage", "Bathroom", 9),
    ("Garage", "Office", 9),
    ("Garage", "Kitchen", 0),
    ("Garage", "Dining Room", 9),
    ("Garage", "Living Room", 9),
    ("Game Room", "Bedroom", 7),
    ("Game Room", "Bathroom", 7),
    ("Game Room", "Office", 7),
    ("Game Room", "Kitchen", 10),
    ("Game Room", "Dining Room", 6),
    ("Game Room", "Living Room", 9),
    ("Bedroom", "Bathroom", 4),
    ("Bedroom", "Office", 5),
    ("Bedroom", "Kitchen", 9),
    ("Bedroom", "Dining Room", 8),
    ("Bedroom", "Living Room", 0),
    ("Bathroom", "Office", 3),
    ("Bathroom", "Kitchen", 8),
    ("Bathroom", "Dining Room", 7),
    ("Bathroom", "Living Room", 10),
    ("Office", "Kitchen", 7),
    ("Office", "Dining Room", 6),
    ("Office", "Living Room", 9),
    ("Kitchen", "Dining Room", 4),
    ("Kitchen", "Living Room", 7),
    ("Dining Room", "Living Room", 5),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("unknown room: {0}")]
    UnknownRoom(String),
}

/// Fixed room set plus a symmetric distance matrix. Read-only after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rooms: Vec<RoomName>,
    /// Square matrix indexed by room position in `rooms`. Zero diagonal.
    distances: Vec<Vec<u32>>,
}

impl Board {
    /// Builds the standard board for the registry's rooms. Fails if the
    /// distance data names a room outside the catalog; that is a fixed-data
    /// bug, not a runtime condition.
    pub fn standard(registry: &Registry) -> Result<Board, SetupError> {
        let rooms = registry.rooms.clone();
        let n = rooms.len();
        let mut board = Board {
            rooms,
            distances: vec![vec![0; n]; n],
        };
        for &(a, b, dist) in DISTANCES {
            let i = board
                .index(a)
                .ok_or_else(|| SetupError::UnknownBoardRoom(a.to_string()))?;
            let j = board
                .index(b)
                .ok_or_else(|| SetupError::UnknownBoardRoom(b.to_string()))?;
            board.distances[i][j] = dist;
            board.distances[j][i] = dist;
        }
        Ok(board)
    }

    fn index(&self, name: &str) -> Option<usize> {
        self.rooms.iter().position(|r| r.0 == name)
    }

    pub fn rooms(&self) -> &[RoomName] {
        &self.rooms
    }

    /// Spaces between two rooms. Symmetric; `distance(r, r) == 0`.
    pub fn distance(&self, a: &RoomName, b: &RoomName) -> Result<u32, BoardError> {
        let i = self
            .index(&a.0)
            .ok_or_else(|| BoardError::UnknownRoom(a.0.clone()))?;
        let j = self
            .index(&b.0)
            .ok_or_else(|| BoardError::UnknownRoom(b.0.clone()))?;
        Ok(self.distances[i][j])
    }

    /// Every room within `roll` spaces of `from`, in catalog order. Always
    /// contains `from` itself; staying put costs nothing.
    pub fn reachable_rooms(&self, from: &RoomName, roll: u8) -> Result<Vec<RoomName>, BoardError> {
        let i = self
            .index(&from.0)
            .ok_or_else(|| BoardError::UnknownRoom(from.0.clone()))?;
        Ok(self
            .rooms
            .iter()
            .enumerate()
            .filter(|(j, _)| self.distances[i][*j] <= u32::from(roll))
            .map(|(_, room)| room.clone())
            .collect())
    }
}
