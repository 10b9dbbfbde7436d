use serde::{Deserialize, Serialize};

use crate::simulation::entity::Entity;

/// A position on the field, addressed as (row, col) from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

// Moore neighborhood, enumerated row-major. This order is fixed on purpose:
// it decides which food source, free cell, or partner wins when several
// qualify, and a stable order keeps seeded runs reproducible.
const ADJACENT_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The simulation grid. Each cell holds at most one entity, referenced by its
/// slot in the simulator's entity collection. The grid is bounded: neighbor
/// queries clamp at the edges rather than wrapping around.
pub struct Field {
    depth: usize,
    width: usize,
    cells: Vec<Option<usize>>,
}

impl Field {
    pub fn new(depth: usize, width: usize) -> Self {
        Self {
            depth,
            width,
            cells: vec![None; depth * width],
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, location: Location) -> bool {
        location.row < self.depth && location.col < self.width
    }

    fn index(&self, location: Location) -> usize {
        location.row * self.width + location.col
    }

    /// Empty every cell.
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Occupy `location` with the entity in `slot`. Placing out of bounds is a
    /// programming error, not a domain condition.
    pub fn place(&mut self, slot: usize, location: Location) {
        assert!(
            self.in_bounds(location),
            "placement out of bounds: ({}, {}) on a {}x{} field",
            location.row,
            location.col,
            self.depth,
            self.width
        );
        let idx = self.index(location);
        self.cells[idx] = Some(slot);
    }

    pub fn clear(&mut self, location: Location) {
        let idx = self.index(location);
        self.cells[idx] = None;
    }

    pub fn occupant_at(&self, location: Location) -> Option<usize> {
        if !self.in_bounds(location) {
            return None;
        }
        self.cells[self.index(location)]
    }

    /// The up-to-8 in-bounds neighbors of `location`, in the fixed offset
    /// order documented above.
    pub fn adjacent_locations(&self, location: Location) -> Vec<Location> {
        let mut adjacent = Vec::with_capacity(8);
        for (dr, dc) in ADJACENT_OFFSETS {
            let row = location.row as isize + dr;
            let col = location.col as isize + dc;
            if row < 0 || col < 0 {
                continue;
            }
            let next = Location::new(row as usize, col as usize);
            if self.in_bounds(next) {
                adjacent.push(next);
            }
        }
        adjacent
    }

    /// Adjacent locations that are currently empty.
    pub fn free_adjacent_locations(&self, location: Location) -> Vec<Location> {
        self.adjacent_locations(location)
            .into_iter()
            .filter(|loc| self.occupant_at(*loc).is_none())
            .collect()
    }

    /// The first free adjacent location in enumeration order, if any.
    pub fn free_adjacent_location(&self, location: Location) -> Option<Location> {
        self.adjacent_locations(location)
            .into_iter()
            .find(|loc| self.occupant_at(*loc).is_none())
    }

    /// Adjacent locations occupied by a live animal.
    pub fn adjacent_animals(&self, location: Location, entities: &[Entity]) -> Vec<Location> {
        self.adjacent_locations(location)
            .into_iter()
            .filter(|loc| match self.occupant_at(*loc) {
                Some(slot) => entities[slot].alive && entities[slot].is_animal(),
                None => false,
            })
            .collect()
    }
}
