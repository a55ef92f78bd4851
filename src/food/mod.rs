//! Food plugin - food placement on the board and related reporting.

use bevy::prelude::*;
use rand::prelude::*;

use crate::game::{GameEvent, Position};

/// Plugin for food-related systems.
pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, report_food_events);
    }
}

/// Picks a uniformly random cell of an `edge` x `edge` board. No overlap check.
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, edge: i32) -> Position {
    Position::new(rng.random_range(0..edge), rng.random_range(0..edge))
}

/// Picks a uniformly random cell for which `is_occupied` is false.
///
/// Rejection sampling runs for at most `max_attempts` draws; after that the
/// free cells are enumerated and one is chosen directly, so a crowded board
/// never spins. Returns `None` only when every cell is occupied.
pub fn free_cell<R, F>(rng: &mut R, edge: i32, max_attempts: usize, is_occupied: F) -> Option<Position>
where
    R: Rng + ?Sized,
    F: Fn(&Position) -> bool,
{
    if edge <= 0 {
        return None;
    }

    for _ in 0..max_attempts {
        let position = random_cell(rng, edge);
        if !is_occupied(&position) {
            return Some(position);
        }
    }

    let free: Vec<Position> = (0..edge)
        .flat_map(|y| (0..edge).map(move |x| Position::new(x, y)))
        .filter(|position| !is_occupied(position))
        .collect();
    free.choose(rng).copied()
}

/// System to log food pickups and placements.
fn report_food_events(mut events: MessageReader<GameEvent>) {
    for event in events.read() {
        match event {
            GameEvent::FoodEaten { position, length } => {
                debug!("Food eaten at ({}, {}), length now {}", position.x, position.y, length);
            }
            GameEvent::FoodSpawned { position, manual } => {
                debug!(
                    "Food placed at ({}, {}){}",
                    position.x,
                    position.y,
                    if *manual { " by click" } else { "" }
                );
            }
            GameEvent::BoardFull => warn!("No free cell left for replacement food"),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_cell_stays_on_board() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(random_cell(&mut rng, 16).is_within(16));
        }
    }

    #[test]
    fn test_free_cell_avoids_occupied() {
        let mut rng = StdRng::seed_from_u64(11);
        let taken = [Position::new(0, 0), Position::new(1, 0), Position::new(0, 1)];
        for _ in 0..200 {
            let cell = free_cell(&mut rng, 2, 64, |p| taken.contains(p));
            assert_eq!(cell, Some(Position::new(1, 1)));
        }
    }

    #[test]
    fn test_free_cell_falls_back_to_scan() {
        let mut rng = StdRng::seed_from_u64(3);
        // No rejection attempts at all: the scan alone must find the hole.
        let cell = free_cell(&mut rng, 16, 0, |p| *p != Position::new(9, 4));
        assert_eq!(cell, Some(Position::new(9, 4)));
    }

    #[test]
    fn test_free_cell_full_board() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(free_cell(&mut rng, 4, 32, |_| true), None);
        assert_eq!(free_cell(&mut rng, 0, 32, |_| false), None);
    }
}
