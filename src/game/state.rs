//! The game state resource: snake, food, lifecycle, and tick timing.

use std::collections::VecDeque;

use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use super::{DeathCause, Direction, FrameInput, GameConfig, GameEvent, Position, Segment};
use crate::food::{free_cell, random_cell};

/// Lifecycle of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Alive,
    Dead,
}

/// Main game state resource.
///
/// Owns the snake body (head first), the food on the board, and the random
/// number generator used to place food. Everything is rebuilt on reset.
#[derive(Resource)]
pub struct GameState {
    config: GameConfig,
    rng: StdRng,
    segments: VecDeque<Segment>,
    food: Vec<Position>,
    lifecycle: Lifecycle,
    pending_direction: Direction,
    timer: f32,
}

/// Borrowed view of everything that has to be drawn.
#[derive(Debug, Clone, Copy)]
pub struct RenderData<'a> {
    pub segments: &'a VecDeque<Segment>,
    pub food: &'a [Position],
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(GameConfig::default(), StdRng::from_os_rng())
    }
}

impl GameState {
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        let mut state = GameState {
            config,
            rng,
            segments: VecDeque::new(),
            food: Vec::new(),
            lifecycle: Lifecycle::Alive,
            pending_direction: Direction::Up,
            timer: 0.0,
        };
        state.reset();
        state
    }

    /// Deterministic state for a given seed.
    #[cfg(test)]
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        GameState::new(config, StdRng::seed_from_u64(seed))
    }

    /// Rebuilds the starting board: one segment at the center facing up and
    /// `initial_food` items on distinct free cells.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.food.clear();
        self.segments.push_back(Segment {
            position: self.config.center(),
            direction: Direction::Up,
        });

        for _ in 0..self.config.initial_food {
            if let Some(position) = self.free_food_cell() {
                self.food.push(position);
            }
        }

        self.lifecycle = Lifecycle::Alive;
        self.pending_direction = Direction::Up;
        self.timer = 0.0;
    }

    /// Samples one frame of input and advances the state by `dt` seconds.
    ///
    /// Once the accumulated time exceeds the tick interval the timer restarts
    /// from zero, so at most one tick runs per frame and the remainder is dropped.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match self.lifecycle {
            Lifecycle::Alive => {
                self.steer(input);

                self.timer += dt;
                if self.timer > self.config.tick_interval.as_secs_f32() {
                    self.timer = 0.0;
                    events.extend(self.tick());
                }

                if input.spawn_food && self.lifecycle == Lifecycle::Alive {
                    let position = self.spawn_extra_food();
                    events.push(GameEvent::FoodSpawned {
                        position,
                        manual: true,
                    });
                }
            }
            Lifecycle::Dead => {
                if input.reset {
                    self.reset();
                    events.push(GameEvent::Reset);
                }
            }
        }

        events
    }

    /// Buffers a held direction unless it reverses the head's current one.
    pub fn steer(&mut self, input: &FrameInput) {
        let current = self.head().direction;
        for direction in input.keys.held() {
            if direction != current.opposite() {
                self.pending_direction = direction;
            }
        }
    }

    /// Advances the snake one cell and resolves walls, self-hits and food.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.lifecycle == Lifecycle::Dead {
            return events;
        }

        let Some(&saved_tail) = self.segments.back() else {
            return events;
        };

        let direction = self.pending_direction;
        let Some(head) = self.segments.front_mut() else {
            return events;
        };
        head.direction = direction;
        let new_head = Segment {
            position: head.position.step(direction),
            direction,
        };

        // Rotate: the new head enters at the front, every other segment keeps
        // the pose of the one ahead of it, and the old tail drops off.
        self.segments.push_front(new_head);
        self.segments.pop_back();
        events.push(GameEvent::Ticked {
            head: new_head.position,
        });

        if !new_head.position.is_within(self.config.edge) {
            return self.die(DeathCause::Wall, events);
        }

        if self
            .segments
            .iter()
            .skip(1)
            .any(|segment| segment.position.collides_with(&new_head.position))
        {
            return self.die(DeathCause::SelfCollision, events);
        }

        if let Some(index) = self
            .food
            .iter()
            .position(|food| food.collides_with(&new_head.position))
        {
            let eaten = self.food.remove(index);
            self.segments.push_back(saved_tail);
            events.push(GameEvent::FoodEaten {
                position: eaten,
                length: self.snake_length(),
            });

            match self.free_food_cell() {
                Some(position) => {
                    self.food.push(position);
                    events.push(GameEvent::FoodSpawned {
                        position,
                        manual: false,
                    });
                }
                None => events.push(GameEvent::BoardFull),
            }
        }

        events
    }

    /// Drops one extra food item on a random cell.
    ///
    /// Unlike the replacement after eating, this does not avoid the snake or
    /// existing food, so items may stack or sit under the body. Food under the
    /// tail cell the head moves into next grows the snake onto the head's own
    /// cell, so two segments can briefly share a cell while alive.
    pub fn spawn_extra_food(&mut self) -> Position {
        let position = random_cell(&mut self.rng, self.config.edge);
        self.food.push(position);
        position
    }

    pub fn render_data(&self) -> RenderData<'_> {
        RenderData {
            segments: &self.segments,
            food: &self.food,
        }
    }

    #[cfg(test)]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_alive(&self) -> bool {
        self.lifecycle == Lifecycle::Alive
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    pub fn snake_length(&self) -> usize {
        self.segments.len()
    }

    #[cfg(test)]
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn food(&self) -> &[Position] {
        &self.food
    }

    #[cfg(test)]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    fn die(&mut self, cause: DeathCause, mut events: Vec<GameEvent>) -> Vec<GameEvent> {
        self.lifecycle = Lifecycle::Dead;
        events.push(GameEvent::Died {
            cause,
            length: self.snake_length(),
        });
        events
    }

    fn free_food_cell(&mut self) -> Option<Position> {
        let segments = &self.segments;
        let food = &self.food;
        free_cell(
            &mut self.rng,
            self.config.edge,
            self.config.max_spawn_attempts,
            |cell| {
                segments.iter().any(|segment| segment.position == *cell) || food.contains(cell)
            },
        )
    }
}
