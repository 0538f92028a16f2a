// life.rs - Driver state: one current generation, replaced every tick

use rand::Rng;
use tracing::{info, trace};

use crate::generation::Transition;
use crate::grid::{Dimensions, Grid};

/// Owns the running simulation.
///
/// Holds exactly one current grid. `tick` moves it into the frame slot for
/// the renderer and stores its successor; nothing else keeps older
/// generations alive.
#[derive(Debug)]
pub struct Life<R> {
    transition: Transition,
    rng: R,
    current: Grid,
    frame: Option<Grid>,
    generation: u64,
}

impl<R: Rng> Life<R> {
    pub fn new(dims: Dimensions, mut rng: R) -> Self {
        let current = Grid::random(dims, &mut rng);
        info!(
            rows = dims.rows(),
            cols = dims.cols(),
            population = current.population(),
            "Seeded grid"
        );
        Self {
            transition: Transition::new(dims),
            rng,
            current,
            frame: None,
            generation: 0,
        }
    }

    /// Publishes the current grid as the frame to paint, then advances.
    pub fn tick(&mut self) -> &Grid {
        let next = self.transition.apply(&self.current);
        let shown = std::mem::replace(&mut self.current, next);
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.current.population(),
            "Advanced"
        );
        self.frame.insert(shown)
    }

    /// Drops the current grid and reseeds. The last frame is kept until the next tick.
    pub fn restart(&mut self) {
        self.current = Grid::random(self.transition.dimensions(), &mut self.rng);
        info!(
            after_generations = self.generation,
            population = self.current.population(),
            "Restarted"
        );
        self.generation = 0;
    }
}

impl<R> Life<R> {
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// The grid most recently handed to the renderer, if any tick has run.
    pub fn frame(&self) -> Option<&Grid> {
        self.frame.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dimensions(&self) -> Dimensions {
        self.transition.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::next_generation;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn life(rows: usize, cols: usize, seed: u64) -> Life<StdRng> {
        Life::new(Dimensions::new(rows, cols).unwrap(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn first_tick_shows_the_seed() {
        let mut life = life(12, 16, 7);
        let seed = life.current().clone();
        assert!(life.frame().is_none());

        let shown = life.tick().clone();
        assert_eq!(shown, seed);
        assert_eq!(life.current(), &next_generation(&seed));
        assert_eq!(life.generation(), 1);
    }

    #[test]
    fn frames_trail_current_by_one_generation() {
        let mut life = life(10, 10, 3);
        for _ in 0..5 {
            let before = life.current().clone();
            life.tick();
            assert_eq!(life.frame(), Some(&before));
            assert_eq!(life.current(), &next_generation(&before));
        }
        assert_eq!(life.generation(), 5);
    }

    #[test]
    fn restart_reseeds_and_resets_counter() {
        let mut life = life(30, 30, 11);
        let original = life.current().clone();
        life.tick();
        life.tick();
        let last_frame = life.frame().cloned();

        life.restart();
        assert_eq!(life.generation(), 0);
        assert_eq!(life.dimensions(), original.dimensions());
        assert_ne!(life.current(), &original);
        assert_eq!(life.frame().cloned(), last_frame);
    }
}
