//! Headless maze session shared by the text demo.
//!
//! Mirrors the usual interactive flow: pick a size and generator, build the
//! maze, solve it with one algorithm, then ask for an alternative route that
//! avoids the first one. Rendering is plain text; see [`render::ascii`].

pub mod cli;
pub mod render;

use std::fmt;

use maze_core::{Grid, MazeError, Pos};
use maze_gen::{MazeConfig, MazeGen};
use maze_paths::{Algorithm, Solver, is_perfect};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Failures surfaced to the person driving a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The configuration describes an impossible grid.
    Maze(MazeError),
    /// An alternative route was requested before any route was found.
    NoPrimaryPath,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maze(e) => write!(f, "{e}"),
            Self::NoPrimaryPath => f.write_str("solve the maze first to find a primary path"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            Self::NoPrimaryPath => None,
        }
    }
}

impl From<MazeError> for SessionError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

/// One maze plus the solver working on it and the primary path found so far.
pub struct Session {
    pub config: MazeConfig,
    generator: MazeGen<StdRng>,
    solver: Solver,
    primary_path: Vec<Pos>,
    last: Option<Algorithm>,
}

impl Session {
    /// Build a session and generate its first maze. With a seed, every maze
    /// of the session is reproducible.
    pub fn new(config: MazeConfig, seed: Option<u64>) -> Result<Self, SessionError> {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let generator = MazeGen::new(config.rows, config.cols, rng)?;
        let solver = Solver::new(generator.grid());
        let mut session = Self {
            config,
            generator,
            solver,
            primary_path: Vec::new(),
            last: None,
        };
        session.generate()?;
        Ok(session)
    }

    /// Build a new maze from the current configuration. Forgets the primary
    /// path and the last search.
    pub fn generate(&mut self) -> Result<(), SessionError> {
        self.generator.generate(&self.config)?;
        self.solver.fit(self.generator.grid());
        self.solver.reset_solver_state();
        self.primary_path.clear();
        self.last = None;
        log::debug!(
            "session: generated {}x{} maze with {}",
            self.config.rows,
            self.config.cols,
            self.config.spanning
        );
        Ok(())
    }

    /// Solve with `algorithm`. A found path becomes the primary path.
    pub fn solve(&mut self, algorithm: Algorithm) -> bool {
        let found = self.solver.solve(self.generator.grid(), algorithm);
        self.last = Some(algorithm);
        if found {
            self.primary_path = self.solver.path().to_vec();
        }
        found
    }

    /// Solve again, steering away from the primary path. The primary path
    /// itself is kept, so repeated calls all avoid the same route.
    pub fn solve_alternative(&mut self, algorithm: Algorithm) -> Result<bool, SessionError> {
        if self.primary_path.is_empty() {
            return Err(SessionError::NoPrimaryPath);
        }
        self.last = Some(algorithm);
        Ok(self
            .solver
            .solve_alternative(self.generator.grid(), algorithm, &self.primary_path))
    }

    pub fn grid(&self) -> &Grid {
        self.generator.grid()
    }

    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    pub fn primary_path(&self) -> &[Pos] {
        &self.primary_path
    }

    /// The maze with the last search drawn on it.
    pub fn render(&self) -> String {
        let solver = self.last.map(|_| &self.solver);
        render::ascii(self.grid(), solver)
    }

    /// Human-readable figures for the last search.
    pub fn report(&self) -> String {
        let Some(algorithm) = self.last else {
            return "Cells Explored: -\nPath Length: -\nTotal Cost: -\nTime: -".to_string();
        };
        let mut out = format!("Algorithm: {algorithm}\n{}", self.solver.stats());
        if !self.solver.stats().found {
            out.push_str("\nNo path found.");
        }
        out
    }

    /// One-line description of the maze itself.
    pub fn summary(&self) -> String {
        let g = self.grid();
        format!(
            "{}x{} {} maze, {} passages, perfect: {}, total weight: {}",
            g.rows(),
            g.cols(),
            self.config.spanning,
            g.passage_count(),
            if is_perfect(g) { "yes" } else { "no" },
            g.total_weight()
        )
    }
}
