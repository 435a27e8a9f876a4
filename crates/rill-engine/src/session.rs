//! Lockstep animation session.
//!
//! [`Session`] is the synchronous API: the host applies commands and
//! calls [`tick()`](Session::tick) itself, once per frame. Each tick
//! runs the full solver step, applies the decay/restore blend, and
//! renders the density field into a [`GlyphFrame`].
//!
//! # Ownership model
//!
//! A session owns its grid, art, renderer, and RNG outright. All
//! mutating methods take `&mut self`; frames are returned by value,
//! so nothing borrows from the session between ticks. Multiple
//! sessions may coexist independently.

use std::time::Instant;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use rill_core::{Command, GridDims, TickId};
use rill_glyph::{ArtGrid, FrameRenderer, GlyphFrame};
use rill_solver::FluidGrid;

use crate::config::{ConfigError, InteractionConfig, SessionConfig};
use crate::metrics::TickMetrics;

/// One fluid animation, stepped in lockstep by the host.
///
/// Created from a [`SessionConfig`] via [`new()`](Session::new). The
/// lifecycle is construct, then any interleaving of
/// [`apply()`](Session::apply) and [`tick()`](Session::tick), with
/// [`reset()`](Session::reset) returning to the initial state.
///
/// # Example
///
/// ```
/// use rill_core::GridDims;
/// use rill_engine::{Session, SessionConfig};
///
/// let config = SessionConfig::new(GridDims::new(8, 8).unwrap());
/// let mut session = Session::new(config).unwrap();
/// let frame = session.tick();
/// assert_eq!(frame.tick.0, 1);
/// assert_eq!(frame.height(), 8);
/// ```
pub struct Session {
    grid: FluidGrid,
    art: Option<ArtGrid>,
    renderer: FrameRenderer,
    interaction: InteractionConfig,
    decay: f32,
    seed: u64,
    rng: ChaCha8Rng,
    tick: TickId,
    metrics: TickMetrics,
}

impl Session {
    /// Create a session from a validated config.
    ///
    /// Consumes the config. If art is configured it is shaped to the
    /// grid, rasterized through the art ramp, and installed as the
    /// base density field, so the very first frame shows the art.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let renderer = FrameRenderer::new(config.style);
        let mut grid = FluidGrid::new(config.dims, config.params);
        let art = config.art.as_deref().map(|text| ArtGrid::from_text(text, config.dims));
        if let Some(art) = &art {
            grid.set_base_density(&art.rasterize(renderer.art_ramp()))?;
        }

        Ok(Self {
            grid,
            art,
            renderer,
            interaction: config.interaction,
            decay: config.decay,
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tick: TickId::default(),
            metrics: TickMetrics::default(),
        })
    }

    /// Apply one command to the grid.
    ///
    /// Injections targeting cells outside the interior are no-ops, so
    /// commands built from unclamped pointer coordinates are safe to
    /// pass through unchecked.
    pub fn apply(&mut self, command: Command) {
        self.metrics.commands_applied += 1;
        match command {
            Command::AddDensity { cell, amount } => {
                self.grid.add_density(cell.x, cell.y, amount);
            }
            Command::AddVelocity { cell, dx, dy } => {
                self.grid.add_velocity(cell.x, cell.y, dx, dy);
            }
            Command::PointerMove { cell } => {
                self.grid.add_density(cell.x, cell.y, self.interaction.move_density);
                let jx = (self.rng.random::<f32>() - 0.5) * self.interaction.move_impulse;
                let jy = (self.rng.random::<f32>() - 0.5) * self.interaction.move_impulse;
                self.grid.add_velocity(cell.x, cell.y, jx, jy);
            }
            Command::Tap { cell } => {
                for (dx, dy) in disc_offsets(self.interaction.tap_radius) {
                    self.grid.add_density(cell.x + dx, cell.y + dy, self.interaction.tap_density);
                }
            }
            Command::Reset => self.reset(),
        }
    }

    /// Advance the simulation one tick and render the frame.
    pub fn tick(&mut self) -> GlyphFrame {
        let tick_start = Instant::now();
        self.grid.step(self.decay);
        let step_us = tick_start.elapsed().as_micros() as u64;

        let render_start = Instant::now();
        self.tick = self.tick.next();
        let frame = self.render_frame();

        self.metrics.step_us = step_us;
        self.metrics.render_us = render_start.elapsed().as_micros() as u64;
        self.metrics.total_us = tick_start.elapsed().as_micros() as u64;
        self.metrics.ticks += 1;
        frame
    }

    /// Render the current state without advancing the simulation.
    pub fn frame(&self) -> GlyphFrame {
        self.render_frame()
    }

    /// Zero the simulation and restore the base image.
    ///
    /// Density returns to the rasterized art (or all zero without
    /// art), velocities clear, the RNG reseeds, and the tick counter
    /// and metrics restart, so a replayed command schedule reproduces
    /// the episode exactly.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.tick = TickId::default();
        self.metrics = TickMetrics::default();
    }

    /// Interior grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.grid.dims()
    }

    /// Tick of the most recently rendered frame.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Metrics for the most recent tick plus cumulative counters.
    pub fn metrics(&self) -> &TickMetrics {
        &self.metrics
    }

    pub(crate) fn metrics_mut(&mut self) -> &mut TickMetrics {
        &mut self.metrics
    }

    /// The underlying fluid grid.
    pub fn grid(&self) -> &FluidGrid {
        &self.grid
    }

    fn render_frame(&self) -> GlyphFrame {
        self.renderer.render(self.grid.density(), self.grid.dims(), self.art.as_ref(), self.tick)
    }
}

/// Offsets of the disc `dx² + dy² <= radius²` around the origin.
fn disc_offsets(radius: i32) -> SmallVec<[(i32, i32); 16]> {
    let mut offsets = SmallVec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}
