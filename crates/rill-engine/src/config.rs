//! Session configuration, validation, and error types.
//!
//! [`SessionConfig`] is the input for constructing a [`Session`]
//! (lockstep) or [`RealtimeSession`] (threaded); [`validate()`]
//! checks structural invariants before any buffer is allocated or
//! thread spawned.
//!
//! [`Session`]: crate::session::Session
//! [`RealtimeSession`]: crate::realtime::RealtimeSession
//! [`validate()`]: SessionConfig::validate

use std::error::Error;
use std::fmt;
use std::time::Duration;

use rill_core::{GridDims, GridError};
use rill_glyph::RenderStyle;
use rill_solver::FluidParams;

// ── InteractionConfig ─────────────────────────────────────────────

/// Tuning for pointer-driven commands.
///
/// These constants shape how `PointerMove` and `Tap` commands inject
/// density and velocity into the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    /// Density injected by a pointer-move. Default: 80.
    pub move_density: f32,
    /// Span of the randomized velocity impulse a pointer-move adds:
    /// each axis draws from `(-impulse/2, impulse/2)`. Default: 6.
    pub move_impulse: f32,
    /// Density injected into each disc cell by a tap. Default: 150.
    pub tap_density: f32,
    /// Radius of the tap disc, in cells. Default: 2.
    pub tap_radius: i32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            move_density: 80.0,
            move_impulse: 6.0,
            tap_density: 150.0,
            tap_radius: 2,
        }
    }
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected during [`SessionConfig::validate()`] or session
/// construction and shutdown.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// A grid-level failure (bad dimensions or field length).
    Grid(GridError),
    /// The realtime tick interval is zero.
    ZeroTickInterval,
    /// The realtime command queue capacity is zero.
    ZeroQueueCapacity,
    /// The solver time step is NaN, infinite, zero, or negative.
    InvalidTimestep {
        /// The invalid value.
        value: f32,
    },
    /// The per-tick decay factor is outside `[0, 1]`.
    InvalidDecay {
        /// The invalid value.
        value: f32,
    },
    /// A solver or interaction parameter failed validation.
    InvalidParams {
        /// Description of which invariant was violated.
        reason: String,
    },
    /// The tick thread could not be joined (already stopped or
    /// panicked).
    SessionRecoveryFailed,
    /// The tick thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::ZeroTickInterval => write!(f, "tick_interval must be non-zero"),
            Self::ZeroQueueCapacity => write!(f, "queue_capacity must be at least 1"),
            Self::InvalidTimestep { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::InvalidDecay { value } => {
                write!(f, "decay must be within [0, 1], got {value}")
            }
            Self::InvalidParams { reason } => {
                write!(f, "invalid parameters: {reason}")
            }
            Self::SessionRecoveryFailed => {
                write!(f, "session could not be recovered from tick thread")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SessionConfig ─────────────────────────────────────────────────

/// Complete configuration for one animation session.
///
/// Built with [`new()`](SessionConfig::new) for a validated set of
/// dimensions, then adjusted field by field. `validate()` is called
/// by the session constructors; invalid configs are rejected before
/// any thread is spawned.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Interior grid dimensions.
    pub dims: GridDims,
    /// Solver parameters (diffusion, viscosity, time step).
    pub params: FluidParams,
    /// Per-tick density decay factor in `[0, 1]`. Default: 0.98.
    pub decay: f32,
    /// RNG seed for the pointer-move velocity impulses.
    pub seed: u64,
    /// Character art rendered as the backdrop and rasterized into the
    /// base density field. `None` leaves the backdrop blank.
    pub art: Option<String>,
    /// How density maps to glyphs each frame.
    pub style: RenderStyle,
    /// Pointer interaction tuning.
    pub interaction: InteractionConfig,
    /// Realtime tick period. Default: 50ms.
    pub tick_interval: Duration,
    /// Bound of the realtime command channel. Default: 64.
    pub queue_capacity: usize,
}

impl SessionConfig {
    /// A config with default parameters for the given dimensions.
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            params: FluidParams::default(),
            decay: 0.98,
            seed: 0,
            art: None,
            style: RenderStyle::default(),
            interaction: InteractionConfig::default(),
            tick_interval: Duration::from_millis(50),
            queue_capacity: 64,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Solver time step must be finite and positive.
        let p = self.params;
        if !p.dt.is_finite() || p.dt <= 0.0 {
            return Err(ConfigError::InvalidTimestep { value: p.dt });
        }
        // 2. Rates must be finite and non-negative.
        if !p.diffusion.is_finite() || p.diffusion < 0.0 {
            return Err(ConfigError::InvalidParams {
                reason: format!("diffusion must be finite and >= 0, got {}", p.diffusion),
            });
        }
        if !p.viscosity.is_finite() || p.viscosity < 0.0 {
            return Err(ConfigError::InvalidParams {
                reason: format!("viscosity must be finite and >= 0, got {}", p.viscosity),
            });
        }
        // 3. Decay within [0, 1]; above 1 the field amplifies itself.
        if !self.decay.is_finite() || !(0.0..=1.0).contains(&self.decay) {
            return Err(ConfigError::InvalidDecay { value: self.decay });
        }
        // 4. Interaction constants must be finite; the tap disc needs
        //    a non-negative radius.
        let i = self.interaction;
        if !i.move_density.is_finite() || !i.move_impulse.is_finite() || !i.tap_density.is_finite()
        {
            return Err(ConfigError::InvalidParams {
                reason: "interaction densities and impulse must be finite".to_string(),
            });
        }
        if i.tap_radius < 0 {
            return Err(ConfigError::InvalidParams {
                reason: format!("tap_radius must be >= 0, got {}", i.tap_radius),
            });
        }
        // 5. Realtime driver knobs.
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        Ok(())
    }
}
