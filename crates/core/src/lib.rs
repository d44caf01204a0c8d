//! Fire Effect Core Library
//!
//! Procedural fire animation in the classic demoscene style. A grid of heat values is
//! seeded with random heat along its bottom edge, diffused upwards with a cooling
//! filter, and mapped through a 256-entry black → red → yellow → white palette into an
//! RGB byte buffer ready for any display surface.
//!
//! The [`color`] module carries the HSL/HSV ↔ RGB conversions and hue utilities the
//! palette is built from.
//!
//! ```
//! use fire_effect_core::{FireConfig, FireSimulator};
//!
//! let mut sim = FireSimulator::new(FireConfig::new(32, 48).with_seed(7))?;
//! for _ in 0..10 {
//!     let frame = sim.update();
//!     assert_eq!(frame.len(), 32 * 48 * 3);
//! }
//! # Ok::<(), fire_effect_core::FireError>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod fire;

pub use config::{FireConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH, FRAME_INTERVAL};
pub use error::{ColorError, ConfigError, FireError};
pub use fire::{FireSimulator, FrameRenderer, HeatGrid, Palette, Rgb8, PALETTE_SIZE};
