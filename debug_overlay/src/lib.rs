//! Debug overlay geometry for the Revenant scene viewer.
//!
//! Converts pre-parsed scene-description records (collision shapes,
//! camera-switch regions, door/item trigger volumes, sloped surfaces) into
//! flat vertex-position buffers and wraps each category in a renderable
//! [`DebugOverlay`] with a fixed translucent color and freshly allocated
//! GPU handles.
//!
//! # Architecture
//!
//! - [`shapes`] — pure primitive builders (rectangle, triangle, circle,
//!   ellipse, sloped rectangle)
//! - [`geometry`] — per-category translators from records to one flat buffer
//! - [`DebugOverlay`] — buffer + color + GPU handles, one per category
//! - [`upload_overlay`] — pushes a finished buffer into its GPU handle
//!   (the only side-effecting step; everything before it is pure)
//!
//! # Usage
//!
//! ```ignore
//! let instance = GraphicsInstance::new()?;
//! let device = instance.create_device()?;
//!
//! let collisions = DebugOverlay::collision(&device, &room.collision_entities)?;
//! let doors = DebugOverlay::door_triggers(&device, &room.door_triggers)?;
//!
//! upload_overlay(&device, &collisions)?;
//! upload_overlay(&device, &doors)?;
//! ```

pub mod geometry;
pub mod overlay;
pub mod records;
pub mod shapes;
mod uploader;
mod vertex;

pub use overlay::DebugOverlay;
pub use records::{CameraSwitchRegion, CollisionEntity, ShapeKind, SlopeKind, TriggerVolume};
pub use uploader::upload_overlay;
pub use vertex::OverlayVertex;
