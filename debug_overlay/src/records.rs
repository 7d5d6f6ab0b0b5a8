//! Scene-description input records.
//!
//! Records arrive pre-parsed from the room loaders with their shape and
//! slope discriminants still raw. [`ShapeKind::from_code`] and
//! [`SlopeKind::from_code`] decode them into closed enums at dispatch time;
//! a code that doesn't decode means the record contributes no geometry.

/// One collision primitive on the room floor plan.
///
/// `density` is the extent along the Z axis; despite the name it is a
/// length, taken straight from the room file's field. `slope_height` and
/// `slope_type` are only meaningful for [`ShapeKind::Ramp`] and
/// [`ShapeKind::Stairs`] records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEntity {
    /// Raw shape discriminant (see [`ShapeKind`]).
    pub shape: u32,
    /// Raw slope-type discriminant (see [`SlopeKind`]).
    pub slope_type: u32,
    /// Origin along X.
    pub x: f32,
    /// Origin along Z.
    pub z: f32,
    /// Extent along X.
    pub width: f32,
    /// Extent along Z.
    pub density: f32,
    /// Elevation of the raised edge of a sloped surface.
    pub slope_height: f32,
}

/// A camera-switch trigger region, stored as four explicit corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSwitchRegion {
    pub x1: f32,
    pub z1: f32,
    pub x2: f32,
    pub z2: f32,
    pub x3: f32,
    pub z3: f32,
    pub x4: f32,
    pub z4: f32,
}

/// An axis-aligned trigger volume (doors and item pickups share the shape).
///
/// `y` is the origin along the floor plane's second axis; trigger records
/// store it as Y even though it maps onto world Z when drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerVolume {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Collision shape kinds, decoded from the raw shape discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Axis-aligned footprint rectangle (code 0).
    Rectangle,
    /// Right triangle with the right angle at the far-right corner,
    /// orientation "\|" (code 1).
    TriangleFarRight,
    /// Right triangle with the right angle at the far-left corner,
    /// orientation "|/" (code 2).
    TriangleFarLeft,
    /// Right triangle with the right angle at the near-right corner,
    /// orientation "/|" (code 3).
    TriangleNearRight,
    /// Disc inscribed in a `width` × `width` square (code 6).
    Circle,
    /// Axis-aligned ellipse, major axis along X (code 7).
    EllipseX,
    /// Axis-aligned ellipse, major axis along Z (code 8).
    EllipseZ,
    /// Sloped walkable surface (code 11).
    Ramp,
    /// Stairs; drawn identically to a ramp (code 12).
    Stairs,
}

impl ShapeKind {
    /// Decode a raw shape discriminant. Unknown codes yield `None`.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Rectangle),
            1 => Some(Self::TriangleFarRight),
            2 => Some(Self::TriangleFarLeft),
            3 => Some(Self::TriangleNearRight),
            6 => Some(Self::Circle),
            7 => Some(Self::EllipseX),
            8 => Some(Self::EllipseZ),
            11 => Some(Self::Ramp),
            12 => Some(Self::Stairs),
            _ => None,
        }
    }

    /// Whether this kind is drawn by the sloped-surfaces overlay rather
    /// than the flat collision overlay.
    pub fn is_sloped(&self) -> bool {
        matches!(self, Self::Ramp | Self::Stairs)
    }
}

/// Slope orientations, decoded from the raw slope-type discriminant.
///
/// Types 0 and 1 slope along the X axis, types 2 and 3 along the Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlopeKind {
    /// Flat at `x`, raised at `x + width` (code 0).
    RisesAlongX,
    /// Raised at `x`, flat at `x + width` (code 1).
    FallsAlongX,
    /// Flat at `z`, raised at `z + density` (code 2).
    RisesAlongZ,
    /// Raised at `z`, flat at `z + density` (code 3).
    FallsAlongZ,
}

impl SlopeKind {
    /// Decode a raw slope-type discriminant. Unknown codes yield `None`.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::RisesAlongX),
            1 => Some(Self::FallsAlongX),
            2 => Some(Self::RisesAlongZ),
            3 => Some(Self::FallsAlongZ),
            _ => None,
        }
    }
}
