//! Maps an orientation and perspective distance to a render instruction.
//!
//! The instruction is "translate along the view axis, then rotate about
//! Z by roll, about X by pitch, about Y by yaw". The order is fixed:
//! rotations do not commute, and a different order visibly changes how
//! the cube tilts under combined pitch+yaw input.

use std::fmt;
use std::str::FromStr;

use glam::{Mat4, Vec3};

use crate::error::CubeError;
use crate::orientation::OrientationState;

/// Units accepted for perspective lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// CSS pixels.
    Px,
    /// Percent of viewport width.
    Vw,
    /// Percent of viewport height.
    Vh,
    /// Percent of the smaller viewport dimension.
    Vmin,
    /// Percent of the larger viewport dimension.
    Vmax,
    /// Centimeters (96px per inch).
    Cm,
    /// Millimeters.
    Mm,
    /// Inches.
    In,
    /// Points (1/72 in).
    Pt,
    /// Picas (12pt).
    Pc,
}

impl LengthUnit {
    fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Pc => "pc",
        }
    }
}

/// Viewport size in pixels, used to resolve viewport-relative lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Viewport of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A non-negative CSS length such as `40vmax` or `800px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    /// Magnitude.
    pub value: f32,
    /// Unit of `value`.
    pub unit: LengthUnit,
}

impl Length {
    /// Length in pixels.
    #[must_use]
    pub fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    /// Resolve to pixels against `viewport`.
    #[must_use]
    pub fn to_px(self, viewport: Viewport) -> f32 {
        let percent = self.value / 100.0;
        match self.unit {
            LengthUnit::Px => self.value,
            LengthUnit::Vw => percent * viewport.width,
            LengthUnit::Vh => percent * viewport.height,
            LengthUnit::Vmin => percent * viewport.width.min(viewport.height),
            LengthUnit::Vmax => percent * viewport.width.max(viewport.height),
            LengthUnit::Cm => self.value * 96.0 / 2.54,
            LengthUnit::Mm => self.value * 96.0 / 25.4,
            LengthUnit::In => self.value * 96.0,
            LengthUnit::Pt => self.value * 96.0 / 72.0,
            LengthUnit::Pc => self.value * 16.0,
        }
    }
}

impl FromStr for Length {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // The unit is the trailing run of letters, so `1e3px` keeps its
        // exponent.
        let number =
            trimmed.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        let suffix = &trimmed[number.len()..];

        let value: f32 = number
            .parse()
            .map_err(|_| CubeError::InvalidLength(s.to_owned()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(CubeError::InvalidLength(s.to_owned()));
        }

        let unit = match suffix.to_ascii_lowercase().as_str() {
            "px" => LengthUnit::Px,
            "vw" => LengthUnit::Vw,
            "vh" => LengthUnit::Vh,
            "vmin" => LengthUnit::Vmin,
            "vmax" => LengthUnit::Vmax,
            "cm" => LengthUnit::Cm,
            "mm" => LengthUnit::Mm,
            "in" => LengthUnit::In,
            "pt" => LengthUnit::Pt,
            "pc" => LengthUnit::Pc,
            // Unitless lengths are only valid for zero.
            "" if value == 0.0 => LengthUnit::Px,
            _ => return Err(CubeError::InvalidLength(s.to_owned())),
        };
        Ok(Self { value, unit })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// Transform handed to the render target once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderInstruction {
    /// Translation along the view axis.
    pub translate_z: Length,
    /// Roll in degrees, applied first.
    pub roll: f32,
    /// Pitch in degrees, applied second.
    pub pitch: f32,
    /// Yaw in degrees, applied last.
    pub yaw: f32,
}

impl RenderInstruction {
    /// Equivalent 4x4 matrix: `T(z) * Rz(roll) * Rx(pitch) * Ry(yaw)`.
    #[must_use]
    pub fn to_matrix(&self, viewport: Viewport) -> Mat4 {
        let z = self.translate_z.to_px(viewport);
        Mat4::from_translation(Vec3::new(0.0, 0.0, z))
            * Mat4::from_rotation_z(self.roll.to_radians())
            * Mat4::from_rotation_x(self.pitch.to_radians())
            * Mat4::from_rotation_y(self.yaw.to_radians())
    }
}

/// CSS transform string, e.g.
/// `translateZ(40vmax) rotateZ(0deg) rotateX(10deg) rotateY(-45deg)`.
impl fmt::Display for RenderInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translateZ({}) rotateZ({}deg) rotateX({}deg) rotateY({}deg)",
            self.translate_z, self.roll, self.pitch, self.yaw
        )
    }
}

/// Build the render instruction for `state` at `perspective`.
#[must_use]
pub fn project(state: &OrientationState, perspective: Length) -> RenderInstruction {
    RenderInstruction {
        translate_z: perspective,
        roll: state.roll,
        pitch: state.pitch,
        yaw: state.yaw,
    }
}
