//! Laundry value types
//!
//! A wash cycle operates on a batch: a material category plus a weight.
//! Weights are in grams, following the integer-unit convention used
//! throughout the crate (no floating point on Cortex-M0 class targets).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum load for durable fabrics (grams)
pub const MAX_LOAD_DURABLE_G: u32 = 8_000;

/// Maximum load for delicate fabrics (grams)
///
/// Delicate fabrics absorb proportionally more water and stress the
/// drum bearings harder, so the ceiling is half the durable one.
pub const MAX_LOAD_DELICATE_G: u32 = 4_000;

/// Material category of a laundry batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    Jeans,
    Cotton,
    Wool,
    Delicate,
    Synthetic,
}

impl Material {
    /// Maximum permissible batch weight for this material (grams)
    pub const fn max_load_g(&self) -> u32 {
        match self {
            Material::Jeans | Material::Cotton => MAX_LOAD_DURABLE_G,
            Material::Wool | Material::Delicate | Material::Synthetic => MAX_LOAD_DELICATE_G,
        }
    }

    /// Check if this is a delicate fabric category
    pub const fn is_delicate(&self) -> bool {
        self.max_load_g() == MAX_LOAD_DELICATE_G
    }
}

/// A batch of laundry to be washed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LaundryBatch {
    /// Material category
    pub material: Material,
    /// Batch weight in grams
    pub weight_g: u32,
}

impl LaundryBatch {
    /// Create a new batch
    pub const fn new(material: Material, weight_g: u32) -> Self {
        Self { material, weight_g }
    }

    /// Check whether the batch exceeds its material's load ceiling
    ///
    /// A batch exactly at the ceiling is still accepted.
    pub const fn overloaded(&self) -> bool {
        self.weight_g > self.material.max_load_g()
    }
}

/// A dirt degree in the range 0-100%
///
/// Returned by the dirt detector and compared against the program
/// selection thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent
    pub const ZERO: Self = Self(0);

    /// One hundred percent
    pub const MAX: Self = Self(100);

    /// Create from a raw value, rejecting anything above 100
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value > 100 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Create from a raw value, saturating at 100
    #[inline]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Get the raw percentage value
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}
