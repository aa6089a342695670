//! Length units and placement rectangles.
//!
//! All geometry is stored in EMU (English Metric Units), the integer unit used
//! by Office Open XML: 914400 per inch, 12700 per point.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

/// EMU per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// EMU per typographic point.
pub const EMU_PER_PT: i64 = 12_700;

/// A length in English Metric Units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Emu(pub i64);

impl Emu {
    /// Zero length.
    pub const ZERO: Emu = Emu(0);

    /// Raw EMU value.
    pub fn value(self) -> i64 {
        self.0
    }

    /// Length in inches, for display.
    pub fn as_inches(self) -> f64 {
        self.0 as f64 / EMU_PER_INCH as f64
    }
}

/// Convert inches to EMU, truncating toward zero.
pub fn inches(value: f64) -> Emu {
    Emu((value * EMU_PER_INCH as f64) as i64)
}

/// Convert points to EMU, truncating toward zero.
pub fn pt(value: f64) -> Emu {
    Emu((value * EMU_PER_PT as f64) as i64)
}

impl Add for Emu {
    type Output = Emu;

    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl AddAssign for Emu {
    fn add_assign(&mut self, rhs: Emu) {
        self.0 += rhs.0;
    }
}

impl Sub for Emu {
    type Output = Emu;

    fn sub(self, rhs: Emu) -> Emu {
        Emu(self.0 - rhs.0)
    }
}

impl Mul<i64> for Emu {
    type Output = Emu;

    fn mul(self, rhs: i64) -> Emu {
        Emu(self.0 * rhs)
    }
}

/// Placement of a shape: offset of the top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Bounds {
    /// Create bounds from EMU values.
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create bounds from inch values.
    pub fn inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(inches(left), inches(top), inches(width), inches(height))
    }

    /// Right edge.
    pub fn right(&self) -> Emu {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> Emu {
        self.top + self.height
    }

    /// Whether these bounds lie entirely inside a `width` x `height` page.
    pub fn fits_within(&self, width: Emu, height: Emu) -> bool {
        self.left >= Emu::ZERO
            && self.top >= Emu::ZERO
            && self.right() <= width
            && self.bottom() <= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_truncates() {
        assert_eq!(inches(1.0), Emu(914_400));
        assert_eq!(inches(13.333), Emu(12_191_695));
        assert_eq!(inches(7.5), Emu(6_858_000));
        assert_eq!(inches(0.6), Emu(548_640));
    }

    #[test]
    fn test_points() {
        assert_eq!(pt(1.0), Emu(12_700));
        assert_eq!(pt(10.0), Emu(127_000));
    }

    #[test]
    fn test_arithmetic() {
        let cw = inches(2.85);
        let step = cw + inches(0.2);
        assert_eq!(inches(0.6) + step * 2, Emu(548_640 + (2_606_040 + 182_880) * 2));
        assert_eq!(inches(1.0) - inches(0.5), Emu(457_200));
    }

    #[test]
    fn test_fits_within() {
        let page_w = inches(13.333);
        let page_h = inches(7.5);
        assert!(Bounds::inches(0.6, 0.4, 12.1, 0.85).fits_within(page_w, page_h));
        assert!(!Bounds::inches(12.0, 7.0, 2.0, 1.0).fits_within(page_w, page_h));
    }
}
