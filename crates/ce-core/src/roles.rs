use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CoreError, Real};

/// One of the four fixed control points, ordered `p0..p3`.
///
/// The role decides the point's horizontal anchor, its link field name and
/// its default value. Roles never change during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PointRole {
    P0,
    P1,
    P2,
    P3,
}

impl PointRole {
    pub const ALL: [PointRole; 4] = [Self::P0, Self::P1, Self::P2, Self::P3];

    pub fn index(self) -> usize {
        match self {
            Self::P0 => 0,
            Self::P1 => 1,
            Self::P2 => 2,
            Self::P3 => 3,
        }
    }

    /// Field name used in shareable links.
    pub fn name(self) -> &'static str {
        match self {
            Self::P0 => "p0",
            Self::P1 => "p1",
            Self::P2 => "p2",
            Self::P3 => "p3",
        }
    }

    /// Value used when nothing else seeds the point.
    pub fn default_value(self) -> Real {
        match self {
            Self::P0 => 75.0,
            Self::P1 => 50.0,
            Self::P2 => 90.0,
            Self::P3 => 25.0,
        }
    }

    /// Horizontal anchor as a fraction of the view-box width.
    ///
    /// The points are spread evenly: p1 and p2 bound the drawn segment, p0
    /// and p3 sit on the outer edges and only shape its tangents.
    pub fn anchor_fraction(self) -> Real {
        self.index() as Real / 3.0
    }
}

impl fmt::Display for PointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PointRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| CoreError::UnknownRole { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_ordered_by_index() {
        for (i, role) in PointRole::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn defaults_match_documented_values() {
        let defaults: Vec<Real> = PointRole::ALL.iter().map(|r| r.default_value()).collect();
        assert_eq!(defaults, vec![75.0, 50.0, 90.0, 25.0]);
    }

    #[test]
    fn parse_by_name() {
        assert_eq!("p2".parse::<PointRole>().unwrap(), PointRole::P2);
        assert!("P3".parse::<PointRole>().is_err());
        assert!("p9".parse::<PointRole>().is_err());
    }

    #[test]
    fn anchors_spread_evenly() {
        assert_eq!(PointRole::P0.anchor_fraction(), 0.0);
        assert_eq!(PointRole::P3.anchor_fraction(), 1.0);
        assert!((PointRole::P1.anchor_fraction() - 1.0 / 3.0).abs() < 1e-12);
    }
}
