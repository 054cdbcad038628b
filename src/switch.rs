//! Per-family key switch dimensions.
//!
//! Every family is one entry in [`SwitchType::geometry`]; builders match on the
//! record's fields rather than on the family tag.

use crate::errors::BoardError;
use crate::float_types::Real;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Height of an SA profile keycap above the switch plate.
pub const SA_PROFILE_KEY_HEIGHT: Real = 12.7;
/// Height of a low-profile keycap plus a Choc stem above the plate.
pub const CHOC_PROFILE_KEY_HEIGHT: Real = 7.0;

/// The switch families a plate can be cut for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum SwitchType {
    /// MX-compatible cutout with plain walls.
    PlainMx,
    /// MX cutout with a retention nub on each side wall.
    Mx,
    /// MX cutout whose nub sits higher to form a press-fit lip.
    MxSnapIn,
    Alps,
    /// Kailh Choc low profile.
    Choc,
    /// Kailh box, clipped by a notch in the top wall instead of a nub.
    Kailh,
}

impl SwitchType {
    pub const ALL: [SwitchType; 6] = [
        SwitchType::PlainMx,
        SwitchType::Mx,
        SwitchType::MxSnapIn,
        SwitchType::Alps,
        SwitchType::Choc,
        SwitchType::Kailh,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SwitchType::PlainMx => "plain-mx",
            SwitchType::Mx => "mx",
            SwitchType::MxSnapIn => "mx-snap-in",
            SwitchType::Alps => "alps",
            SwitchType::Choc => "choc",
            SwitchType::Kailh => "kailh",
        }
    }

    pub const fn geometry(self) -> SwitchGeometry {
        match self {
            SwitchType::PlainMx => SwitchGeometry::mx(WallFeature::Plain),
            SwitchType::Mx => SwitchGeometry::mx(WallFeature::SideNub { raise: 0.0 }),
            SwitchType::MxSnapIn => SwitchGeometry::mx(WallFeature::SideNub { raise: 0.75 }),
            SwitchType::Kailh => SwitchGeometry::mx(WallFeature::KailhCutout { width: 4.0 }),
            SwitchType::Alps => SwitchGeometry {
                cutout_width: 15.6,
                cutout_height: 13.0,
                rim: 2.7,
                plate_thickness: 4.0,
                keycap_profile_height: SA_PROFILE_KEY_HEIGHT,
                wall_feature: WallFeature::AlpsNotch {
                    width: 15.5,
                    height: 1.0,
                },
                hotswap: None,
            },
            SwitchType::Choc => SwitchGeometry {
                cutout_width: 13.8,
                cutout_height: 13.8,
                rim: 1.2,
                plate_thickness: 3.0,
                keycap_profile_height: CHOC_PROFILE_KEY_HEIGHT,
                wall_feature: WallFeature::Plain,
                hotswap: Some(HotswapCradle::CHOC),
            },
        }
    }
}

impl FromStr for SwitchType {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SwitchType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| BoardError::UnsupportedSwitchType(s.to_string()))
    }
}

impl TryFrom<String> for SwitchType {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What sits on the inside of the plate walls to hold the switch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WallFeature {
    Plain,
    /// Cylindrical bump on the side wall, `raise` mm above the standard MX nub.
    SideNub { raise: Real },
    /// Ledge under the side wall for the Alps clip.
    AlpsNotch { width: Real, height: Real },
    /// Slot cut into the top wall for the Kailh box clip.
    KailhCutout { width: Real },
}

/// Solid cradle under the plate that holds a hotswap socket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HotswapCradle {
    /// Depth of the cradle below the plate.
    pub height: Real,
    pub main_hole_diameter: Real,
    pub pin_hole_diameter: Real,
    /// Plus and minus switch pins, relative to the switch center.
    pub pin_offsets: [[Real; 2]; 2],
    pub friction_hole_diameter: Real,
    pub friction_offsets: [[Real; 2]; 2],
}

impl HotswapCradle {
    pub const MX: HotswapCradle = HotswapCradle {
        height: 3.5,
        main_hole_diameter: 4.1,
        pin_hole_diameter: 3.3,
        pin_offsets: [[-3.81, 2.54], [2.54, 5.08]],
        friction_hole_diameter: 1.75,
        friction_offsets: [[-5.08, 0.0], [5.08, 0.0]],
    };

    pub const CHOC: HotswapCradle = HotswapCradle {
        height: 3.0,
        main_hole_diameter: 3.4,
        pin_hole_diameter: 2.9,
        pin_offsets: [[0.0, 5.9], [5.0, 3.8]],
        friction_hole_diameter: 1.9,
        friction_offsets: [[-5.5, 0.0], [5.5, 0.0]],
    };
}

/// Fixed dimensions of one switch family.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchGeometry {
    pub cutout_width: Real,
    pub cutout_height: Real,
    /// Thickness of the walls framing the cutout.
    pub rim: Real,
    pub plate_thickness: Real,
    pub keycap_profile_height: Real,
    pub wall_feature: WallFeature,
    pub hotswap: Option<HotswapCradle>,
}

impl SwitchGeometry {
    const fn mx(wall_feature: WallFeature) -> Self {
        SwitchGeometry {
            cutout_width: 14.4,
            cutout_height: 14.4,
            rim: 1.5,
            plate_thickness: 4.0,
            keycap_profile_height: SA_PROFILE_KEY_HEIGHT,
            wall_feature,
            hotswap: Some(HotswapCradle::MX),
        }
    }

    #[inline]
    pub fn mount_width(&self) -> Real {
        self.cutout_width + 2.0 * self.rim
    }

    #[inline]
    pub fn mount_height(&self) -> Real {
        self.cutout_height + 2.0 * self.rim
    }

    /// Plate top plus keycap, the radius added to every bend.
    #[inline]
    pub fn cap_top_height(&self) -> Real {
        self.plate_thickness + self.keycap_profile_height
    }
}
