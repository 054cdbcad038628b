//! Board configuration.
//!
//! One record per board build, deserialized from the kebab-case keys the
//! configuration loader produces and never mutated afterwards.

use crate::curvature;
use crate::errors::BoardError;
use crate::float_types::{PI, Real};
use crate::switch::{SwitchGeometry, SwitchType};
use serde::{Deserialize, Serialize};

/// Which half of a split board is being generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// -1 for the left half, +1 for the right half.
    pub const fn sign(self) -> Real {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

const fn default_nrows() -> usize {
    5
}

const fn default_centercol() -> usize {
    2
}

const fn default_wall_thickness() -> Real {
    5.0
}

const fn default_resolution() -> usize {
    30
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BoardConfig {
    #[serde(default = "default_nrows")]
    pub nrows: usize,
    pub ncols: usize,
    /// Row curvature angle (radians).
    pub alpha: Real,
    /// Row curvature for columns 4 and up; falls back to `alpha`.
    #[serde(default)]
    pub pinky_alpha: Option<Real>,
    /// Column curvature angle (radians).
    pub beta: Real,
    #[serde(default = "default_centercol")]
    pub centercol: usize,
    pub tenting_angle: Real,
    pub switch_type: SwitchType,
    pub z_offset: Real,
    /// Length of the web posts stitching neighbouring keys together.
    pub web_thickness: Real,
    pub rotate_x_angle: Real,
    #[serde(rename = "use-wide-pinky?")]
    pub use_wide_pinky: bool,
    #[serde(rename = "use-hotswap?")]
    pub use_hotswap: bool,
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: Real,
    #[serde(rename = "stagger?", default)]
    pub stagger: bool,
    #[serde(default)]
    pub stagger_index: Option<[Real; 3]>,
    #[serde(default)]
    pub stagger_middle: Option<[Real; 3]>,
    #[serde(default)]
    pub stagger_ring: Option<[Real; 3]>,
    #[serde(default)]
    pub stagger_pinky: Option<[Real; 3]>,
    #[serde(rename = "plate-projection?", default)]
    pub plate_projection: bool,
    /// Keep every column in the last row instead of only the middle two.
    #[serde(rename = "full-last-rows?", default)]
    pub full_last_rows: bool,
    #[serde(rename = "is-right?")]
    pub is_right: bool,
    /// Facet count handed to every curved primitive.
    #[serde(default = "default_resolution")]
    pub resolution: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            nrows: default_nrows(),
            ncols: 6,
            alpha: PI / 12.0,
            pinky_alpha: None,
            beta: PI / 36.0,
            centercol: default_centercol(),
            tenting_angle: PI / 12.0,
            switch_type: SwitchType::PlainMx,
            z_offset: 9.0,
            web_thickness: 7.0,
            rotate_x_angle: 0.0,
            use_wide_pinky: false,
            use_hotswap: false,
            wall_thickness: default_wall_thickness(),
            stagger: false,
            stagger_index: None,
            stagger_middle: None,
            stagger_ring: None,
            stagger_pinky: None,
            plate_projection: false,
            full_last_rows: false,
            is_right: true,
            resolution: default_resolution(),
        }
    }
}

impl BoardConfig {
    /// Parse a configuration and check it with [`BoardConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, BoardError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(name) = value.get("switch-type").and_then(serde_json::Value::as_str) {
            name.parse::<SwitchType>()?;
        }
        let config: BoardConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the preconditions every placement formula relies on.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.nrows < 3 {
            return Err(BoardError::TooFewRows(self.nrows));
        }
        if self.ncols == 0 {
            return Err(BoardError::NoColumns);
        }
        if self.centercol >= self.ncols {
            return Err(BoardError::CenterColumnOutOfRange {
                centercol: self.centercol,
                ncols: self.ncols,
            });
        }
        for (name, value) in [
            ("alpha", self.alpha),
            ("pinky-alpha", self.pinky_alpha()),
            ("beta", self.beta),
            ("tenting-angle", self.tenting_angle),
            ("rotate-x-angle", self.rotate_x_angle),
            ("z-offset", self.z_offset),
        ] {
            if !value.is_finite() {
                return Err(BoardError::NonFinite { name, value });
            }
        }
        curvature::row_radius(self.alpha, self.switch_type)?;
        curvature::row_radius(self.pinky_alpha(), self.switch_type).map_err(|err| match err {
            BoardError::ZeroBendAngle { .. } => BoardError::ZeroBendAngle { name: "pinky-alpha" },
            other => other,
        })?;
        curvature::column_radius(self, self.beta, self.switch_type)?;
        for (name, value) in [
            ("wall-thickness", self.wall_thickness),
            ("web-thickness", self.web_thickness),
        ] {
            if value <= 0.0 {
                return Err(BoardError::NonPositive { name, value });
            }
        }
        if self.resolution < 3 {
            return Err(BoardError::Config(format!(
                "resolution must be at least 3 segments, got {}",
                self.resolution
            )));
        }
        Ok(())
    }

    pub fn pinky_alpha(&self) -> Real {
        self.pinky_alpha.unwrap_or(self.alpha)
    }

    pub const fn side(&self) -> Side {
        if self.is_right { Side::Right } else { Side::Left }
    }

    pub const fn geometry(&self) -> SwitchGeometry {
        self.switch_type.geometry()
    }

    pub fn mount_width(&self) -> Real {
        self.geometry().mount_width()
    }

    pub fn mount_height(&self) -> Real {
        self.geometry().mount_height()
    }

    pub fn plate_thickness(&self) -> Real {
        self.geometry().plate_thickness
    }

    pub fn center_row(&self) -> Real {
        curvature::center_row(self.nrows)
    }

    pub const fn last_row(&self) -> usize {
        curvature::last_row(self.nrows)
    }

    pub const fn corner_row(&self) -> usize {
        curvature::corner_row(self.nrows)
    }

    pub const fn middle_row(&self) -> usize {
        curvature::middle_row(self.nrows)
    }

    pub const fn last_col(&self) -> usize {
        curvature::last_col(self.ncols)
    }

    /// Whether a key is placed at `(column, row)`. The last row only carries
    /// the two middle-finger columns unless `full-last-rows?` is set.
    pub fn key_exists(&self, column: usize, row: usize) -> bool {
        if column >= self.ncols || row >= self.nrows {
            return false;
        }
        self.full_last_rows || row != self.last_row() || column == 2 || column == 3
    }

    /// Every `(column, row)` that carries a key, column-major.
    pub fn key_coordinates(&self) -> Vec<(usize, usize)> {
        (0..self.ncols)
            .flat_map(|column| (0..self.nrows).map(move |row| (column, row)))
            .filter(|&(column, row)| self.key_exists(column, row))
            .collect()
    }
}
