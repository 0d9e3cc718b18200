//! Height-dependent proportions of the radical glyph.
//!
//! Each [`Param`] interpolates between a `start` value (at the template base height)
//! and an `end` value (at the parameter's lock height). Beyond the lock height the
//! value freezes at `end`, except for the downstroke height ratio which instead pins
//! the left arm rise to `lock_height * end`.
use std::fmt;

/// Shape of the interpolation curve between `start` and `end`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    /// Linear progression
    #[default]
    Linear,
    /// Ease-out progression: `1 - (1 - t)^power`
    Quadratic,
}

/// A single interpolated tuning parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    /// Value at the template base height
    pub start: f32,
    /// Value at and beyond the lock height
    pub end: f32,
    /// Rise (in em) at which the value reaches `end`
    pub lock_height: f32,
    /// Interpolation curve
    pub easing: Easing,
    /// Exponent of the [`Easing::Quadratic`] curve
    pub easing_power: f32,
}

const MIN_EASING_POWER: f32 = 0.01;
const MAX_EASING_POWER: f32 = 64.0;

impl Param {
    /// A linear parameter
    pub const fn linear(start: f32, end: f32, lock_height: f32) -> Self {
        Param {
            start,
            end,
            lock_height,
            easing: Easing::Linear,
            easing_power: 1.0,
        }
    }

    /// An eased parameter
    pub const fn eased(start: f32, end: f32, lock_height: f32, easing_power: f32) -> Self {
        Param {
            start,
            end,
            lock_height,
            easing: Easing::Quadratic,
            easing_power,
        }
    }

    /// Interpolation progress for `rise`, in `[0, 1]`, easing applied
    pub fn progress(&self, rise: f32, base_height: f32) -> f32 {
        let span = self.lock_height - base_height;
        let t = if !span.is_finite() || span <= f32::EPSILON {
            // lock at or below the base height: already locked
            if rise >= self.lock_height { 1.0 } else { 0.0 }
        } else {
            ((rise - base_height) / span).clamp(0.0, 1.0)
        };
        let t = if t.is_finite() { t } else { 0.0 };
        match self.easing {
            Easing::Linear => t,
            Easing::Quadratic => {
                let p = if self.easing_power.is_finite() {
                    self.easing_power.clamp(MIN_EASING_POWER, MAX_EASING_POWER)
                } else {
                    1.0
                };
                1.0 - (1.0 - t).powf(p)
            }
        }
    }

    /// The parameter value for `rise`
    pub fn value_at(&self, rise: f32, base_height: f32) -> f32 {
        let t = self.progress(rise, base_height);
        let v = self.start + (self.end - self.start) * t;
        if v.is_finite() { v } else { 0.0 }
    }

    fn check(&self, name: &'static str) -> Result<(), TuningError> {
        for value in [self.start, self.end, self.lock_height, self.easing_power] {
            if !value.is_finite() {
                return Err(TuningError::NonFinite { name, value });
            }
        }
        if self.easing == Easing::Quadratic && self.easing_power <= 0.0 {
            return Err(TuningError::NonPositivePower {
                name,
                value: self.easing_power,
            });
        }
        Ok(())
    }
}

/// The five tuning parameters of the radical glyph.
///
/// Angles are in degrees, measured counter-clockwise from the positive X axis
/// in a y-up frame. Heights are in em.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Direction of the right arm (the long thin stroke)
    pub upstroke_angle: Param,
    /// Direction of the left arm (the short thick stroke)
    pub downstroke_angle: Param,
    /// Rise of the left arm relative to the total rise
    pub downstroke_height_ratio: Param,
    /// Absolute rotation of the hook relative to the template
    pub hook_rotation: Param,
    /// Scale of the hook along its own axis
    pub hook_length_scale: Param,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            upstroke_angle: Param::eased(66.0, 76.0, 3.0, 2.0),
            downstroke_angle: Param::linear(115.0, 110.0, 2.5),
            downstroke_height_ratio: Param::linear(0.52, 0.32, 2.5),
            hook_rotation: Param::eased(0.0, -6.0, 2.5, 2.0),
            hook_length_scale: Param::linear(1.0, 1.25, 2.5),
        }
    }
}

/// Tuning values evaluated for a given rise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    /// Right arm angle in degrees
    pub upstroke_angle: f32,
    /// Left arm angle in degrees
    pub downstroke_angle: f32,
    /// Left arm rise in em (already multiplied by the total rise, or pinned)
    pub downstroke_rise: f32,
    /// Hook rotation in degrees
    pub hook_rotation: f32,
    /// Hook length scale
    pub hook_length_scale: f32,
}

impl Tuning {
    /// Evaluate all parameters for `rise`
    pub fn resolve(&self, rise: f32, base_height: f32) -> Resolved {
        let ratio = &self.downstroke_height_ratio;
        let downstroke_rise = if rise >= ratio.lock_height {
            ratio.lock_height * ratio.end
        } else {
            rise * ratio.value_at(rise, base_height)
        };
        Resolved {
            upstroke_angle: self.upstroke_angle.value_at(rise, base_height),
            downstroke_angle: self.downstroke_angle.value_at(rise, base_height),
            downstroke_rise: if downstroke_rise.is_finite() { downstroke_rise } else { 0.0 },
            hook_rotation: self.hook_rotation.value_at(rise, base_height),
            hook_length_scale: self.hook_length_scale.value_at(rise, base_height),
        }
    }

    /// Check that all values are finite and easing powers are positive
    pub fn validate(&self) -> Result<(), TuningError> {
        self.upstroke_angle.check("upstroke_angle")?;
        self.downstroke_angle.check("downstroke_angle")?;
        self.downstroke_height_ratio.check("downstroke_height_ratio")?;
        self.hook_rotation.check("hook_rotation")?;
        self.hook_length_scale.check("hook_length_scale")?;
        Ok(())
    }
}

/// Error returned by [`Tuning::validate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TuningError {
    /// A parameter field is NaN or infinite
    NonFinite { name: &'static str, value: f32 },
    /// A quadratic easing power is zero or negative
    NonPositivePower { name: &'static str, value: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::NonFinite { name, value } => {
                write!(f, "tuning parameter {} has non-finite value {}", name, value)
            }
            TuningError::NonPositivePower { name, value } => {
                write!(f, "tuning parameter {} has non-positive easing power {}", name, value)
            }
        }
    }
}

impl std::error::Error for TuningError {}
