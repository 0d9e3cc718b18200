//! Font-relative layout metrics.
//!
//! All values are ratios of the current font size, except where noted.
use crate::Error;
use crate::math::AtomType;

/// Flat set of layout ratios.
///
/// Metrics are plain data and can be swapped per layout call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Height of the math axis above the baseline
    pub axis_height: f32,
    /// Ascent of every character
    pub char_ascent: f32,
    /// Descent of every character
    pub char_descent: f32,
    /// Advance of characters missing from the width tables
    pub default_char_width: f32,

    pub glue_ord_bin: f32,
    pub glue_bin_ord: f32,
    pub glue_ord_rel: f32,
    pub glue_rel_ord: f32,
    pub glue_ord_punct: f32,
    pub glue_punct_ord: f32,

    /// Font size of scripts relative to their base
    pub script_scale: f32,
    /// Minimum superscript shift
    pub sup_shift_min: f32,
    /// Subscript shift
    pub sub_shift: f32,
    /// Minimum clearance between superscript bottom and subscript top
    pub sup_sub_gap_min: f32,
    /// Horizontal gap between base and scripts
    pub script_gap: f32,

    /// Font size of fraction parts relative to the fraction
    pub frac_scale: f32,
    /// Gap between the rule and the numerator or denominator
    pub frac_gap: f32,
    pub frac_rule_thickness: f32,
    /// Horizontal padding on both sides of the rule
    pub frac_padding: f32,

    /// Gap between the vinculum and the radicand
    pub surd_gap: f32,
    /// Height the radical glyph extends below the radicand
    pub surd_extra_hook: f32,
    /// Visual gap between the right arm and the radicand
    pub surd_slant_gap: f32,

    /// Delimiters cover at least this fraction of their content
    pub delim_factor: f32,
    /// Delimiters fall short of their content by at most this
    pub delim_shortfall: f32,

    pub col_gap: f32,
    pub row_gap: f32,
    pub min_row_ascent: f32,
    pub min_row_descent: f32,
    /// Padding inside table borders
    pub table_padding: f32,
    pub table_line_width: f32,

    pub x_height: f32,
    /// Placeholder width, in x-heights
    pub placeholder_width: f32,
    /// Placeholder height above the baseline, in x-heights
    pub placeholder_height: f32,
    pub placeholder_descent: f32,
    pub placeholder_line_width: f32,
    /// Extra margin of the placeholder hit region
    pub placeholder_hit_slop: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics {
            axis_height: 0.25,
            char_ascent: 0.72,
            char_descent: 0.28,
            default_char_width: 0.6,

            glue_ord_bin: 0.115,
            glue_bin_ord: 0.115,
            glue_ord_rel: 0.25,
            glue_rel_ord: 0.25,
            glue_ord_punct: 0.05,
            glue_punct_ord: 0.17,

            script_scale: 0.7,
            sup_shift_min: 0.35,
            sub_shift: 0.2,
            sup_sub_gap_min: 0.1,
            script_gap: 0.05,

            frac_scale: 0.9,
            frac_gap: 0.12,
            frac_rule_thickness: 0.05,
            frac_padding: 0.1,

            surd_gap: 0.12,
            surd_extra_hook: 0.1,
            surd_slant_gap: 0.12,

            delim_factor: 0.901,
            delim_shortfall: 0.5,

            col_gap: 0.8,
            row_gap: 0.3,
            min_row_ascent: 0.6,
            min_row_descent: 0.25,
            table_padding: 0.3,
            table_line_width: 0.03,

            x_height: 0.45,
            placeholder_width: 1.6,
            placeholder_height: 1.55,
            placeholder_descent: 0.1,
            placeholder_line_width: 0.04,
            placeholder_hit_slop: 0.5,
        }
    }
}

impl Metrics {
    /// Glue ratio inserted between two adjacent atoms.
    /// Pairs not listed in the table get no glue.
    pub fn glue(&self, prev: AtomType, cur: AtomType) -> f32 {
        use AtomType::*;
        match (prev, cur) {
            (Ord, Bin) => self.glue_ord_bin,
            (Bin, Ord) => self.glue_bin_ord,
            (Ord, Rel) => self.glue_ord_rel,
            (Rel, Ord) => self.glue_rel_ord,
            (Ord, Punct) => self.glue_ord_punct,
            (Punct, Ord) => self.glue_punct_ord,
            _ => 0.0,
        }
    }

    fn fields(&self) -> [(&'static str, f32); 36] {
        [
            ("axis_height", self.axis_height),
            ("char_ascent", self.char_ascent),
            ("char_descent", self.char_descent),
            ("default_char_width", self.default_char_width),
            ("glue_ord_bin", self.glue_ord_bin),
            ("glue_bin_ord", self.glue_bin_ord),
            ("glue_ord_rel", self.glue_ord_rel),
            ("glue_rel_ord", self.glue_rel_ord),
            ("glue_ord_punct", self.glue_ord_punct),
            ("glue_punct_ord", self.glue_punct_ord),
            ("script_scale", self.script_scale),
            ("sup_shift_min", self.sup_shift_min),
            ("sub_shift", self.sub_shift),
            ("sup_sub_gap_min", self.sup_sub_gap_min),
            ("script_gap", self.script_gap),
            ("frac_scale", self.frac_scale),
            ("frac_gap", self.frac_gap),
            ("frac_rule_thickness", self.frac_rule_thickness),
            ("frac_padding", self.frac_padding),
            ("surd_gap", self.surd_gap),
            ("surd_extra_hook", self.surd_extra_hook),
            ("surd_slant_gap", self.surd_slant_gap),
            ("delim_factor", self.delim_factor),
            ("delim_shortfall", self.delim_shortfall),
            ("col_gap", self.col_gap),
            ("row_gap", self.row_gap),
            ("min_row_ascent", self.min_row_ascent),
            ("min_row_descent", self.min_row_descent),
            ("table_padding", self.table_padding),
            ("table_line_width", self.table_line_width),
            ("x_height", self.x_height),
            ("placeholder_width", self.placeholder_width),
            ("placeholder_height", self.placeholder_height),
            ("placeholder_descent", self.placeholder_descent),
            ("placeholder_line_width", self.placeholder_line_width),
            ("placeholder_hit_slop", self.placeholder_hit_slop),
        ]
    }

    /// Check that every ratio is finite and non-negative,
    /// and that script and fraction scales are in `(0, 1]`.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in self.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidMetric { name, value });
            }
        }
        for (name, value) in [
            ("script_scale", self.script_scale),
            ("frac_scale", self.frac_scale),
        ] {
            if value <= 0.0 || value > 1.0 {
                return Err(Error::InvalidMetric { name, value });
            }
        }
        Ok(())
    }
}
