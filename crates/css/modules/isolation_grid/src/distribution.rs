//! Equal-width row distribution.
//!
//! Splits the grid into `n` equal cells per row and emits one structural
//! rule per position in the row. Each rule places its cell with
//! `margin-left`; only the first position clears, starting a new row.
//!
//! Selectors: <https://www.w3.org/TR/selectors-4/#nth-child-pseudo>

use crate::error::GridError;
use crate::formula::{FormattedLength, position, width};
use crate::settings::GridConfig;
use crate::span::isolation_declarations;
use core::fmt::{self, Write};
use css_syntax::{Declaration, StyleRule};
use cssparser::ToCss;

/// `:nth-child(<stride>n + <phase>)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NthChild {
    pub stride: u32,
    /// 1-indexed position within the repeating row.
    pub phase: u32,
}

impl NthChild {
    /// Whether the 1-indexed child `index` matches this pattern.
    ///
    /// A zero stride matches the single child at `phase`.
    pub const fn matches(&self, index: u32) -> bool {
        if self.stride == 0 {
            return index == self.phase;
        }
        index >= self.phase && (index - self.phase) % self.stride == 0
    }
}

impl ToCss for NthChild {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        write!(dest, ":nth-child({}n + {})", self.stride, self.phase)
    }
}

/// Placement of one position within the row.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildRule {
    pub pattern: NthChild,
    pub position: FormattedLength,
    /// Set only for the first cell of a row.
    pub clear: bool,
}

impl ChildRule {
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut declarations = self.position.declarations("margin-left");
        declarations.push(Declaration::new(
            "clear",
            if self.clear { "both" } else { "none" },
        ));
        declarations
    }
}

/// Output of [`distribute_equal_width`].
#[derive(Clone, Debug, PartialEq)]
pub struct RowDistribution {
    pub cells_per_row: u32,
    /// Columns spanned by each cell; may be fractional.
    pub columns_per_cell: f64,
    /// Width shared by every cell.
    pub shared_width: FormattedLength,
    /// One rule per phase `1..=cells_per_row`, in phase order.
    pub rules: Vec<ChildRule>,
}

impl RowDistribution {
    /// Rule applying to the child at 1-indexed `index`.
    pub fn rule_for_child(&self, index: u32) -> Option<&ChildRule> {
        self.rules.iter().find(|rule| rule.pattern.matches(index))
    }

    /// Style rules for the children of `selector`: one shared rule followed
    /// by one `:nth-child()` rule per phase.
    pub fn to_rules(&self, selector: &str) -> Vec<StyleRule> {
        let mut shared = StyleRule::with_declarations(selector, isolation_declarations());
        shared
            .declarations
            .extend(self.shared_width.declarations("width"));

        let mut rules = Vec::with_capacity(self.rules.len() + 1);
        rules.push(shared);
        rules.extend(self.rules.iter().map(|rule| {
            StyleRule::with_declarations(
                format!("{selector}{}", rule.pattern.to_css_string()),
                rule.declarations(),
            )
        }));
        rules
    }
}

/// Lay `cells_per_row` equal cells across the grid.
///
/// # Errors
/// Returns `GridError::InvalidCellsPerRow` when `cells_per_row` is zero.
pub fn distribute_equal_width(
    cells_per_row: u32,
    config: &GridConfig,
) -> Result<RowDistribution, GridError> {
    if cells_per_row == 0 {
        return Err(GridError::InvalidCellsPerRow);
    }
    let columns_per_cell = config.column_count() / f64::from(cells_per_row);
    tracing::debug!(
        "distribute_equal_width: cells_per_row={}, columns={}, columns_per_cell={}",
        cells_per_row,
        config.columns,
        columns_per_cell
    );

    let rules = (1..=cells_per_row)
        .map(|phase| ChildRule {
            pattern: NthChild {
                stride: cells_per_row,
                phase,
            },
            position: position(columns_per_cell * f64::from(phase - 1), config),
            clear: phase == 1,
        })
        .collect();

    Ok(RowDistribution {
        cells_per_row,
        columns_per_cell,
        shared_width: width(columns_per_cell, config),
        rules,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "a failed setup should abort the test")]
mod tests {
    use super::*;
    use css_values_units::{Length, Percentage};

    fn percent_config() -> GridConfig {
        GridConfig::new(12, Length::percent(2.0), Percentage(2.0)).unwrap_or_default()
    }

    #[test]
    /// # Panics
    /// Panics if three cells per row do not yield phases 1..=3.
    fn three_per_row() {
        let dist = distribute_equal_width(3, &percent_config()).unwrap();
        assert_eq!(dist.columns_per_cell, 4.0);
        assert_eq!(dist.shared_width.values(), ["32%"]);
        let phases: Vec<u32> = dist.rules.iter().map(|rule| rule.pattern.phase).collect();
        assert_eq!(phases, [1, 2, 3]);
        let positions: Vec<Vec<String>> =
            dist.rules.iter().map(|rule| rule.position.values()).collect();
        assert_eq!(positions, [vec!["0%"], vec!["34%"], vec!["68%"]]);
    }

    #[test]
    /// # Panics
    /// Panics if any count yields other than exactly one clearing rule.
    fn exactly_one_clearing_rule() {
        for cells in 1..=12 {
            let dist = distribute_equal_width(cells, &GridConfig::default()).unwrap();
            assert_eq!(dist.rules.len(), cells as usize);
            let clearing: Vec<u32> = dist
                .rules
                .iter()
                .filter(|rule| rule.clear)
                .map(|rule| rule.pattern.phase)
                .collect();
            assert_eq!(clearing, [1]);
        }
    }

    #[test]
    /// # Panics
    /// Panics if zero cells per row is accepted.
    fn zero_cells_rejected() {
        assert!(matches!(
            distribute_equal_width(0, &GridConfig::default()),
            Err(GridError::InvalidCellsPerRow)
        ));
    }

    #[test]
    /// # Panics
    /// Panics if fractional column shares are rounded.
    fn fractional_columns_per_cell() {
        let dist = distribute_equal_width(5, &percent_config()).unwrap();
        assert!((dist.columns_per_cell - 2.4).abs() < 1e-12);
        assert_eq!(dist.shared_width.values(), ["18.4%"]);
    }

    #[test]
    /// # Panics
    /// Panics if child indices map to the wrong phase.
    fn children_wrap_onto_rows() {
        let dist = distribute_equal_width(3, &percent_config()).unwrap();
        let phase_of = |index| dist.rule_for_child(index).map(|rule| rule.pattern.phase);
        assert_eq!(phase_of(1), Some(1));
        assert_eq!(phase_of(4), Some(1));
        assert_eq!(phase_of(5), Some(2));
        assert_eq!(phase_of(9), Some(3));
        assert_eq!(phase_of(0), None);
    }

    #[test]
    /// # Panics
    /// Panics if a zero-stride pattern matches anything but its phase.
    fn zero_stride_matches_single_child() {
        let pattern = NthChild {
            stride: 0,
            phase: 3,
        };
        assert_eq!(pattern.to_css_string(), ":nth-child(0n + 3)");
        assert!(pattern.matches(3));
        assert!(!pattern.matches(0));
        assert!(!pattern.matches(1));
        assert!(!pattern.matches(6));
    }

    #[test]
    /// # Panics
    /// Panics if emitted rules are not shared-then-per-phase.
    fn rules_for_selector() {
        let dist = distribute_equal_width(2, &GridConfig::default()).unwrap();
        let rules = dist.to_rules(".gallery > li");
        let preludes: Vec<&str> = rules.iter().map(|rule| rule.prelude.as_str()).collect();
        assert_eq!(
            preludes,
            [
                ".gallery > li",
                ".gallery > li:nth-child(2n + 1)",
                ".gallery > li:nth-child(2n + 2)"
            ]
        );
        let shared_widths: Vec<&str> = rules[0].values_of("width").collect();
        assert_eq!(shared_widths, ["49%", "calc((100% + 1rem) * 0.5 - 1rem)"]);
        let clears: Vec<&str> = rules[1..]
            .iter()
            .flat_map(|rule| rule.values_of("clear"))
            .collect();
        assert_eq!(clears, ["both", "none"]);
        let second: Vec<&str> = rules[2].values_of("margin-left").collect();
        assert_eq!(second, ["51%", "calc((100% + 1rem) * 0.5)"]);
    }
}
