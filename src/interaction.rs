//! Selection state and per-point style resolution.
//!
//! A point can be chosen either as a quadrant origin or as a neighbor query,
//! never both. Styles are decided by walking [`STYLE_RULES`] top-down.

use tracing::debug;

use crate::analytics::quadrant;
use crate::error::Result;
use crate::geom::Point;
use crate::render::{Color, PointStyle};
use crate::style::Theme;

/// The active interaction mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// Points are classified into quadrants around this index.
    Origin(usize),
    /// The nearest neighbors of `query` are highlighted.
    Neighbors {
        /// Index of the query point.
        query: usize,
        /// Neighbor indices, nearest first.
        results: Vec<usize>,
    },
}

impl Selection {
    /// Check whether nothing is selected.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Index of the active origin.
    pub fn origin(&self) -> Option<usize> {
        match self {
            Self::Origin(index) => Some(*index),
            _ => None,
        }
    }

    /// Index of the active neighbor query.
    pub fn neighbor_query(&self) -> Option<usize> {
        match self {
            Self::Neighbors { query, .. } => Some(*query),
            _ => None,
        }
    }

    /// Highlighted neighbor indices, empty unless a query is active.
    pub fn neighbor_results(&self) -> &[usize] {
        match self {
            Self::Neighbors { results, .. } => results,
            _ => &[],
        }
    }

    /// Primary action: make `index` the origin, or clear it if it already is.
    pub fn select(&mut self, index: usize) {
        let next = if self.origin() == Some(index) {
            Self::Idle
        } else {
            Self::Origin(index)
        };
        debug!(index, from = ?self, to = ?next, "select");
        *self = next;
    }

    /// Secondary action: highlight neighbors of `index`, or clear the query
    /// if `index` is already the query point.
    ///
    /// `search` runs only when a new query is entered.
    pub fn query_neighbors<F>(&mut self, index: usize, search: F) -> Result<()>
    where
        F: FnOnce(usize) -> Result<Vec<usize>>,
    {
        let next = if self.neighbor_query() == Some(index) {
            Self::Idle
        } else {
            Self::Neighbors {
                query: index,
                results: search(index)?,
            }
        };
        debug!(index, from = ?self, to = ?next, "query neighbors");
        *self = next;
        Ok(())
    }

    /// Return to idle.
    pub fn clear(&mut self) {
        *self = Self::Idle;
    }
}

/// One step of the style cascade, highest precedence first in
/// [`STYLE_RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRule {
    /// Neighbor results take the highlight fill and a thicker border.
    NeighborHighlight,
    /// The origin or query point takes the boldest border over any fill.
    SelectionEmphasis,
    /// Other points take their quadrant color while an origin is active.
    QuadrantFill,
    /// Everything else keeps its category color.
    CategoryFill,
}

/// The style cascade in evaluation order.
pub const STYLE_RULES: [StyleRule; 4] = [
    StyleRule::NeighborHighlight,
    StyleRule::SelectionEmphasis,
    StyleRule::QuadrantFill,
    StyleRule::CategoryFill,
];

/// What the cascade needs to know about one point.
#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    /// Current selection.
    pub selection: &'a Selection,
    /// Index of the point being styled.
    pub index: usize,
    /// Position of the point being styled.
    pub position: Point,
    /// Position of the active origin, if any.
    pub origin: Option<Point>,
    /// Color assigned to the point's category.
    pub category_color: Color,
    /// Theme supplying fills and borders.
    pub theme: &'a Theme,
}

#[derive(Debug)]
struct StyleDraft {
    fill: Option<Color>,
    stroke: Color,
    stroke_width: f32,
}

impl StyleRule {
    fn apply(self, ctx: &StyleContext<'_>, draft: &mut StyleDraft) {
        match self {
            Self::NeighborHighlight => {
                if ctx.selection.neighbor_results().contains(&ctx.index) {
                    draft.fill.get_or_insert(ctx.theme.neighbor_fill);
                    draft.stroke_width = ctx.theme.neighbor_stroke_width;
                }
            }
            Self::SelectionEmphasis => {
                let selected = ctx.selection.origin() == Some(ctx.index)
                    || ctx.selection.neighbor_query() == Some(ctx.index);
                if selected {
                    draft.stroke = ctx.theme.emphasis_stroke.color;
                    draft.stroke_width = ctx.theme.emphasis_stroke.width;
                }
            }
            Self::QuadrantFill => {
                let Some(origin) = ctx.origin else {
                    return;
                };
                if ctx.selection.origin().is_some_and(|i| i != ctx.index) {
                    let q = quadrant(ctx.position, origin);
                    draft.fill.get_or_insert(ctx.theme.quadrant_color(q));
                }
            }
            Self::CategoryFill => {
                draft.fill.get_or_insert(ctx.category_color);
            }
        }
    }
}

/// Resolve a point's style by evaluating `rules` in order.
///
/// The first rule to claim the fill wins; border rules overwrite the border
/// set by earlier rules.
pub fn resolve_style(ctx: &StyleContext<'_>, rules: &[StyleRule]) -> PointStyle {
    let mut draft = StyleDraft {
        fill: None,
        stroke: ctx.theme.marker_stroke.color,
        stroke_width: ctx.theme.marker_stroke.width,
    };
    for rule in rules {
        rule.apply(ctx, &mut draft);
    }
    PointStyle {
        fill: draft.fill.unwrap_or(ctx.category_color),
        stroke: draft.stroke,
        stroke_width: draft.stroke_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::Quadrant;
    use crate::error::PlotError;

    const CATEGORY: Color = Color::from_rgb8(1, 2, 3);

    fn ctx<'a>(
        selection: &'a Selection,
        theme: &'a Theme,
        index: usize,
        position: Point,
        origin: Option<Point>,
    ) -> StyleContext<'a> {
        StyleContext {
            selection,
            index,
            position,
            origin,
            category_color: CATEGORY,
            theme,
        }
    }

    fn style_of(
        selection: &Selection,
        theme: &Theme,
        index: usize,
        position: Point,
        origin: Option<Point>,
    ) -> PointStyle {
        resolve_style(&ctx(selection, theme, index, position, origin), &STYLE_RULES)
    }

    #[test]
    fn select_toggles_and_replaces() {
        let mut selection = Selection::default();
        selection.select(2);
        assert_eq!(selection, Selection::Origin(2));
        selection.select(4);
        assert_eq!(selection, Selection::Origin(4));
        selection.select(4);
        assert!(selection.is_idle());
    }

    #[test]
    fn modes_are_exclusive() {
        let mut selection = Selection::Origin(1);
        selection.query_neighbors(3, |_| Ok(vec![0, 1])).unwrap();
        assert_eq!(selection.origin(), None);
        assert_eq!(selection.neighbor_query(), Some(3));
        assert_eq!(selection.neighbor_results(), &[0, 1]);

        selection.select(0);
        assert_eq!(selection, Selection::Origin(0));
        assert!(selection.neighbor_results().is_empty());
    }

    #[test]
    fn requery_same_point_returns_to_idle_without_search() {
        let mut selection = Selection::Neighbors {
            query: 5,
            results: vec![1],
        };
        selection
            .query_neighbors(5, |_| panic!("search must not run"))
            .unwrap();
        assert!(selection.is_idle());
    }

    #[test]
    fn query_different_point_replaces_results() {
        let mut selection = Selection::Neighbors {
            query: 5,
            results: vec![1],
        };
        selection.query_neighbors(6, |i| Ok(vec![i - 1])).unwrap();
        assert_eq!(
            selection,
            Selection::Neighbors {
                query: 6,
                results: vec![5]
            }
        );
    }

    #[test]
    fn failed_search_leaves_state_untouched() {
        let mut selection = Selection::Origin(1);
        let result = selection.query_neighbors(9, |index| {
            Err(PlotError::IndexOutOfRange { index, len: 3 })
        });
        assert!(result.is_err());
        assert_eq!(selection, Selection::Origin(1));
    }

    #[test]
    fn idle_uses_category_color() {
        let theme = Theme::default();
        let selection = Selection::Idle;
        let style = style_of(&selection, &theme, 0, Point::new(0.0, 0.0), None);
        assert_eq!(style.fill, CATEGORY);
        assert_eq!(style.stroke, theme.marker_stroke.color);
        assert_eq!(style.stroke_width, 1.0);
    }

    #[test]
    fn origin_active_colors_by_quadrant_and_emphasizes_origin() {
        let theme = Theme::default();
        let selection = Selection::Origin(0);
        let origin = Some(Point::new(0.0, 0.0));

        let other = style_of(&selection, &theme, 1, Point::new(-1.0, -1.0), origin);
        assert_eq!(other.fill, theme.quadrant_color(Quadrant::III));
        assert_eq!(other.stroke_width, 1.0);

        let itself = style_of(&selection, &theme, 0, Point::new(0.0, 0.0), origin);
        assert_eq!(itself.fill, CATEGORY);
        assert_eq!(itself.stroke, Color::BLACK);
        assert_eq!(itself.stroke_width, 3.0);
    }

    #[test]
    fn neighbors_highlighted_and_query_emphasized() {
        let theme = Theme::default();
        let selection = Selection::Neighbors {
            query: 0,
            results: vec![2],
        };
        let hit = style_of(&selection, &theme, 2, Point::new(1.0, 1.0), None);
        assert_eq!(hit.fill, theme.neighbor_fill);
        assert_eq!(hit.stroke_width, 2.0);
        assert_eq!(hit.stroke, theme.marker_stroke.color);

        let miss = style_of(&selection, &theme, 1, Point::new(1.0, 1.0), None);
        assert_eq!(miss.fill, CATEGORY);

        let query = style_of(&selection, &theme, 0, Point::new(0.0, 0.0), None);
        assert_eq!(query.fill, CATEGORY);
        assert_eq!(query.stroke_width, 3.0);
    }

    #[test]
    fn rule_order_is_the_precedence() {
        // A point that is both a neighbor and in a quadrant cannot occur through
        // `Selection`, so drive the rules directly with a reordered list.
        let theme = Theme::default();
        let selection = Selection::Neighbors {
            query: 0,
            results: vec![1],
        };
        let context = ctx(&selection, &theme, 1, Point::new(1.0, 1.0), None);
        let reordered = [StyleRule::CategoryFill, StyleRule::NeighborHighlight];
        let style = resolve_style(&context, &reordered);
        assert_eq!(style.fill, CATEGORY);
        assert_eq!(style.stroke_width, 2.0);
    }
}
