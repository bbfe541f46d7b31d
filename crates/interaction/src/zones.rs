use shared::{
    domain::Edge,
    geometry::Point,
    protocol::HighlightSegment,
};

use crate::box_model::BoxModel;

/// Leeway around each edge for hand tracking.
pub const EDGE_PADDING: f64 = 15.0;

/// Zone membership of one hand for one frame. A hand may occupy zero or more
/// zones at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneSet {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl ZoneSet {
    pub fn detect(hand: Point, bx: &BoxModel) -> Self {
        Self {
            left: on_left_side(hand, bx),
            right: on_right_side(hand, bx),
            top: on_top_side(hand, bx),
            bottom: on_bottom_side(hand, bx),
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        [
            (self.left, Edge::Left),
            (self.right, Edge::Right),
            (self.top, Edge::Top),
            (self.bottom, Edge::Bottom),
        ]
        .into_iter()
        .filter_map(|(hit, edge)| hit.then_some(edge))
    }
}

/// All zone bounds are boundary-inclusive.
pub fn on_left_side(hand: Point, bx: &BoxModel) -> bool {
    hand.x >= bx.left - EDGE_PADDING
        && hand.x <= bx.left + EDGE_PADDING
        && hand.y >= bx.top - EDGE_PADDING
        && hand.y <= bx.bottom() + EDGE_PADDING
}

pub fn on_right_side(hand: Point, bx: &BoxModel) -> bool {
    hand.x >= bx.right() - EDGE_PADDING
        && hand.x <= bx.right() + EDGE_PADDING
        && hand.y >= bx.top - EDGE_PADDING
        && hand.y <= bx.bottom() + EDGE_PADDING
}

/// The horizontal span extends a full box width past the left edge; this
/// asymmetry is inherited behavior and kept as-is.
pub fn on_top_side(hand: Point, bx: &BoxModel) -> bool {
    hand.x >= bx.left - bx.width - EDGE_PADDING
        && hand.x <= bx.right() + EDGE_PADDING
        && hand.y >= bx.top - EDGE_PADDING
        && hand.y <= bx.top + EDGE_PADDING
}

pub fn on_bottom_side(hand: Point, bx: &BoxModel) -> bool {
    hand.x >= bx.left - EDGE_PADDING
        && hand.x <= bx.right() + EDGE_PADDING
        && hand.y >= bx.bottom() - EDGE_PADDING
        && hand.y <= bx.bottom() + EDGE_PADDING
}

/// Endpoints of the edge a positive zone test highlights.
pub fn highlight_segment(edge: Edge, bx: &BoxModel) -> HighlightSegment {
    let (start, end) = match edge {
        Edge::Left => (Point::new(bx.left, bx.top), Point::new(bx.left, bx.bottom())),
        Edge::Right => (
            Point::new(bx.right(), bx.top),
            Point::new(bx.right(), bx.bottom()),
        ),
        Edge::Top => (Point::new(bx.left, bx.top), Point::new(bx.right(), bx.top)),
        Edge::Bottom => (
            Point::new(bx.left, bx.bottom()),
            Point::new(bx.right(), bx.bottom()),
        ),
    };
    HighlightSegment { edge, start, end }
}

/// One segment per positive (hand, zone) test, both hands.
pub fn highlight_segments(
    left_hand: ZoneSet,
    right_hand: ZoneSet,
    bx: &BoxModel,
) -> Vec<HighlightSegment> {
    left_hand
        .edges()
        .chain(right_hand.edges())
        .map(|edge| highlight_segment(edge, bx))
        .collect()
}
