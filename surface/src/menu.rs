//! Dropdown-menu geometry
//!
//! The render library has no native concept of a floating overlay with
//! per-row hit regions, so the menu's rectangles are computed here as pure
//! math: a content rectangle anchored to one corner of the trigger, an
//! outer rectangle expanded by the configured padding, and one stacked row
//! rectangle per item. Hit-testing is rectangle-contains-point against the
//! pointer position.

use geom::{Rect, Vec2};

/// Computed menu rectangles for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    /// Row area, anchored to the trigger's bottom-left corner plus the
    /// origin offset
    pub content: Rect,
    /// Painted background, `content` expanded by the outer padding
    pub outer: Rect,
    /// One clickable rectangle per item, top to bottom in registration
    /// order
    pub rows: Vec<Rect>,
}

/// Compute the menu rectangles for a trigger's bounding box.
///
/// `origin_offset` displaces the content origin from the trigger's
/// bottom-left corner; `outer_padding` grows the painted background around
/// the rows. Rows stack vertically with no gap.
pub fn menu_layout(
    trigger: Rect,
    origin_offset: Vec2,
    outer_padding: Vec2,
    row_size: Vec2,
    item_count: usize,
) -> MenuLayout {
    let anchor = Vec2::new(trigger.min.x, trigger.max.y);
    let origin = anchor + origin_offset + outer_padding;

    let content = Rect::from_min_size(
        origin,
        Vec2::new(row_size.x, row_size.y * item_count as f32),
    );
    let outer = content.expand(outer_padding);

    let rows = (0..item_count)
        .map(|i| {
            Rect::from_min_size(
                origin + Vec2::new(0.0, row_size.y * i as f32),
                row_size,
            )
        })
        .collect();

    MenuLayout { content, outer, rows }
}

/// Index of the first row containing `pointer`, if any
pub fn hit_row(rows: &[Rect], pointer: Vec2) -> Option<usize> {
    rows.iter().position(|row| row.contains(pointer))
}
