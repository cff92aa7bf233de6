//! Conversions between the pure geometry types and their egui equivalents

use geom::{Rect, Rgba, Vec2};

pub(crate) fn to_egui_vec2(v: Vec2) -> egui::Vec2 {
    egui::vec2(v.x, v.y)
}

pub(crate) fn to_egui_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

pub(crate) fn from_egui_pos2(p: egui::Pos2) -> Vec2 {
    Vec2::new(p.x, p.y)
}

pub(crate) fn from_egui_vec2(v: egui::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

pub(crate) fn to_egui_rect(r: Rect) -> egui::Rect {
    egui::Rect::from_min_max(to_egui_pos2(r.min), to_egui_pos2(r.max))
}

pub(crate) fn from_egui_rect(r: egui::Rect) -> Rect {
    Rect::new(from_egui_pos2(r.min), from_egui_pos2(r.max))
}

/// Convert a non-empty color to egui. Callers must gate on
/// `Rgba::is_empty` first; an empty color converts to transparent.
pub(crate) fn to_color32(c: Rgba) -> egui::Color32 {
    if c.is_empty() {
        return egui::Color32::TRANSPARENT;
    }
    egui::Color32::from_rgba_unmultiplied(c.r as u8, c.g as u8, c.b as u8, c.a as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_roundtrip() {
        let r = Rect::from_min_size(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(from_egui_rect(to_egui_rect(r)), r);
    }

    #[test]
    fn test_color_conversion() {
        let c = to_color32(Rgba::new(26, 30, 67, 255));
        assert_eq!(c, egui::Color32::from_rgba_unmultiplied(26, 30, 67, 255));
        assert_eq!(to_color32(Rgba::EMPTY), egui::Color32::TRANSPARENT);
    }
}
