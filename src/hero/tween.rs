use crate::foundation::core::{Rect, TweenRange};

/// Per-axis top-left positions of a tweened element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundsTween {
    /// Horizontal position range.
    pub x: TweenRange,
    /// Vertical position range.
    pub y: TweenRange,
}

/// Positions keeping an element of `element`'s size centred in the container at both ends.
///
/// For each axis: `origin + container_size / 2 - element_size / 2`. Only the size of
/// `element` is used.
pub fn tween_bounds(element: Rect, initial: Rect, final_: Rect) -> BoundsTween {
    let centered_x = |c: Rect| c.x0 + c.width() / 2.0 - element.width() / 2.0;
    let centered_y = |c: Rect| c.y0 + c.height() / 2.0 - element.height() / 2.0;
    BoundsTween {
        x: TweenRange::new(centered_x(initial), centered_x(final_)),
        y: TweenRange::new(centered_y(initial), centered_y(final_)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hero/tween.rs"]
mod tests;
