use smallvec::SmallVec;

use crate::{
    animation::timeline::AnimatedProperty,
    foundation::core::{Size, Vec2},
};

/// How a node participates in layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionMode {
    /// In normal flow; measured where its parent lays it out.
    #[default]
    Static,
    /// Out of flow, shrink-to-fit, top-left pinned to the viewport origin.
    Fixed,
}

/// Whether a node paints. Hidden nodes keep their layout box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Painted normally.
    #[default]
    Visible,
    /// Not painted, still occupies space.
    Hidden,
}

/// Inline style record of one visual node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    /// Positioning mode.
    pub position: PositionMode,
    /// Paint visibility.
    pub visibility: Visibility,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Translation applied after layout (`translate(x, y)`).
    pub translate: Vec2,
    /// Uniform scale about the node centre.
    pub scale: f64,
    /// Minimum layout size.
    pub min_size: Size,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            position: PositionMode::Static,
            visibility: Visibility::Visible,
            opacity: 1.0,
            translate: Vec2::ZERO,
            scale: 1.0,
            min_size: Size::ZERO,
        }
    }
}

impl Style {
    /// Write one sampled timeline value.
    pub fn set_animated(&mut self, property: AnimatedProperty, value: f64) {
        match property {
            AnimatedProperty::Opacity => self.opacity = value,
            AnimatedProperty::Scale => self.scale = value,
            AnimatedProperty::X => self.translate.x = value,
            AnimatedProperty::Y => self.translate.y = value,
            AnimatedProperty::MinWidth => self.min_size.width = value.max(0.0),
            AnimatedProperty::MinHeight => self.min_size.height = value.max(0.0),
        }
    }

    /// Read the current value of an animatable property.
    pub fn animated(&self, property: AnimatedProperty) -> f64 {
        match property {
            AnimatedProperty::Opacity => self.opacity,
            AnimatedProperty::Scale => self.scale,
            AnimatedProperty::X => self.translate.x,
            AnimatedProperty::Y => self.translate.y,
            AnimatedProperty::MinWidth => self.min_size.width,
            AnimatedProperty::MinHeight => self.min_size.height,
        }
    }

    /// Patch that turns `self` back into `original`, touching only differing properties.
    pub fn diff_to(&self, original: &Style) -> StylePatch {
        let mut patch = StylePatch::new();
        if self.position != original.position {
            patch = patch.position(original.position);
        }
        if self.visibility != original.visibility {
            patch = patch.visibility(original.visibility);
        }
        if self.opacity != original.opacity {
            patch = patch.opacity(original.opacity);
        }
        if self.translate != original.translate {
            patch = patch.translate(original.translate);
        }
        if self.scale != original.scale {
            patch = patch.scale(original.scale);
        }
        if self.min_size != original.min_size {
            patch = patch.min_size(original.min_size);
        }
        patch
    }
}

/// One property assignment inside a [`StylePatch`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue {
    /// Set [`Style::position`].
    Position(PositionMode),
    /// Set [`Style::visibility`].
    Visibility(Visibility),
    /// Set [`Style::opacity`].
    Opacity(f64),
    /// Set [`Style::translate`].
    Translate(Vec2),
    /// Set [`Style::scale`].
    Scale(f64),
    /// Set [`Style::min_size`].
    MinSize(Size),
}

/// Ordered record of property assignments staged onto a node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StylePatch {
    values: SmallVec<[StyleValue; 4]>,
}

impl StylePatch {
    /// Empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the positioning mode.
    pub fn position(self, v: PositionMode) -> Self {
        self.with(StyleValue::Position(v))
    }

    /// Assign visibility.
    pub fn visibility(self, v: Visibility) -> Self {
        self.with(StyleValue::Visibility(v))
    }

    /// Assign opacity.
    pub fn opacity(self, v: f64) -> Self {
        self.with(StyleValue::Opacity(v))
    }

    /// Assign translation.
    pub fn translate(self, v: Vec2) -> Self {
        self.with(StyleValue::Translate(v))
    }

    /// Assign uniform scale.
    pub fn scale(self, v: f64) -> Self {
        self.with(StyleValue::Scale(v))
    }

    /// Assign minimum size.
    pub fn min_size(self, v: Size) -> Self {
        self.with(StyleValue::MinSize(v))
    }

    fn with(mut self, value: StyleValue) -> Self {
        // Later assignments to the same property replace earlier ones.
        self.values
            .retain(|v| std::mem::discriminant(v) != std::mem::discriminant(&value));
        self.values.push(value);
        self
    }

    /// `true` when the patch assigns nothing.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of property assignments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Assignments in insertion order.
    pub fn values(&self) -> &[StyleValue] {
        &self.values
    }

    /// Apply every assignment to `style`.
    pub fn apply_to(&self, style: &mut Style) {
        for v in &self.values {
            match *v {
                StyleValue::Position(p) => style.position = p,
                StyleValue::Visibility(vis) => style.visibility = vis,
                StyleValue::Opacity(o) => style.opacity = o,
                StyleValue::Translate(t) => style.translate = t,
                StyleValue::Scale(s) => style.scale = s,
                StyleValue::MinSize(s) => style.min_size = s,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/style.rs"]
mod tests;
