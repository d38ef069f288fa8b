use std::collections::BTreeSet;

use crate::{
    foundation::core::{HeroKey, NodeId, Rect, TweenRange},
    foundation::error::{HeroError, HeroResult},
    hero::ledger::StyleLedger,
    scene::style::{PositionMode, StylePatch},
    scene::tree::VisualTree,
};

/// Attribute naming an element's hero key.
pub const HERO_KEY_ATTR: &str = "data-hero-key";
/// Space separated list of the properties (`opacity`, `scale`) an element animates.
pub const HERO_TRANSITION_ATTR: &str = "data-hero-transition";

/// Opacity and scale ranges for one side of a transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyRanges {
    /// Opacity range.
    pub opacity: TweenRange,
    /// Scale range.
    pub scale: TweenRange,
}

/// Outgoing and incoming property ranges of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionSpec {
    /// Ranges used when the element is leaving.
    pub outgoing: PropertyRanges,
    /// Ranges used when the element is arriving.
    pub incoming: PropertyRanges,
}

impl TransitionSpec {
    /// Both opacity and scale animate. Used for root elements.
    pub const FULL: Self = Self::new(true, true);

    /// Only the opted-in properties animate; the others hold at `1`.
    pub const fn new(opacity: bool, scale: bool) -> Self {
        const HOLD: TweenRange = TweenRange::constant(1.0);
        const OUT: TweenRange = TweenRange::new(1.0, 0.0);
        const IN: TweenRange = TweenRange::new(0.0, 1.0);
        Self {
            outgoing: PropertyRanges {
                opacity: if opacity { OUT } else { HOLD },
                scale: if scale { OUT } else { HOLD },
            },
            incoming: PropertyRanges {
                opacity: if opacity { IN } else { HOLD },
                scale: if scale { IN } else { HOLD },
            },
        }
    }

    /// Parse the value of [`HERO_TRANSITION_ATTR`]. A missing attribute animates nothing.
    pub fn parse(attr: Option<&str>) -> Self {
        let mut opacity = false;
        let mut scale = false;
        for token in attr.unwrap_or_default().split_whitespace() {
            match token {
                "opacity" => opacity = true,
                "scale" => scale = true,
                other => tracing::debug!(token = other, "ignoring unknown hero transition"),
            }
        }
        Self::new(opacity, scale)
    }
}

/// Geometry of one tagged descendant.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedElementInfo {
    /// Hero key of the element.
    pub key: HeroKey,
    /// The live element. Not owned by the snapshot.
    pub element: NodeId,
    /// Measured bounds in viewport space.
    pub bounds: Rect,
    /// Per-element property ranges.
    pub transition: TransitionSpec,
}

/// One side of a transition, measured once.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualSnapshot {
    /// Root element of this side.
    pub element: NodeId,
    /// Root bounds in viewport space.
    pub bounds: Rect,
    /// Tagged descendants in document order, unique by key.
    pub tagged: Vec<TaggedElementInfo>,
}

impl VisualSnapshot {
    /// Tagged descendant with `key`.
    pub fn get(&self, key: &HeroKey) -> Option<&TaggedElementInfo> {
        self.tagged.iter().find(|t| &t.key == key)
    }

    /// Keys of all tagged descendants, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &HeroKey> + '_ {
        self.tagged.iter().map(|t| &t.key)
    }
}

/// Measure `element` and its tagged descendants.
///
/// The element is switched to [`PositionMode::Static`] for measuring and left in
/// [`PositionMode::Fixed`] afterwards; the ledger records its original style first. On a
/// duplicate key the element is restored and nothing stays staged.
#[tracing::instrument(skip(tree, ledger, blacklist))]
pub fn capture<T: VisualTree>(
    tree: &mut T,
    ledger: &mut StyleLedger,
    element: NodeId,
    blacklist: &BTreeSet<HeroKey>,
) -> HeroResult<VisualSnapshot> {
    let was_tracked = ledger.original(element).is_some();
    let before = tree.style(element)?;
    ledger.stage(
        tree,
        element,
        &StylePatch::new().position(PositionMode::Static),
    )?;

    let measured = measure(tree, element, blacklist);
    let (bounds, tagged) = match measured {
        Ok(v) => v,
        Err(err) => {
            if was_tracked {
                tree.set_style(element, before)?;
            } else {
                ledger.restore_node(tree, element)?;
            }
            return Err(err);
        }
    };

    tree.patch_style(element, &StylePatch::new().position(PositionMode::Fixed))?;
    tracing::debug!(tagged = tagged.len(), "captured snapshot");
    Ok(VisualSnapshot {
        element,
        bounds,
        tagged,
    })
}

fn measure<T: VisualTree>(
    tree: &mut T,
    element: NodeId,
    blacklist: &BTreeSet<HeroKey>,
) -> HeroResult<(Rect, Vec<TaggedElementInfo>)> {
    let bounds = tree.bounding_rect(element)?;

    let mut seen = BTreeSet::<HeroKey>::new();
    let mut tagged = Vec::new();
    for node in tree.descendants_with_attribute(element, HERO_KEY_ATTR)? {
        let Some(key) = tree.attribute(node, HERO_KEY_ATTR).map(HeroKey::new) else {
            continue;
        };
        if blacklist.contains(&key) {
            continue;
        }
        if !seen.insert(key.clone()) {
            return Err(HeroError::duplicate_key(key.0));
        }
        let transition = TransitionSpec::parse(tree.attribute(node, HERO_TRANSITION_ATTR));
        tagged.push(TaggedElementInfo {
            key,
            element: node,
            bounds: tree.bounding_rect(node)?,
            transition,
        });
    }
    Ok((bounds, tagged))
}

#[cfg(test)]
#[path = "../../tests/unit/hero/snapshot.rs"]
mod tests;
