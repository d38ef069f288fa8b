use crate::hero::snapshot::{TaggedElementInfo, VisualSnapshot};

/// Outgoing and incoming elements sharing one hero key.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchedPair {
    /// Element leaving with the outgoing root.
    pub outgoing: TaggedElementInfo,
    /// Element arriving with the incoming root.
    pub incoming: TaggedElementInfo,
}

/// Inner join of two tagged sets on key.
///
/// Pairs come out in incoming order, then outgoing order. Keys present on one side only
/// produce nothing.
pub fn match_keys(outgoing: &[TaggedElementInfo], incoming: &[TaggedElementInfo]) -> Vec<MatchedPair> {
    let mut pairs = Vec::new();
    for i in incoming {
        for o in outgoing {
            if o.key == i.key {
                pairs.push(MatchedPair {
                    outgoing: o.clone(),
                    incoming: i.clone(),
                });
            }
        }
    }
    pairs
}

/// [`match_keys`] over two captured snapshots.
pub fn match_snapshots(outgoing: &VisualSnapshot, incoming: &VisualSnapshot) -> Vec<MatchedPair> {
    match_keys(&outgoing.tagged, &incoming.tagged)
}

#[cfg(test)]
#[path = "../../tests/unit/hero/matcher.rs"]
mod tests;
