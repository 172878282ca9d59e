use std::collections::HashMap;
use std::fmt;

/// One-to-one correspondence between matrix position labels ("1".."n")
/// and graph node labels.
///
/// Held bidirectionally so lookups work both ways and the two directions
/// cannot drift apart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bijection {
    /// Position to node-label mapping.
    position_to_label: HashMap<String, String>,
    /// Node-label to position mapping.
    label_to_position: HashMap<String, String>,
}

impl Bijection {
    /// Creates an empty bijection.
    #[contracts::debug_ensures(ret.position_to_label.is_empty())]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `position` with `label` in both directions.
    #[contracts::debug_requires(self.position_to_label.len() == self.label_to_position.len())]
    #[contracts::debug_ensures(self.position_to_label.len() == self.label_to_position.len())]
    pub fn insert(&mut self, position: &str, label: &str) {
        self.position_to_label
            .insert(position.to_string(), label.to_string());
        self.label_to_position
            .insert(label.to_string(), position.to_string());
    }

    /// The node label assigned to `position`.
    #[must_use]
    pub fn label_for(&self, position: &str) -> Option<&str> {
        self.position_to_label.get(position).map(String::as_str)
    }

    /// The position a node label is assigned to.
    #[must_use]
    pub fn position_for(&self, label: &str) -> Option<&str> {
        self.label_to_position.get(label).map(String::as_str)
    }

    /// Number of pairs.
    #[contracts::debug_requires(self.position_to_label.len() == self.label_to_position.len())]
    #[must_use]
    pub fn len(&self) -> usize {
        self.position_to_label.len()
    }

    /// True when no pairs are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position_to_label.is_empty()
    }

    /// The forward (position → label) mapping.
    #[must_use]
    pub fn position_to_label(&self) -> &HashMap<String, String> {
        &self.position_to_label
    }

    /// All pairs, ordered by numeric position.
    #[must_use]
    pub fn pairs_by_position(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .position_to_label
            .iter()
            .map(|(position, label)| (position.as_str(), label.as_str()))
            .collect();
        pairs.sort_by_key(|(position, _)| position.parse::<u64>().ok());
        pairs
    }
}

impl fmt::Display for Bijection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (position, label) in self.pairs_by_position() {
            if !first {
                write!(f, "  ")?;
            }
            write!(f, "{position} -> {label}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_directions_stay_consistent() {
        let mut bijection = Bijection::new();
        bijection.insert("1", "B");
        bijection.insert("2", "A");

        assert_eq!(bijection.label_for("1"), Some("B"));
        assert_eq!(bijection.position_for("A"), Some("2"));
        assert_eq!(bijection.len(), 2);
    }

    #[test]
    fn pairs_sort_by_numeric_position() {
        let mut bijection = Bijection::new();
        for (position, label) in [("10", "J"), ("2", "B"), ("1", "A")] {
            bijection.insert(position, label);
        }

        let positions: Vec<&str> = bijection
            .pairs_by_position()
            .into_iter()
            .map(|(position, _)| position)
            .collect();
        assert_eq!(positions, vec!["1", "2", "10"]);
    }

    #[test]
    fn display_lists_pairs_in_position_order() {
        let mut bijection = Bijection::new();
        bijection.insert("2", "B");
        bijection.insert("1", "C");

        assert_eq!(bijection.to_string(), "1 -> C  2 -> B");
    }
}
