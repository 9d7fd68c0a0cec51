//! Small closed enums shared across crates.

use serde::{Deserialize, Serialize};

/// An inline markup feature recognised by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// `[description](url)`
    Link,
    /// `` `code` ``
    Code,
    /// `**bold**`
    Bold,
}

impl Feature {
    /// Every feature, in matcher priority order.
    pub const ALL: [Feature; 3] = [Feature::Link, Feature::Code, Feature::Bold];
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feature::Link => write!(f, "link"),
            Feature::Code => write!(f, "code"),
            Feature::Bold => write!(f, "bold"),
        }
    }
}

/// Numbered or bulleted; the only difference between the two list blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListType {
    /// `UnorderedList`
    Bullet,
    /// `OrderedList`, numbered from 1
    Ordered,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_display() {
        assert_eq!(Feature::Link.to_string(), "link");
        assert_eq!(Feature::Code.to_string(), "code");
        assert_eq!(Feature::Bold.to_string(), "bold");
    }

    #[test]
    fn test_all_is_priority_order() {
        assert_eq!(Feature::ALL, [Feature::Link, Feature::Code, Feature::Bold]);
    }
}
