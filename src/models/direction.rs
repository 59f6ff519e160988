use serde::{Deserialize, Serialize};

/// Canvas orientation for the graph view.
///
/// Serialized in uppercase (`"UP"`, `"DOWN"`, `"LEFT"`, `"RIGHT"`) to match
/// the persisted configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LayoutDirection {
    Up,
    Down,
    #[default]
    Left,
    Right,
}

impl LayoutDirection {
    /// The next direction in the fixed rotation cycle:
    /// LEFT → UP → RIGHT → DOWN → LEFT.
    pub fn next(self) -> Self {
        match self {
            Self::Left => Self::Up,
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(LayoutDirection::Left.next(), LayoutDirection::Up);
        assert_eq!(LayoutDirection::Up.next(), LayoutDirection::Right);
        assert_eq!(LayoutDirection::Right.next(), LayoutDirection::Down);
        assert_eq!(LayoutDirection::Down.next(), LayoutDirection::Left);
    }

    #[test]
    fn test_cycle_returns_to_start() {
        for start in [
            LayoutDirection::Up,
            LayoutDirection::Down,
            LayoutDirection::Left,
            LayoutDirection::Right,
        ] {
            assert_eq!(start.next().next().next().next(), start);
        }
    }

    #[test]
    fn test_default_is_left() {
        assert_eq!(LayoutDirection::default(), LayoutDirection::Left);
    }

    #[test]
    fn test_serialized_spelling() {
        assert_eq!(
            serde_json::to_string(&LayoutDirection::Left).unwrap(),
            "\"LEFT\""
        );
        assert_eq!(
            serde_json::to_string(&LayoutDirection::Up).unwrap(),
            "\"UP\""
        );
        assert_eq!(
            serde_json::from_str::<LayoutDirection>("\"DOWN\"").unwrap(),
            LayoutDirection::Down
        );
        assert_eq!(
            serde_json::from_str::<LayoutDirection>("\"RIGHT\"").unwrap(),
            LayoutDirection::Right
        );
    }
}
