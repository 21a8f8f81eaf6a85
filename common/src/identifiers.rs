use std::fmt;

pub const MAX_PLAYER_NAME_LENGTH: usize = 20;

/// A trimmed, non-empty player name of at most [`MAX_PLAYER_NAME_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(name: &str) -> Result<Self, String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("Player name must not be empty".to_string());
        }
        if trimmed.chars().count() > MAX_PLAYER_NAME_LENGTH {
            return Err(format!(
                "Player name must be at most {} characters",
                MAX_PLAYER_NAME_LENGTH
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
