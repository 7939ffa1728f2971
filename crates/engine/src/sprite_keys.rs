use thiserror::Error;

/// Sprite ids name a PNG under the image directory, e.g. `stormtrooper-color` or `rebelSymbol`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpriteKeyError {
    #[error("sprite id must not be empty")]
    Empty,
    #[error("sprite id must not contain path separators")]
    PathSeparator,
    #[error("sprite id must not contain '..'")]
    ParentTraversal,
    #[error("sprite id must start with an ASCII letter, got '{character}'")]
    InvalidStart { character: char },
    #[error("sprite id contains invalid character '{character}'")]
    InvalidCharacter { character: char },
}

pub(crate) fn validate_sprite_key(key: &str) -> Result<(), SpriteKeyError> {
    let Some(first) = key.chars().next() else {
        return Err(SpriteKeyError::Empty);
    };
    if key.contains('/') || key.contains('\\') {
        return Err(SpriteKeyError::PathSeparator);
    }
    if key.contains("..") {
        return Err(SpriteKeyError::ParentTraversal);
    }
    if !first.is_ascii_alphabetic() {
        return Err(SpriteKeyError::InvalidStart { character: first });
    }
    match key
        .chars()
        .find(|ch| !(ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-')))
    {
        Some(character) => Err(SpriteKeyError::InvalidCharacter { character }),
        None => Ok(()),
    }
}
