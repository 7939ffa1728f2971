use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use image::ImageReader;
use tracing::{debug, warn};

use super::canvas::Rgba;
use crate::sprite_keys::validate_sprite_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteHandle {
    Image {
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    },
    /// Stand-in for a sprite whose image could not be loaded.
    Placeholder { tint: Rgba },
}

/// Sprite images keyed by id, loaded once from `<image_dir>/<id>.png`.
///
/// A failed load is logged once and replaced by a placeholder so the frame
/// still shows where the entity is.
#[derive(Debug)]
pub struct SpriteResources {
    image_dir: PathBuf,
    sprites: HashMap<String, SpriteHandle>,
    warned: HashSet<String>,
}

impl SpriteResources {
    pub fn new(image_dir: PathBuf) -> Self {
        Self {
            image_dir,
            sprites: HashMap::new(),
            warned: HashSet::new(),
        }
    }

    pub fn load(&mut self, sprite_ids: &[&str]) {
        for id in sprite_ids {
            if self.sprites.contains_key(*id) {
                continue;
            }
            let handle = match load_sprite(&self.image_dir, id) {
                Ok(handle) => handle,
                Err(reason) => {
                    self.warn_load_failed_once(id, &reason);
                    SpriteHandle::Placeholder {
                        tint: placeholder_tint(id),
                    }
                }
            };
            self.sprites.insert((*id).to_string(), handle);
        }
        debug!(
            requested = sprite_ids.len(),
            loaded = self.sprites.len(),
            image_dir = %self.image_dir.display(),
            "sprite_resources_loaded"
        );
    }

    pub fn get(&self, sprite_id: &str) -> Option<&SpriteHandle> {
        self.sprites.get(sprite_id)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    fn warn_load_failed_once(&mut self, sprite_id: &str, reason: &str) {
        if !self.warned.insert(sprite_id.to_string()) {
            return;
        }
        warn!(
            sprite_id,
            image_dir = %self.image_dir.display(),
            reason,
            "sprite_load_failed_using_placeholder"
        );
    }
}

fn load_sprite(image_dir: &Path, sprite_id: &str) -> Result<SpriteHandle, String> {
    validate_sprite_key(sprite_id).map_err(|error| format!("invalid_key:{error}"))?;
    let path = image_dir.join(format!("{sprite_id}.png"));
    let reader = ImageReader::open(&path).map_err(|error| format!("file_open_failed:{error}"))?;
    let decoded = reader
        .decode()
        .map_err(|error| format!("decode_failed:{error}"))?;
    let image = decoded.to_rgba8();
    Ok(SpriteHandle::Image {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

/// Stable per-id tint so different missing sprites stay distinguishable.
fn placeholder_tint(sprite_id: &str) -> Rgba {
    let hash = sprite_id.bytes().fold(2166136261u32, |acc, byte| {
        (acc ^ u32::from(byte)).wrapping_mul(16777619)
    });
    let [a, b, c, _] = hash.to_le_bytes();
    [96 | a, 96 | b, 96 | c, 255]
}
