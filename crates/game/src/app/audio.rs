use std::collections::HashSet;

use tracing::debug;

use super::gameplay::AudioPlayer;

/// Audio sink that records playback in the log. Tracks which sounds are
/// currently sounding so pause and stop on a silent id are no-ops.
#[derive(Debug, Default)]
pub(crate) struct TracingAudio {
    playing: HashSet<String>,
}

impl TracingAudio {
    #[cfg(test)]
    pub(crate) fn is_playing(&self, sound_id: &str) -> bool {
        self.playing.contains(sound_id)
    }
}

impl AudioPlayer for TracingAudio {
    fn play(&mut self, sound_id: &str) {
        self.playing.insert(sound_id.to_string());
        debug!(sound_id, "audio_play");
    }

    fn pause(&mut self, sound_id: &str) {
        if self.playing.remove(sound_id) {
            debug!(sound_id, "audio_pause");
        }
    }

    fn stop(&mut self, sound_id: &str) {
        if self.playing.remove(sound_id) {
            debug!(sound_id, "audio_stop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_and_pause_silence_a_sound() {
        let mut audio = TracingAudio::default();
        audio.play("rebelTheme");
        audio.play("token");
        assert!(audio.is_playing("rebelTheme"));

        audio.stop("rebelTheme");
        audio.pause("token");
        audio.pause("never-played");

        assert!(!audio.is_playing("rebelTheme"));
        assert!(!audio.is_playing("token"));
    }
}
