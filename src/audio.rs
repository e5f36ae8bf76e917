use crate::constants::*;
use fnv::FnvHashMap;
use universe_core::{Cue, CuePlayer};
use web_sys as web;

fn load_clip(url: &str, volume: f64) -> anyhow::Result<web::HtmlAudioElement> {
    let el = web::HtmlAudioElement::new_with_src(url)
        .map_err(|e| anyhow::anyhow!("audio element for {}: {:?}", url, e))?;
    el.set_volume(volume);
    el.set_preload("auto");
    Ok(el)
}

/// Cue player and background music on plain `<audio>` elements.
pub struct WebCues {
    clips: FnvHashMap<Cue, web::HtmlAudioElement>,
    music: Option<web::HtmlAudioElement>,
    muted: bool,
    music_playing: bool,
}

impl WebCues {
    /// Missing clips are logged and skipped; the scene runs silent rather than
    /// failing to start.
    pub fn load() -> Self {
        let mut clips = FnvHashMap::default();
        for (cue, url) in [(Cue::Hit, HIT_SOUND_URL), (Cue::Success, SUCCESS_SOUND_URL)] {
            match load_clip(url, CUE_VOLUME) {
                Ok(el) => {
                    clips.insert(cue, el);
                }
                Err(e) => log::warn!("[audio] {:#}", e),
            }
        }
        let music = match load_clip(MUSIC_URL, MUSIC_VOLUME) {
            Ok(el) => {
                el.set_loop(true);
                Some(el)
            }
            Err(e) => {
                log::warn!("[audio] {:#}", e);
                None
            }
        };
        Self {
            clips,
            music,
            muted: false,
            music_playing: false,
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        log::info!("[audio] muted={}", self.muted);
        self.muted
    }

    /// Start or pause the music loop. `wanted` is the scene's view; mute
    /// always wins.
    pub fn sync_music(&mut self, wanted: bool) {
        let play = wanted && !self.muted;
        if play == self.music_playing {
            return;
        }
        let Some(music) = &self.music else {
            return;
        };
        if play {
            // autoplay may be refused until the first user gesture
            if let Err(e) = music.play() {
                log::warn!("[audio] music play refused: {:?}", e);
                return;
            }
        } else {
            _ = music.pause();
        }
        self.music_playing = play;
    }
}

impl CuePlayer for WebCues {
    fn play_cue(&mut self, cue: Cue) -> anyhow::Result<()> {
        if self.muted {
            return Ok(());
        }
        let clip = self
            .clips
            .get(&cue)
            .ok_or_else(|| anyhow::anyhow!("no clip loaded for {:?}", cue))?;
        clip.set_current_time(0.0);
        clip.play()
            .map_err(|e| anyhow::anyhow!("play {:?}: {:?}", cue, e))?;
        Ok(())
    }
}
