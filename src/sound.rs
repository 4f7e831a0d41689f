//! Sound collaborator
//!
//! Windows only fire named cues and read/write channel volumes. Mixing and
//! decoding belong to the host's audio layer; [`SoundBoard`] is the in-process
//! implementation that tracks volumes and logs cues.

use std::cell::{Cell, RefCell};

/// Named UI sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Ok,
    Buzzer,
    Cursor,
    Cancel,
}

/// Volume channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Master,
    Bgm,
    Se,
}

/// Fire-and-forget sound interface
pub trait Sound {
    fn play(&self, cue: Cue);

    /// Channel volume in `0.0..=1.0`
    fn volume(&self, channel: Channel) -> f32;

    fn set_volume(&self, channel: Channel, volume: f32);
}

/// Volume table plus a record of played cues
#[derive(Debug)]
pub struct SoundBoard {
    master: Cell<f32>,
    bgm: Cell<f32>,
    se: Cell<f32>,
    played: RefCell<Vec<Cue>>,
}

impl SoundBoard {
    pub fn new() -> Self {
        SoundBoard {
            master: Cell::new(1.0),
            bgm: Cell::new(1.0),
            se: Cell::new(1.0),
            played: RefCell::new(Vec::new()),
        }
    }

    /// Cues played so far, oldest first
    pub fn played(&self) -> Vec<Cue> {
        self.played.borrow().clone()
    }

    /// Forgets played cues
    pub fn clear_played(&self) {
        self.played.borrow_mut().clear();
    }

    fn cell(&self, channel: Channel) -> &Cell<f32> {
        match channel {
            Channel::Master => &self.master,
            Channel::Bgm => &self.bgm,
            Channel::Se => &self.se,
        }
    }
}

impl Default for SoundBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Sound for SoundBoard {
    fn play(&self, cue: Cue) {
        log::trace!("Sound cue {:?}", cue);
        self.played.borrow_mut().push(cue);
    }

    fn volume(&self, channel: Channel) -> f32 {
        self.cell(channel).get()
    }

    fn set_volume(&self, channel: Channel, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        log::debug!("{:?} volume -> {:.2}", channel, volume);
        self.cell(channel).set(volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volumes_clamped() {
        let board = SoundBoard::new();
        board.set_volume(Channel::Bgm, 1.5);
        assert_eq!(board.volume(Channel::Bgm), 1.0);
        board.set_volume(Channel::Se, -0.2);
        assert_eq!(board.volume(Channel::Se), 0.0);
        assert_eq!(board.volume(Channel::Master), 1.0);
    }

    #[test]
    fn test_records_cues_in_order() {
        let board = SoundBoard::new();
        board.play(Cue::Cursor);
        board.play(Cue::Ok);
        assert_eq!(board.played(), vec![Cue::Cursor, Cue::Ok]);
        board.clear_played();
        assert!(board.played().is_empty());
    }
}
