use std::path::PathBuf;

use crate::domain::channel::Channel;

/// Where one output slot gets its pixels from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelSource {
    FromFile {
        path: PathBuf,
        channel_to_extract: Channel,
        invert: bool,
    },
    UniformValue {
        value: u8,
    },
}

impl Default for ChannelSource {
    // 起動直後のピッカーと同じ: 一様値 255
    fn default() -> Self {
        ChannelSource::UniformValue { value: 255 }
    }
}

impl ChannelSource {
    pub fn from_file(path: impl Into<PathBuf>, channel_to_extract: Channel, invert: bool) -> Self {
        ChannelSource::FromFile {
            path: path.into(),
            channel_to_extract,
            invert,
        }
    }

    pub fn uniform(value: u8) -> Self {
        ChannelSource::UniformValue { value }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        match self {
            ChannelSource::FromFile {
                path,
                channel_to_extract,
                invert,
            } => Fingerprint(Key::File {
                path: path.clone(),
                channel: *channel_to_extract,
                invert: *invert,
            }),
            ChannelSource::UniformValue { value } => Fingerprint(Key::Uniform(*value)),
        }
    }
}

/// Exact-equality summary of a [`ChannelSource`], used only to decide
/// whether a cached result is still current.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(Key);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Key {
    File {
        path: PathBuf,
        channel: Channel,
        invert: bool,
    },
    Uniform(u8),
}

/// One source per output slot, in R, G, B, A order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSources {
    pub r: ChannelSource,
    pub g: ChannelSource,
    pub b: ChannelSource,
    pub a: ChannelSource,
}

impl SlotSources {
    pub fn get(&self, slot: Channel) -> &ChannelSource {
        match slot {
            Channel::R => &self.r,
            Channel::G => &self.g,
            Channel::B => &self.b,
            Channel::A => &self.a,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &ChannelSource)> {
        Channel::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    pub fn fingerprints(&self) -> [Fingerprint; 4] {
        [
            self.r.fingerprint(),
            self.g.fingerprint(),
            self.b.fingerprint(),
            self.a.fingerprint(),
        ]
    }
}
