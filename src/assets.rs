//! Asset keys and sound cues consumed by presentation adapters.
//!
//! The core only names assets. Decoding, scaling and playback are left to
//! the adapter; a missing file degrades to a placeholder image or silence.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::card::Card;

/// Semantic events an adapter may turn into sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// The player drew a card.
    Hit,
    /// The player won the session.
    Win,
    /// The player lost or drew the session.
    Lose,
}

impl SoundCue {
    /// Every cue, for preloading.
    pub const ALL: [Self; 3] = [Self::Hit, Self::Win, Self::Lose];

    /// Returns the file name under the sounds directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Hit => "hit.wav",
            Self::Win => "win.wav",
            Self::Lose => "lose.wav",
        }
    }
}

/// An image the table needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageAsset {
    /// The face of a card.
    Card(Card),
    /// The back of a card, used for the deck and the hidden AI card.
    Back,
    /// The table background.
    Background,
}

impl ImageAsset {
    /// Returns the stable key, e.g. `"AH"`, `"back"` or `"bg"`.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Card(card) => card.asset_key(),
            Self::Back => String::from("back"),
            Self::Background => String::from("bg"),
        }
    }

    /// Returns the file name under the images directory.
    ///
    /// ```
    /// use bjvs::{Card, ImageAsset, Suit};
    ///
    /// assert_eq!(ImageAsset::Card(Card::new(Suit::Diamonds, 12)).file_name(), "QD.jpg");
    /// assert_eq!(ImageAsset::Back.file_name(), "back.jpg");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.jpg", self.key())
    }
}

#[cfg(feature = "std")]
pub use catalog::AssetCatalog;

#[cfg(feature = "std")]
mod catalog {
    use std::path::{Path, PathBuf};

    use alloc::vec::Vec;

    use super::{ImageAsset, SoundCue};
    use crate::card::{Card, RANKS, SUITS};

    /// Resolves asset files under a root directory.
    ///
    /// Images live in `<root>/images`, sounds in `<root>/sounds`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AssetCatalog {
        root: PathBuf,
    }

    impl AssetCatalog {
        /// Creates a catalog rooted at `root`.
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }

        /// Returns the root directory.
        #[must_use]
        pub fn root(&self) -> &Path {
            &self.root
        }

        /// Returns the path of an image, or `None` if the file is missing.
        #[must_use]
        pub fn image_path(&self, asset: &ImageAsset) -> Option<PathBuf> {
            let path = self.root.join("images").join(asset.file_name());
            path.is_file().then_some(path)
        }

        /// Returns the path of a sound, or `None` if the file is missing.
        #[must_use]
        pub fn sound_path(&self, cue: SoundCue) -> Option<PathBuf> {
            let path = self.root.join("sounds").join(cue.file_name());
            path.is_file().then_some(path)
        }

        /// Lists every image the table can show that is not on disk.
        #[must_use]
        pub fn missing_images(&self) -> Vec<ImageAsset> {
            SUITS
                .iter()
                .flat_map(|&suit| RANKS.iter().map(move |&rank| Card::new(suit, rank)))
                .map(ImageAsset::Card)
                .chain([ImageAsset::Back, ImageAsset::Background])
                .filter(|asset| self.image_path(asset).is_none())
                .collect()
        }

        /// Lists every sound cue whose file is not on disk.
        #[must_use]
        pub fn missing_sounds(&self) -> Vec<SoundCue> {
            SoundCue::ALL
                .into_iter()
                .filter(|&cue| self.sound_path(cue).is_none())
                .collect()
        }
    }
}
