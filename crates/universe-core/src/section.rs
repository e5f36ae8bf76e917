use crate::error::SceneError;
use std::fmt;
use std::str::FromStr;

/// Top-level site sections. `Universe` is the 3D scene itself; every other
/// section is a content page reached by clicking its orbiting body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Universe,
    Music,
    Images,
    Tours,
    Shop,
    About,
}

impl Section {
    /// Roster order, also used for keyboard shortcuts `1`..`6`.
    pub const ALL: [Section; 6] = [
        Section::Universe,
        Section::Music,
        Section::Images,
        Section::Tours,
        Section::Shop,
        Section::About,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Universe => "universe",
            Section::Music => "music",
            Section::Images => "images",
            Section::Tours => "tours",
            Section::Shop => "shop",
            Section::About => "about",
        }
    }

    /// Human label used in navigation chrome.
    pub fn title(self) -> &'static str {
        match self {
            Section::Universe => "Universe",
            Section::Music => "Music",
            Section::Images => "Gallery",
            Section::Tours => "Tours",
            Section::Shop => "Shop",
            Section::About => "About",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|sec| sec.as_str() == s)
            .ok_or_else(|| SceneError::UnknownSection(s.to_string()))
    }
}
