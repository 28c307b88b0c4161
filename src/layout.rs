//! Splits a ranked video list into the top-3 podium and the remainder grid.

use crate::api::Video;

pub const PODIUM_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Self::Gold => "1st",
            Self::Silver => "2nd",
            Self::Bronze => "3rd",
        }
    }
}

/// A video together with its 1-based rank and its index in the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a> {
    pub rank: usize,
    pub index: usize,
    pub video: &'a Video,
}

impl<'a> Ranked<'a> {
    fn at(videos: &'a [Video], index: usize) -> Self {
        Self {
            rank: index + 1,
            index,
            video: &videos[index],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodiumSlot {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Podium<'a> {
    pub first: Ranked<'a>,
    pub second: Ranked<'a>,
    pub third: Ranked<'a>,
}

impl<'a> Podium<'a> {
    /// Left-to-right display order: 2nd on the left, 1st in the center, 3rd on the right.
    pub fn slots(&self) -> [(PodiumSlot, Ranked<'a>); 3] {
        [
            (PodiumSlot::Left, self.second),
            (PodiumSlot::Center, self.first),
            (PodiumSlot::Right, self.third),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedLayout<'a> {
    pub podium: Option<Podium<'a>>,
    pub grid: Vec<Ranked<'a>>,
}

impl<'a> RankedLayout<'a> {
    /// With three or more videos the first three form the podium and the rest
    /// fill the grid. Shorter lists get no podium and go to the grid whole, so
    /// nothing is dropped from view.
    pub fn new(videos: &'a [Video]) -> Self {
        if videos.len() < PODIUM_SIZE {
            return Self {
                podium: None,
                grid: (0..videos.len()).map(|i| Ranked::at(videos, i)).collect(),
            };
        }

        Self {
            podium: Some(Podium {
                first: Ranked::at(videos, 0),
                second: Ranked::at(videos, 1),
                third: Ranked::at(videos, 2),
            }),
            grid: (PODIUM_SIZE..videos.len())
                .map(|i| Ranked::at(videos, i))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.podium.is_none() && self.grid.is_empty()
    }

    pub fn podium_len(&self) -> usize {
        if self.podium.is_some() { PODIUM_SIZE } else { 0 }
    }

    pub fn grid_heading(&self) -> &'static str {
        if self.podium.is_some() {
            "Other trending videos"
        } else {
            "Trending videos"
        }
    }

    /// Position of `index` within the grid, if it lives there.
    pub fn grid_position(&self, index: usize) -> Option<usize> {
        index
            .checked_sub(self.podium_len())
            .filter(|pos| *pos < self.grid.len())
    }
}
