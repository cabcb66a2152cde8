//! Core types for wilayah-core.
//!
//! This module defines the fundamental data structures shared across the
//! engine: the administrative [`Level`] vocabulary and the denormalised
//! [`HierarchyRow`] (one per village) that the dataset store holds.

use serde::Serialize;

/// One of the four administrative granularities, ordered coarse → fine.
///
/// The discriminant is the level's depth (1–4), which doubles as the
/// "view level" reported by a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Province = 1,
    Regency = 2,
    District = 3,
    Village = 4,
}

/// Caller-facing level names, including the Indonesian form field names.
/// Lookups are made on the lowercased input.
static LEVEL_NAMES: phf::Map<&'static str, Level> = phf::phf_map! {
    "prov" => Level::Province,
    "province" => Level::Province,
    "provinsi" => Level::Province,
    "kab" => Level::Regency,
    "kabupaten" => Level::Regency,
    "kota" => Level::Regency,
    "regency" => Level::Regency,
    "kec" => Level::District,
    "kecamatan" => Level::District,
    "district" => Level::District,
    "desa" => Level::Village,
    "kelurahan" => Level::Village,
    "village" => Level::Village,
};

impl Level {
    /// All levels in hierarchy order.
    pub const ALL: [Level; 4] = [
        Level::Province,
        Level::Regency,
        Level::District,
        Level::Village,
    ];

    /// Depth of this level, 1 (province) through 4 (village).
    pub fn depth(self) -> u8 {
        self as u8
    }

    /// Zero-based column index into a row's per-level arrays.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Fixed width of this level's zero-padded code.
    pub fn code_width(self) -> usize {
        match self {
            Level::Province | Level::Regency => 2,
            Level::District | Level::Village => 3,
        }
    }

    /// The next finer level, or `None` at village.
    pub fn deeper(self) -> Option<Level> {
        Self::from_depth(self.depth() + 1)
    }

    pub fn from_depth(depth: u8) -> Option<Level> {
        match depth {
            1 => Some(Level::Province),
            2 => Some(Level::Regency),
            3 => Some(Level::District),
            4 => Some(Level::Village),
            _ => None,
        }
    }

    /// Resolve a caller-supplied level name (`"prov"`, `"kabupaten"`,
    /// `"district"`, …). Unknown names return `None`.
    pub fn parse(name: &str) -> Option<Level> {
        LEVEL_NAMES.get(name.trim().to_lowercase().as_str()).copied()
    }

    /// Levels strictly coarser than `self`, in hierarchy order.
    pub fn ancestors(self) -> &'static [Level] {
        &Self::ALL[..self.index()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Province => "province",
            Level::Regency => "regency",
            Level::District => "district",
            Level::Village => "village",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single village row with its full ancestry.
///
/// Codes are fixed-width zero-padded strings and are only meaningful together
/// with their ancestors' codes: regency `"01"` exists under many provinces.
/// Every field is a plain `String`; absent source values are stored as `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyRow {
    codes: [String; 4],
    names: [String; 4],
    /// Lowercase copies of `names`, used only for matching.
    search: [String; 4],
}

impl HierarchyRow {
    /// Build a row from already-normalised codes and names, deriving the
    /// lowercase search keys.
    pub fn new(codes: [String; 4], names: [String; 4]) -> Self {
        let search = [
            names[0].to_lowercase(),
            names[1].to_lowercase(),
            names[2].to_lowercase(),
            names[3].to_lowercase(),
        ];
        Self {
            codes,
            names,
            search,
        }
    }

    pub fn code(&self, level: Level) -> &str {
        &self.codes[level.index()]
    }

    pub fn name(&self, level: Level) -> &str {
        &self.names[level.index()]
    }

    /// Lowercased name at `level`.
    pub fn search_key(&self, level: Level) -> &str {
        &self.search[level.index()]
    }

    /// Codes from province down to and including `level`.
    pub fn codes_through(&self, level: Level) -> &[String] {
        &self.codes[..=level.index()]
    }
}
