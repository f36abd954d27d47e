//! Named pattern library.
//!
//! The literal grids live here as constants; `catalog()` turns them into
//! `Pattern` values once, on first use, and hands out a shared reference
//! from then on.

use std::sync::LazyLock;

use super::Pattern;

/// Glider - simplest spaceship, moves diagonally (period 4)
const GLIDER: [[u8; 3]; 3] = [
    [0, 1, 0],
    [0, 0, 1],
    [1, 1, 1],
];

/// Blinker - period 2 oscillator
const BLINKER: [[u8; 3]; 3] = [
    [0, 0, 0],
    [1, 1, 1],
    [0, 0, 0],
];

/// Block - simple still life
const BLOCK: [[u8; 2]; 2] = [
    [1, 1],
    [1, 1],
];

/// Toad - period 2 oscillator
const TOAD: [[u8; 4]; 4] = [
    [0, 0, 0, 0],
    [0, 1, 1, 1],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
];

/// Beacon - period 2 oscillator
const BEACON: [[u8; 4]; 4] = [
    [1, 1, 0, 0],
    [1, 0, 0, 0],
    [0, 0, 0, 1],
    [0, 0, 1, 1],
];

/// Lightweight spaceship, travels left (period 4)
const LWSS: [[u8; 5]; 5] = [
    [0, 0, 0, 0, 0],
    [0, 1, 0, 0, 1],
    [1, 0, 0, 0, 0],
    [1, 0, 0, 0, 1],
    [1, 1, 1, 1, 0],
];

/// Gosper glider gun, laid out vertically (period 30)
const GLIDER_GUN: [[u8; 9]; 36] = [
    [0, 0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 1, 1, 0, 0],
    [0, 0, 0, 1, 0, 0, 0, 1, 0],
    [0, 0, 1, 0, 0, 0, 0, 0, 1],
    [0, 0, 1, 0, 0, 0, 0, 0, 1],
    [0, 0, 0, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 0, 1, 0],
    [0, 0, 0, 0, 1, 1, 1, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 1, 0, 0, 0, 0],
    [0, 0, 1, 1, 1, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 1, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 0, 0, 0, 0, 0],
];

static GLIDER_PATTERN: LazyLock<Pattern> = LazyLock::new(|| literal("glider", &GLIDER));
static BLINKER_PATTERN: LazyLock<Pattern> = LazyLock::new(|| literal("blinker", &BLINKER));
static BLOCK_PATTERN: LazyLock<Pattern> = LazyLock::new(|| literal("block", &BLOCK));
static TOAD_PATTERN: LazyLock<Pattern> = LazyLock::new(|| literal("toad", &TOAD));
static BEACON_PATTERN: LazyLock<Pattern> = LazyLock::new(|| literal("beacon", &BEACON));
static LWSS_PATTERN: LazyLock<Pattern> = LazyLock::new(|| literal("lwss", &LWSS));
static GLIDER_GUN_PATTERN: LazyLock<Pattern> = LazyLock::new(|| literal("glider_gun", &GLIDER_GUN));

// Literals above are rectangular 0/1 grids, so construction cannot fail
fn literal<R: AsRef<[u8]>>(name: &str, rows: &[R]) -> Pattern {
    Pattern::from_rows(rows).unwrap_or_else(|e| panic!("bad catalog literal {name}: {e}"))
}

/// A named, immutable pattern
#[derive(Debug)]
pub struct Entry {
    pub name: &'static str,
    pub description: &'static str,
    pub pattern: &'static Pattern,
}

/// Registry of named patterns, in insertion order
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    fn build() -> Self {
        Self {
            entries: vec![
                entry("glider", "Moves diagonally (period 4)", &GLIDER_PATTERN),
                entry("blinker", "Oscillator (period 2)", &BLINKER_PATTERN),
                entry("block", "Still life", &BLOCK_PATTERN),
                entry("toad", "Oscillator (period 2)", &TOAD_PATTERN),
                entry("beacon", "Oscillator (period 2)", &BEACON_PATTERN),
                entry("lwss", "Lightweight spaceship (period 4)", &LWSS_PATTERN),
                entry("glider_gun", "Gosper glider gun (period 30)", &GLIDER_GUN_PATTERN),
            ],
        }
    }

    /// Look up a pattern by name
    pub fn get(&self, name: &str) -> Option<&'static Pattern> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.pattern)
    }

    /// Names of every pattern
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// All entries
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

fn entry(name: &'static str, description: &'static str, pattern: &'static Pattern) -> Entry {
    Entry { name, description, pattern }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// The shared pattern catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Glider from the catalog
pub fn glider() -> &'static Pattern {
    &GLIDER_PATTERN
}

/// Blinker from the catalog
pub fn blinker() -> &'static Pattern {
    &BLINKER_PATTERN
}

/// Gosper glider gun from the catalog
pub fn glider_gun() -> &'static Pattern {
    &GLIDER_GUN_PATTERN
}
