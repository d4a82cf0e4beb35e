use serde::{Deserialize, Serialize};

// `disastrous` is not a substring of `disaster`, so it is listed on its own to
// make the `disastrous -> significant` fix reachable.
pub static SENSATIONAL: &[&str] = &[
    "shocking",
    "disaster",
    "crisis",
    "chaos",
    "exploded",
    "ruined",
    "destroyed",
    "nightmare",
    "catastrophe",
    "meltdown",
    "obliterated",
    "slammed",
    "disastrous",
];

pub static PARTISAN: &[&str] = &[
    "radical",
    "far-left",
    "far-right",
    "extremist",
    "agenda",
    "regime",
    "puppet",
    "dictator",
    "corrupt",
    "socialist",
    "fascist",
];

/// Reserved: matched and reported, not yet scored.
pub static HEDGING: &[&str] = &[
    "reportedly",
    "allegedly",
    "sources say",
    "rumored",
    "it is believed",
    "likely",
];

/// Reserved: matched and reported, not yet scored.
pub static OPINION: &[&str] = &[
    "obviously",
    "clearly",
    "unfortunately",
    "luckily",
    "shockingly",
    "predictably",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatches {
    pub sensational: Vec<String>,
    pub partisan: Vec<String>,
    pub hedging: Vec<String>,
    pub opinion: Vec<String>,
}

/// Substring containment against the lowercased text. Each keyword appears at
/// most once, in table order, however often it occurs.
pub fn match_patterns(text: &str) -> PatternMatches {
    let lowercase = text.to_lowercase();
    PatternMatches {
        sensational: matching(&lowercase, SENSATIONAL),
        partisan: matching(&lowercase, PARTISAN),
        hedging: matching(&lowercase, HEDGING),
        opinion: matching(&lowercase, OPINION),
    }
}

fn matching(lowercase: &str, table: &[&str]) -> Vec<String> {
    table
        .iter()
        .filter(|word| lowercase.contains(*word))
        .map(|word| word.to_string())
        .collect()
}
