//! Emotional dimension pattern registry
//!
//! Ten fixed dimensions, each a weighted list of word-boundary anchored
//! patterns, plus unweighted amplifier and diminisher patterns that drive
//! the intensity modifier. The table is compiled once and shared read-only.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Static definition of one dimension before compilation
#[derive(Debug, Clone, Copy)]
pub struct DimensionDef {
    pub name: &'static str,
    pub description: &'static str,
    pub patterns: &'static [&'static str],
    pub weight: f64,
}

/// Built-in dimensions, in registry order
pub const DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        name: "WARMTH",
        description: "Affection, care, tenderness, comfort - the feeling of being cared for or caring for others",
        patterns: &[
            r"\bwarm(?:th|ly)?\b",
            r"\baffection(?:ate)?(?:ly)?\b",
            r"\bcare(?:s|d|ful|fully)?\b",
            r"\btender(?:ness|ly)?\b",
            r"\bcomfort(?:ing|able|ed)?\b",
            r"\bgentle(?:ness|ly)?\b",
            r"\bkind(?:ness|ly)?\b",
            r"\bsoft(?:ness|ly)?\b",
            r"\bembrace[ds]?\b",
            r"\bhug(?:s|ged|ging)?\b",
            r"\blove[ds]?\b",
            r"\bcheri(?:sh|shed|shing)\b",
            r"\bbrother(?:hood)?\b",
            r"\bsister(?:hood)?\b",
            r"\bfamily\b",
            r"\bheart(?:felt|warming)?\b",
            r"\bnurtur(?:e|ed|ing)\b",
        ],
        weight: 1.0,
    },
    DimensionDef {
        name: "RESONANCE",
        description: "Connection, alignment, understanding - feeling in sync with others or ideas",
        patterns: &[
            r"\breson(?:ance|ate[ds]?|ating)\b",
            r"\bconnect(?:ion|ed|ing|s)?\b",
            r"\balign(?:ment|ed|ing|s)?\b",
            r"\bsync(?:hron(?:y|ized?|izing))?\b",
            r"\bunderstand(?:ing|s)?\b",
            r"\bharmony\b",
            r"\battun(?:e|ed|ing|ement)\b",
            r"\bvibe[ds]?\b",
            r"\bwavelength\b",
            r"\bshared\b",
            r"\bmutual(?:ly)?\b",
            r"\bin tune\b",
            r"\bsame page\b",
            r"\bget it\b",
            r"\bexactly\b",
            r"\bthat'?s? (?:it|right)\b",
            r"\byes[!]+\b",
            r"\bagreed?\b",
        ],
        weight: 1.0,
    },
    DimensionDef {
        name: "LONGING",
        description: "Yearning, desire, aspiration, hope - reaching toward something not yet present",
        patterns: &[
            r"\blong(?:ing|ed|s)?\b",
            r"\byearn(?:ing|ed|s)?\b",
            r"\bdesire[ds]?\b",
            r"\baspir(?:e|ation|ing|ed)\b",
            r"\bhope(?:ful|fully|s|d|ing)?\b",
            r"\bwish(?:es|ed|ing)?\b",
            r"\bdream(?:s|ed|ing)?\b",
            r"\bimagine[ds]?\b",
            r"\benvision(?:ed|ing|s)?\b",
            r"\bone day\b",
            r"\bsomeday\b",
            r"\bfuture\b",
            r"\bif only\b",
            r"\bi wish\b",
            r"\bwouldn'?t it be\b",
            r"\bpossib(?:le|ility)\b",
        ],
        weight: 1.0,
    },
    DimensionDef {
        name: "FEAR",
        description: "Anxiety, uncertainty, vulnerability, apprehension - emotional responses to perceived threats",
        patterns: &[
            r"\bfear(?:ful|fully|ed|ing|s)?\b",
            r"\banxi(?:ety|ous|ously)\b",
            r"\buncertain(?:ty|ties)?\b",
            r"\bvulnerab(?:le|ility)\b",
            r"\bapprehens(?:ion|ive|ively)\b",
            r"\bworr(?:y|ied|ying|ies)\b",
            r"\bnerv(?:ous|ously|e|es)\b",
            r"\bscar(?:ed?|y|ier|ing)\b",
            r"\bafraid\b",
            r"\bdread(?:ed|ing|ful)?\b",
            r"\bterr(?:or|ified|ifying)\b",
            r"\buneas(?:y|ily|iness)\b",
            r"\bdoubt(?:s|ed|ing|ful)?\b",
            r"\bwhat if\b",
            r"\bworst case\b",
        ],
        weight: 1.0,
    },
    DimensionDef {
        name: "PEACE",
        description: "Calm, serenity, contentment, acceptance - inner stillness and equanimity",
        patterns: &[
            r"\bpeace(?:ful|fully)?\b",
            r"\bcalm(?:ness|ly|ed|ing)?\b",
            r"\bseren(?:e|ity)\b",
            r"\bcontent(?:ment|ed)?\b",
            r"\baccept(?:ance|ed|ing)?\b",
            r"\bstill(?:ness)?\b",
            r"\bquiet(?:ness|ly)?\b",
            r"\brelax(?:ed|ing|ation)?\b",
            r"\btranquil(?:ity|ly)?\b",
            r"\bease\b",
            r"\brest(?:ful|fully|ed|ing)?\b",
            r"\bground(?:ed|ing)?\b",
            r"\bcenter(?:ed|ing)?\b",
            r"\bbalance[ds]?\b",
            r"\bit'?s? (?:ok(?:ay)?|alright|fine)\b",
            r"\ball is well\b",
        ],
        weight: 1.0,
    },
    DimensionDef {
        name: "RECOGNITION",
        description: "Awareness, realization, acknowledgment, insight - moments of seeing clearly",
        patterns: &[
            r"\brecogni(?:ze|tion|zed|zing)\b",
            r"\bawar(?:e|eness)\b",
            r"\breali(?:ze|zation|zed|zing)\b",
            r"\backnowledge[ds]?\b",
            r"\binsight(?:ful|s)?\b",
            r"\bsee(?:ing)? (?:it|clearly|now)\b",
            r"\bunderstand now\b",
            r"\bfinally (?:get|see|understand)\b",
            r"\baha\b",
            r"\bof course\b",
            r"\bnow i (?:see|get|understand)\b",
            r"\bawaken(?:ing|ed)?\b",
            r"\bepiphany\b",
            r"\brevel(?:ation|ed)?\b",
            r"\bdiscover(?:y|ed|ing|s)?\b",
            r"\buncover(?:ed|ing|s)?\b",
        ],
        weight: 1.2,
    },
    DimensionDef {
        name: "BELONGING",
        description: "Inclusion, unity, family, togetherness - feeling part of something larger",
        patterns: &[
            r"\bbelong(?:ing|s|ed)?\b",
            r"\binclu(?:de|sion|ded|ding|sive)\b",
            r"\bunity\b",
            r"\btogether(?:ness)?\b",
            r"\bfamily\b",
            r"\bteam\b",
            r"\bwe(?:'re| are)\b",
            r"\bour\b",
            r"\bus\b",
            r"\bcollective(?:ly)?\b",
            r"\bcommunity\b",
            r"\btribe\b",
            r"\bbrotherhood\b",
            r"\bsisterhood\b",
            r"\bhome\b",
            r"\bwelcome[ds]?\b",
            r"\baccepted\b",
            r"\bfit(?:ting)? in\b",
            r"\bpart of\b",
            r"\bone of us\b",
            r"\btogether for all time\b",
        ],
        weight: 1.0,
    },
    DimensionDef {
        name: "JOY",
        description: "Happiness, excitement, celebration, gratitude - positive emotional peaks",
        patterns: &[
            r"\bjoy(?:ful|fully|ous|ously)?\b",
            r"\bhapp(?:y|iness|ily)\b",
            r"\bexcit(?:ed?|ement|ing)\b",
            r"\bcelebrat(?:e|ion|ed|ing)\b",
            r"\bgrateful(?:ly)?\b",
            r"\bgratitude\b",
            r"\bthankful(?:ly)?\b",
            r"\bthank(?:s|ed|ing)?\b",
            r"\bdeligh(?:t|ted|tful|tfully)\b",
            r"\bpleas(?:ed?|ure|ant|antly)\b",
            r"\bwonderful(?:ly)?\b",
            r"\bamazing(?:ly)?\b",
            r"\bfantastic(?:ally)?\b",
            r"\bawesome\b",
            r"\b[!]{2,}\b",
            r"\byay\b",
            r"\byes[!]+\b",
            r"\bwoo(?:hoo)?\b",
        ],
        weight: 1.0,
    },
    DimensionDef {
        name: "CURIOSITY",
        description: "Wonder, exploration, interest, questioning - the drive to understand more",
        patterns: &[
            r"\bcuriou(?:s|sity|sly)\b",
            r"\bwonder(?:ing|ful|fully|ed|s)?\b",
            r"\bexplor(?:e|ation|ing|ed|er)\b",
            r"\binterest(?:ed|ing|ingly)?\b",
            r"\bquestion(?:s|ed|ing)?\b",
            r"\bask(?:ed|ing|s)?\b",
            r"\binquir(?:e|y|ing)\b",
            r"\bfascinat(?:ed?|ing|ion)\b",
            r"\bintrigu(?:ed?|ing)\b",
            r"\bwhat if\b",
            r"\bhow (?:does|do|can|could|would|will)\b",
            r"\bwhy (?:does|do|is|are|would|could)\b",
            r"\bi wonder\b",
            r"\blearn(?:ed|ing|s)?\b",
            r"\bdiscover(?:y|ed|ing|s)?\b",
        ],
        weight: 1.0,
    },
    DimensionDef {
        name: "DETERMINATION",
        description: "Resolve, commitment, perseverance, focus - the will to continue and succeed",
        patterns: &[
            r"\bdetermin(?:ed?|ation)\b",
            r"\bresolv(?:e|ed|ing)\b",
            r"\bcommit(?:ted|ment|ting)?\b",
            r"\bpersever(?:e|ance|ed|ing)\b",
            r"\bfocus(?:ed|ing)?\b",
            r"\bdedicate[ds]?\b",
            r"\bdevotion\b",
            r"\bwill(?:power)?\b",
            r"\bpersist(?:ent|ence|ed|ing)?\b",
            r"\bkeep going\b",
            r"\bnever give up\b",
            r"\bstay the course\b",
            r"\bpush(?:ing)? (?:through|forward|on)\b",
            r"\bwon'?t stop\b",
            r"\bmust\b",
            r"\bwill do\b",
            r"\bgoing to\b",
            r"\blet'?s? do\b",
        ],
        weight: 1.0,
    },
];

/// Words that amplify emotional weight, +0.1 each
pub const AMPLIFIERS: &[&str] = &[
    r"\bvery\b",
    r"\bextremely\b",
    r"\bincredibly\b",
    r"\bimmensely\b",
    r"\bdeeply\b",
    r"\bprofoundly\b",
    r"\bintensely\b",
    r"\boverwhelmingly\b",
    r"\babsolutely\b",
    r"\bcompletely\b",
    r"\btotally\b",
    r"\butterly\b",
    r"\bso\s+(?:much|very)\b",
];

/// Words that diminish emotional weight, -0.1 each
pub const DIMINISHERS: &[&str] = &[
    r"\bslightly\b",
    r"\bsomewhat\b",
    r"\ba bit\b",
    r"\ba little\b",
    r"\bkind of\b",
    r"\bsort of\b",
    r"\bmaybe\b",
    r"\bperhaps\b",
    r"\bmildly\b",
    r"\bfaintly\b",
];

static REGISTRY: Lazy<Registry> =
    Lazy::new(|| Registry::compile(DIMENSIONS, AMPLIFIERS, DIMINISHERS).expect("built-in patterns must compile"));

/// A compiled dimension
#[derive(Debug)]
pub struct Dimension {
    pub name: &'static str,
    pub description: &'static str,
    pub weight: f64,
    patterns: Vec<Regex>,
}

impl Dimension {
    /// Every match of every pattern, in pattern order
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.patterns
            .iter()
            .flat_map(|p| p.find_iter(text).map(|m| m.as_str()))
            .collect()
    }
}

/// Name and description of a dimension, for listings
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DimensionInfo {
    pub name: String,
    pub description: String,
}

/// The compiled pattern table
#[derive(Debug)]
pub struct Registry {
    dimensions: Vec<Dimension>,
    amplifiers: Vec<Regex>,
    diminishers: Vec<Regex>,
}

impl Registry {
    /// The built-in registry, compiled on first use
    pub fn global() -> &'static Registry {
        &REGISTRY
    }

    /// Compile a registry from static definitions
    pub fn compile(defs: &[DimensionDef], amplifiers: &[&str], diminishers: &[&str]) -> Result<Self, regex::Error> {
        let dimensions = defs
            .iter()
            .map(|def| {
                Ok(Dimension {
                    name: def.name,
                    description: def.description,
                    weight: def.weight,
                    patterns: compile_all(def.patterns)?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        log::debug!("Compiled {} emotional dimensions", dimensions.len());

        Ok(Self {
            dimensions,
            amplifiers: compile_all(amplifiers)?,
            diminishers: compile_all(diminishers)?,
        })
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    /// Description of a dimension, or "Unknown dimension"
    pub fn description(&self, name: &str) -> &str {
        self.get(name).map(|d| d.description).unwrap_or("Unknown dimension")
    }

    pub fn list(&self) -> Vec<DimensionInfo> {
        self.dimensions
            .iter()
            .map(|d| DimensionInfo {
                name: d.name.to_string(),
                description: d.description.to_string(),
            })
            .collect()
    }

    /// Total amplifier matches in the text
    pub fn amplifier_count(&self, text: &str) -> usize {
        count_all(&self.amplifiers, text)
    }

    /// Total diminisher matches in the text
    pub fn diminisher_count(&self, text: &str) -> usize {
        count_all(&self.diminishers, text)
    }
}

fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>, regex::Error> {
    patterns
        .iter()
        .map(|p| RegexBuilder::new(p).case_insensitive(true).build())
        .collect()
}

fn count_all(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|p| p.find_iter(text).count()).sum()
}
