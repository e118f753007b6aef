//! Distinct-value listings used to populate filter controls, plus the
//! electron-configuration reader.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::catalog::{
    Block, Category, ClassLevel, Difficulty, Element, ExamType, Level, PhysicalState, Question,
    Reaction, ReactionCategory,
};

/// Sorted distinct keys over `records`.
pub fn distinct_by<T, K, F>(records: &[T], key: F) -> Vec<K>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    records
        .iter()
        .map(key)
        .collect::<BTreeSet<K>>()
        .into_iter()
        .collect()
}

/// Like [`distinct_by`] for fields that hold several values per record.
pub fn distinct_flat_by<T, K, I, F>(records: &[T], keys: F) -> Vec<K>
where
    K: Ord,
    I: IntoIterator<Item = K>,
    F: Fn(&T) -> I,
{
    records
        .iter()
        .flat_map(keys)
        .collect::<BTreeSet<K>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementFacets {
    pub categories: Vec<Category>,
    pub blocks: Vec<Block>,
    pub states: Vec<PhysicalState>,
    pub periods: Vec<u8>,
    pub groups: Vec<u8>,
    pub levels: Vec<Level>,
}

impl ElementFacets {
    pub fn of(elements: &[Element]) -> Self {
        ElementFacets {
            categories: distinct_by(elements, |e| e.category),
            blocks: distinct_by(elements, |e| e.block),
            states: distinct_by(elements, |e| e.state),
            periods: distinct_by(elements, |e| e.period),
            groups: distinct_by(elements, |e| e.group),
            levels: distinct_flat_by(elements, |e| e.levels.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactionFacets {
    pub categories: Vec<ReactionCategory>,
    pub difficulties: Vec<Difficulty>,
    pub classes: Vec<ClassLevel>,
    pub chapters: Vec<String>,
    pub types: Vec<String>,
}

impl ReactionFacets {
    pub fn of(reactions: &[Reaction]) -> Self {
        ReactionFacets {
            categories: distinct_by(reactions, |r| r.category),
            difficulties: distinct_by(reactions, |r| r.difficulty),
            classes: distinct_by(reactions, |r| r.class),
            chapters: distinct_by(reactions, |r| r.chapter.clone()),
            types: distinct_by(reactions, |r| r.kind.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionFacets {
    pub difficulties: Vec<Difficulty>,
    pub exams: Vec<ExamType>,
    pub topics: Vec<String>,
    pub chapters: Vec<String>,
}

impl QuestionFacets {
    pub fn of(questions: &[Question]) -> Self {
        QuestionFacets {
            difficulties: distinct_by(questions, |q| q.difficulty),
            exams: distinct_by(questions, |q| q.exam),
            topics: distinct_by(questions, |q| q.topic.clone()),
            chapters: distinct_by(questions, |q| q.chapter.clone()),
        }
    }
}

/// One `nℓ^k` term of a configuration, e.g. `3d10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subshell {
    pub n: u32,
    pub l: char,
    pub electrons: u32,
}

impl Subshell {
    pub fn capacity(self) -> u32 {
        match self.l {
            's' => 2,
            'p' => 6,
            'd' => 10,
            _ => 14,
        }
    }
}

/// A configuration with any noble-gas core expanded into its subshells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectronConfiguration {
    pub subshells: Vec<Subshell>,
}

static TERM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\[(He|Ne|Ar|Kr|Xe|Rn)\]|([1-7])([spdf])(\d{1,2}))").expect("static regex")
});

const NOBLE_CORES: [(&str, &str); 6] = [
    ("He", "1s2"),
    ("Ne", "[He] 2s2 2p6"),
    ("Ar", "[Ne] 3s2 3p6"),
    ("Kr", "[Ar] 3d10 4s2 4p6"),
    ("Xe", "[Kr] 4d10 5s2 5p6"),
    ("Rn", "[Xe] 4f14 5d10 6s2 6p6"),
];

impl ElectronConfiguration {
    /// Reads strings such as `[Ar] 3d6 4s2` or `1s2 2s2 2p6`. Returns `None`
    /// for anything that is not a whitespace-separated run of terms, or for
    /// a subshell holding more electrons than it can.
    pub fn parse(text: &str) -> Option<Self> {
        let mut subshells = Vec::new();
        let mut rest = text.trim();
        if rest.is_empty() {
            return None;
        }
        while !rest.is_empty() {
            let caps = TERM_RE.captures(rest)?;
            if let Some(core) = caps.get(1) {
                let (_, expansion) = NOBLE_CORES.iter().find(|(sym, _)| *sym == core.as_str())?;
                subshells.extend(Self::parse(expansion)?.subshells);
            } else {
                let n = caps[2].parse().ok()?;
                let l = caps[3].chars().next()?;
                let electrons = caps[4].parse().ok()?;
                let shell = Subshell { n, l, electrons };
                if electrons == 0 || electrons > shell.capacity() {
                    return None;
                }
                subshells.push(shell);
            }
            rest = rest[caps[0].len()..].trim_start();
        }
        Some(ElectronConfiguration { subshells })
    }

    pub fn electron_count(&self) -> u32 {
        self.subshells.iter().map(|s| s.electrons).sum()
    }

    /// Highest principal quantum number that holds electrons.
    pub fn outer_shell(&self) -> u32 {
        self.subshells.iter().map(|s| s.n).max().unwrap_or(0)
    }

    /// Electrons in the outermost shell.
    pub fn valence_electrons(&self) -> u32 {
        let outer = self.outer_shell();
        self.subshells
            .iter()
            .filter(|s| s.n == outer)
            .map(|s| s.electrons)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_distinct_is_sorted_and_deduplicated() {
        let values = [3, 1, 3, 2, 1];
        assert_eq!(distinct_by(&values, |v| *v), vec![1, 2, 3]);
        let words = ["b", "a", "b"];
        assert_eq!(distinct_by(&words, |w| w.to_string()), vec!["a", "b"]);
    }

    #[test]
    fn test_element_facets() {
        let facets = ElementFacets::of(&Catalog::builtin().elements);
        assert_eq!(facets.categories.len(), 10);
        assert_eq!(facets.blocks, vec![Block::S, Block::P, Block::D, Block::F]);
        assert_eq!(facets.periods, (1..=7).collect::<Vec<u8>>());
        assert_eq!(facets.groups, (1..=18).collect::<Vec<u8>>());
        assert!(facets.states.contains(&PhysicalState::Liquid));
        assert_eq!(facets.levels.first(), Some(&Level::Class11));
    }

    #[test]
    fn test_reaction_facets_are_sorted_strings() {
        let facets = ReactionFacets::of(&Catalog::builtin().reactions);
        let mut sorted = facets.chapters.clone();
        sorted.sort();
        assert_eq!(facets.chapters, sorted);
        assert_eq!(
            facets.categories,
            vec![ReactionCategory::Organic, ReactionCategory::Inorganic, ReactionCategory::Physical]
        );
    }

    #[test]
    fn test_question_facets() {
        let facets = QuestionFacets::of(&Catalog::builtin().questions);
        assert_eq!(facets.exams, vec![ExamType::Cbse, ExamType::Jee, ExamType::Neet]);
        assert!(!facets.topics.is_empty());
    }

    #[test]
    fn test_parse_expands_noble_core() {
        let fe = ElectronConfiguration::parse("[Ar] 3d6 4s2").unwrap();
        assert_eq!(fe.electron_count(), 26);
        assert_eq!(fe.outer_shell(), 4);
        assert_eq!(fe.valence_electrons(), 2);

        let og = ElectronConfiguration::parse("[Rn] 5f14 6d10 7s2 7p6").unwrap();
        assert_eq!(og.electron_count(), 118);
        assert_eq!(og.valence_electrons(), 8);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ElectronConfiguration::parse("").is_none());
        assert!(ElectronConfiguration::parse("1s3").is_none());
        assert!(ElectronConfiguration::parse("[Og] 8s1").is_none());
        assert!(ElectronConfiguration::parse("1s2 banana").is_none());
    }

    #[test]
    fn test_every_builtin_configuration_matches_atomic_number() {
        for e in &Catalog::builtin().elements {
            let config = ElectronConfiguration::parse(&e.electron_configuration)
                .unwrap_or_else(|| panic!("{} unreadable", e.symbol));
            assert_eq!(config.electron_count(), u32::from(e.atomic_number), "{}", e.symbol);
        }
    }
}
