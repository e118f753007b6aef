//! Record types for the reference catalogs and the `Catalog` bundle that
//! owns them. Records are built once and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::accessors::ElectronConfiguration;
use crate::error::{CatalogError, SelectionError};
use crate::layout::PeriodicGrid;

/// Lowercases and folds `-`/`_` into spaces so `noble-gas`, `Noble_Gas`
/// and `noble gas` all name the same value.
pub(crate) fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

macro_rules! labelled_enum {
    ($name:ident, $field:literal, { $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SelectionError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match normalize(value).as_str() {
                    $($label $(| $alias)* => Ok($name::$variant),)+
                    _ => Err(SelectionError::new($field, value)),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

labelled_enum!(Category, "category", {
    AlkaliMetal => "alkali metal",
    AlkalineEarthMetal => "alkaline earth metal",
    TransitionMetal => "transition metal",
    PostTransitionMetal => "post transition metal",
    Metalloid => "metalloid",
    Nonmetal => "nonmetal" | "reactive nonmetal",
    Halogen => "halogen",
    NobleGas => "noble gas",
    Lanthanide => "lanthanide",
    Actinide => "actinide",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    S,
    P,
    D,
    F,
}

labelled_enum!(Block, "block", {
    S => "s" | "s block",
    P => "p" | "p block",
    D => "d" | "d block",
    F => "f" | "f block",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalState {
    Solid,
    Liquid,
    Gas,
    Unknown,
}

labelled_enum!(PhysicalState, "state", {
    Solid => "solid",
    Liquid => "liquid",
    Gas => "gas",
    Unknown => "unknown",
});

/// Syllabus an element is studied under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    #[serde(rename = "class-11")]
    Class11,
    #[serde(rename = "class-12")]
    Class12,
    Jee,
    Neet,
}

labelled_enum!(Level, "level", {
    Class11 => "class 11" | "11",
    Class12 => "class 12" | "12",
    Jee => "jee",
    Neet => "neet",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    pub by: String,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
    pub category: Category,
    pub block: Block,
    pub period: u8,
    pub group: u8,
    pub state: PhysicalState,
    pub electron_configuration: String,
    #[serde(default)]
    pub melting_point: Option<f64>,
    #[serde(default)]
    pub boiling_point: Option<f64>,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub electronegativity: Option<f64>,
    #[serde(default)]
    pub uses: Vec<String>,
    #[serde(default)]
    pub fun_facts: Vec<String>,
    #[serde(default)]
    pub discovery: Option<Discovery>,
    #[serde(default)]
    pub levels: Vec<Level>,
    #[serde(default)]
    pub importance: Option<String>,
}

impl Element {
    pub fn is_lanthanide(&self) -> bool {
        (57..=71).contains(&self.atomic_number)
    }

    pub fn is_actinide(&self) -> bool {
        (89..=103).contains(&self.atomic_number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionCategory {
    Organic,
    Inorganic,
    Physical,
}

labelled_enum!(ReactionCategory, "category", {
    Organic => "organic",
    Inorganic => "inorganic",
    Physical => "physical",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

labelled_enum!(Difficulty, "difficulty", {
    Easy => "easy",
    Medium => "medium",
    Hard => "hard",
});

/// Which CBSE class a reaction is taught in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClassLevel {
    #[serde(rename = "11")]
    Eleven,
    #[serde(rename = "12")]
    Twelve,
    #[serde(rename = "both")]
    Both,
}

labelled_enum!(ClassLevel, "class", {
    Eleven => "11" | "class 11",
    Twelve => "12" | "class 12",
    Both => "both",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: String,
    pub title: String,
    pub category: ReactionCategory,
    pub equation: String,
    pub description: String,
    #[serde(default)]
    pub mechanism: Option<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub uses: Vec<String>,
    #[serde(default)]
    pub exceptions: Vec<String>,
    pub difficulty: Difficulty,
    pub class: ClassLevel,
    pub chapter: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExamType {
    Cbse,
    Jee,
    Neet,
}

labelled_enum!(ExamType, "exam", {
    Cbse => "cbse",
    Jee => "jee",
    Neet => "neet",
});

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub topic: String,
    pub chapter: String,
    pub exam: ExamType,
    /// Seconds allowed for this question.
    pub time_limit: u32,
    pub marks: u32,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<ContentSection>,
    /// Ids of sibling topics in the same path.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Estimated study time in minutes.
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub exam: ExamType,
    pub topics: Vec<Topic>,
}

impl LearningPath {
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }
}

/// Every record the application serves, in authoring order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub paths: Vec<LearningPath>,
}

impl Catalog {
    pub fn builtin() -> &'static Catalog {
        &crate::data::BUILTIN
    }

    pub fn element(&self, atomic_number: u8) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.atomic_number == atomic_number)
    }

    pub fn element_by_symbol(&self, symbol: &str) -> Option<&Element> {
        let symbol = symbol.trim();
        self.elements
            .iter()
            .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
    }

    pub fn reaction(&self, id: &str) -> Option<&Reaction> {
        self.reactions.iter().find(|r| r.id == id)
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn path(&self, id: &str) -> Option<&LearningPath> {
        self.paths.iter().find(|p| p.id == id)
    }

    /// Checks the authoring invariants the engine relies on and reports
    /// every violation at once.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut problems = Vec::new();

        let mut numbers = HashSet::new();
        for e in &self.elements {
            let z = e.atomic_number;
            if !numbers.insert(z) {
                problems.push(format!("duplicate atomic number {z}"));
            }
            if !(1..=118).contains(&z) {
                problems.push(format!("{}: atomic number {z} out of range", e.symbol));
            }
            if !(1..=7).contains(&e.period) {
                problems.push(format!("{}: period {} out of range", e.symbol, e.period));
            }
            if !(1..=18).contains(&e.group) {
                problems.push(format!("{}: group {} out of range", e.symbol, e.group));
            }
            match ElectronConfiguration::parse(&e.electron_configuration) {
                Some(config) if config.electron_count() == u32::from(z) => {}
                Some(config) => problems.push(format!(
                    "{}: configuration holds {} electrons, expected {z}",
                    e.symbol,
                    config.electron_count()
                )),
                None => problems.push(format!(
                    "{}: unreadable configuration `{}`",
                    e.symbol, e.electron_configuration
                )),
            }
        }
        for (row, col, overwritten) in PeriodicGrid::collisions(&self.elements) {
            problems.push(format!(
                "grid cell ({row}, {col}) shared by Z={} and Z={}",
                overwritten.0, overwritten.1
            ));
        }

        let mut reaction_ids = HashSet::new();
        for r in &self.reactions {
            if !reaction_ids.insert(r.id.as_str()) {
                problems.push(format!("duplicate reaction id {}", r.id));
            }
        }

        let mut question_ids = HashSet::new();
        for q in &self.questions {
            if !question_ids.insert(q.id.as_str()) {
                problems.push(format!("duplicate question id {}", q.id));
            }
            if q.options.len() != OPTIONS_PER_QUESTION {
                problems.push(format!("{}: {} options", q.id, q.options.len()));
            }
            if q.correct >= q.options.len() {
                problems.push(format!("{}: answer index {} out of range", q.id, q.correct));
            }
        }

        let mut path_ids = HashSet::new();
        for p in &self.paths {
            if !path_ids.insert(p.id.as_str()) {
                problems.push(format!("duplicate path id {}", p.id));
            }
            let topic_ids: HashSet<&str> = p.topics.iter().map(|t| t.id.as_str()).collect();
            if topic_ids.len() != p.topics.len() {
                problems.push(format!("{}: duplicate topic ids", p.id));
            }
            for t in &p.topics {
                for pre in &t.prerequisites {
                    if pre == &t.id || !topic_ids.contains(pre.as_str()) {
                        problems.push(format!(
                            "{}/{}: prerequisite `{pre}` is not a sibling topic",
                            p.id, t.id
                        ));
                    }
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Invalid(problems))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_labels_parse_loosely() {
        assert_eq!("Noble Gas".parse::<Category>(), Ok(Category::NobleGas));
        assert_eq!("noble-gas".parse::<Category>(), Ok(Category::NobleGas));
        assert_eq!("post-transition metal".parse::<Category>(), Ok(Category::PostTransitionMetal));
        assert_eq!("D".parse::<Block>(), Ok(Block::D));
        assert_eq!("class_12".parse::<Level>(), Ok(Level::Class12));
        assert_eq!("both".parse::<ClassLevel>(), Ok(ClassLevel::Both));
        assert_eq!("JEE".parse::<ExamType>(), Ok(ExamType::Jee));

        let err = "plasma".parse::<PhysicalState>().unwrap_err();
        assert_eq!(err.field, "state");
        assert_eq!(err.value, "plasma");
    }

    #[test]
    fn test_category_round_trips_through_label() {
        for &c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>(), Ok(c));
        }
        assert_eq!(Category::ALL.len(), 10);
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        if let Err(e) = catalog.validate() {
            panic!("{e}");
        }
        assert_eq!(catalog.elements.len(), 118);
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.element(26).map(|e| e.symbol.as_str()), Some("Fe"));
        assert_eq!(catalog.element_by_symbol("og").map(|e| e.atomic_number), Some(118));
        assert!(catalog.element(0).is_none());
        assert!(catalog.reaction("haber-process").is_some());
        assert!(catalog.reaction("missing").is_none());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let mut catalog = Catalog::builtin().clone();
        let mut dup = catalog.elements[0].clone();
        dup.electron_configuration = "1s2".to_string();
        catalog.elements.push(dup);
        catalog.questions[0].correct = 7;
        catalog.paths[0].topics[0].prerequisites.push("nowhere".to_string());

        match catalog.validate() {
            Err(CatalogError::Invalid(problems)) => {
                assert!(problems.iter().any(|p| p.contains("duplicate atomic number 1")));
                assert!(problems.iter().any(|p| p.contains("expected 1")));
                assert!(problems.iter().any(|p| p.contains("grid cell (0, 0)")));
                assert!(problems.iter().any(|p| p.contains("answer index 7")));
                assert!(problems.iter().any(|p| p.contains("`nowhere`")));
            }
            other => panic!("expected invalid catalog, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_json_shape() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(catalog.element(2).unwrap()).unwrap();
        assert_eq!(json["category"], "noble-gas");
        assert_eq!(json["block"], "s");
        assert_eq!(json["state"], "gas");

        let reaction = serde_json::to_value(catalog.reaction("haber-process").unwrap()).unwrap();
        assert_eq!(reaction["type"], "synthesis");
        assert_eq!(reaction["class"], "11");
    }
}
