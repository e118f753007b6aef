//! Free-text search plus structured filters over catalog slices.
//!
//! Results always keep catalog order; nothing is ranked.

use serde::Serialize;
use std::str::FromStr;

use crate::catalog::{
    Block, Category, ClassLevel, Difficulty, Element, ExamType, Level, PhysicalState, Question,
    Reaction, ReactionCategory,
};
use crate::error::SelectionError;

/// One filter field: unconstrained, or pinned to a single value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    /// Any-of semantics for fields holding several values.
    pub fn admits_any<'v, I>(&self, values: I) -> bool
    where
        T: 'v,
        I: IntoIterator<Item = &'v T>,
    {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => values.into_iter().any(|v| v == wanted),
        }
    }
}

impl<T: FromStr<Err = SelectionError>> Selection<T> {
    /// `None`, an empty string and `"all"` (any case) mean no constraint.
    pub fn from_query(value: Option<&str>) -> Result<Self, SelectionError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Selection::All),
            Some(v) if v.eq_ignore_ascii_case("all") => Ok(Selection::All),
            Some(v) => v.parse().map(Selection::Only),
        }
    }
}

impl Selection<u8> {
    pub fn number_from_query(field: &'static str, value: Option<&str>) -> Result<Self, SelectionError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Selection::All),
            Some(v) if v.eq_ignore_ascii_case("all") => Ok(Selection::All),
            Some(v) => v
                .parse()
                .map(Selection::Only)
                .map_err(|_| SelectionError::new(field, v)),
        }
    }
}

impl Selection<String> {
    /// Free-form string fields (chapters, types) compare case-insensitively.
    pub fn text_from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Selection::All,
            Some(v) if v.eq_ignore_ascii_case("all") => Selection::All,
            Some(v) => Selection::Only(v.to_string()),
        }
    }

    fn admits_text(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted.eq_ignore_ascii_case(value),
        }
    }
}

/// A record that can be matched against a free-text query.
pub trait Searchable {
    /// Visits each searchable field until `visit` returns true.
    fn any_field(&self, visit: &mut dyn FnMut(&str) -> bool) -> bool;

    /// Case-insensitive substring match on any searchable field. `needle`
    /// must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.any_field(&mut |field| field.to_lowercase().contains(needle))
    }

    fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty() || self.matches_lowercase(&needle)
    }
}

impl Searchable for Element {
    fn any_field(&self, visit: &mut dyn FnMut(&str) -> bool) -> bool {
        visit(&self.name)
            || visit(&self.symbol)
            || visit(self.category.as_str())
            || self.uses.iter().any(|u| visit(u))
            || self.importance.as_deref().is_some_and(|n| visit(n))
    }
}

impl Searchable for Reaction {
    fn any_field(&self, visit: &mut dyn FnMut(&str) -> bool) -> bool {
        visit(&self.title)
            || visit(&self.description)
            || visit(&self.equation)
            || visit(&self.chapter)
            || visit(&self.kind)
    }
}

impl Searchable for Question {
    fn any_field(&self, visit: &mut dyn FnMut(&str) -> bool) -> bool {
        visit(&self.prompt)
            || visit(&self.topic)
            || visit(&self.chapter)
            || visit(&self.explanation)
    }
}

/// Structured constraints for one record type.
pub trait RecordFilter<T> {
    fn admits(&self, record: &T) -> bool;

    /// True when every field is `All`.
    fn is_unconstrained(&self) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementFilter {
    pub category: Selection<Category>,
    pub block: Selection<Block>,
    pub period: Selection<u8>,
    pub group: Selection<u8>,
    pub state: Selection<PhysicalState>,
    pub level: Selection<Level>,
}

impl RecordFilter<Element> for ElementFilter {
    fn admits(&self, e: &Element) -> bool {
        self.category.admits(&e.category)
            && self.block.admits(&e.block)
            && self.period.admits(&e.period)
            && self.group.admits(&e.group)
            && self.state.admits(&e.state)
            && self.level.admits_any(&e.levels)
    }

    fn is_unconstrained(&self) -> bool {
        self.category.is_all()
            && self.block.is_all()
            && self.period.is_all()
            && self.group.is_all()
            && self.state.is_all()
            && self.level.is_all()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionFilter {
    pub category: Selection<ReactionCategory>,
    pub difficulty: Selection<Difficulty>,
    pub class: Selection<ClassLevel>,
    pub chapter: Selection<String>,
    pub kind: Selection<String>,
}

impl RecordFilter<Reaction> for ReactionFilter {
    fn admits(&self, r: &Reaction) -> bool {
        self.category.admits(&r.category)
            && self.difficulty.admits(&r.difficulty)
            && self.class.admits(&r.class)
            && self.chapter.admits_text(&r.chapter)
            && self.kind.admits_text(&r.kind)
    }

    fn is_unconstrained(&self) -> bool {
        self.category.is_all()
            && self.difficulty.is_all()
            && self.class.is_all()
            && self.chapter.is_all()
            && self.kind.is_all()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub difficulty: Selection<Difficulty>,
    pub exam: Selection<ExamType>,
    pub topic: Selection<String>,
    pub chapter: Selection<String>,
}

impl RecordFilter<Question> for QuestionFilter {
    fn admits(&self, q: &Question) -> bool {
        self.difficulty.admits(&q.difficulty)
            && self.exam.admits(&q.exam)
            && self.topic.admits_text(&q.topic)
            && self.chapter.admits_text(&q.chapter)
    }

    fn is_unconstrained(&self) -> bool {
        self.difficulty.is_all()
            && self.exam.is_all()
            && self.topic.is_all()
            && self.chapter.is_all()
    }
}

/// How the text query and the structured filter combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Combine {
    /// Both must hold.
    #[default]
    All,
    /// Either active clause is enough. With no active clause every record
    /// passes.
    Any,
}

impl Combine {
    pub fn from_query(value: Option<&str>) -> Self {
        match value.unwrap_or("all").to_lowercase().as_str() {
            "any" | "or" => Combine::Any,
            _ => Combine::All,
        }
    }
}

/// Records matching `query` and admitted by `filter`, in catalog order.
pub fn search<'a, T, F>(records: &'a [T], query: &str, filter: &F) -> Vec<&'a T>
where
    T: Searchable,
    F: RecordFilter<T>,
{
    search_with(records, query, filter, Combine::All)
}

pub fn search_with<'a, T, F>(records: &'a [T], query: &str, filter: &F, combine: Combine) -> Vec<&'a T>
where
    T: Searchable,
    F: RecordFilter<T>,
{
    let needle = query.trim().to_lowercase();
    let text_active = !needle.is_empty();
    let filter_active = !filter.is_unconstrained();

    records
        .iter()
        .filter(|record| {
            let text = || record.matches_lowercase(&needle);
            match combine {
                Combine::All => (!text_active || text()) && filter.admits(record),
                Combine::Any => match (text_active, filter_active) {
                    (false, false) => true,
                    (true, false) => text(),
                    (false, true) => filter.admits(record),
                    (true, true) => text() || filter.admits(record),
                },
            }
        })
        .collect()
}

pub const MAX_PER_PAGE: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub pages: usize,
    pub items: Vec<T>,
}

/// Slices one 1-based page out of `items`. Pages past the end come back
/// empty with the real totals.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.clamp(1, MAX_PER_PAGE);
    let page = page.max(1);
    let total = items.len();
    let pages = total.div_ceil(per_page);
    let start = (page - 1).saturating_mul(per_page).min(total);
    let end = (start + per_page).min(total);
    Page {
        page,
        per_page,
        total,
        pages,
        items: items[start..end].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn symbols(found: &[&Element]) -> Vec<String> {
        found.iter().map(|e| e.symbol.clone()).collect()
    }

    #[test]
    fn test_empty_query_and_no_filter_returns_everything_in_order() {
        let elements = &Catalog::builtin().elements;
        let found = search(elements, "", &ElementFilter::default());
        assert_eq!(found.len(), elements.len());
        assert!(found.iter().zip(elements.iter()).all(|(a, b)| std::ptr::eq(*a, b)));

        let reactions = &Catalog::builtin().reactions;
        assert_eq!(search(reactions, "   ", &ReactionFilter::default()).len(), reactions.len());
    }

    #[test]
    fn test_noble_gases() {
        let filter = ElementFilter {
            category: Selection::Only(Category::NobleGas),
            ..Default::default()
        };
        let found = search(&Catalog::builtin().elements, "", &filter);
        assert_eq!(symbols(&found), ["He", "Ne", "Ar", "Kr", "Xe", "Rn", "Og"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let elements = &Catalog::builtin().elements;
        let filter = ElementFilter::default();
        let upper = search(elements, "HYDROGEN", &filter);
        let lower = search(elements, "hydrogen", &filter);
        let title = search(elements, "Hydrogen", &filter);
        assert_eq!(upper, lower);
        assert_eq!(lower, title);
        assert_eq!(upper.first().map(|e| e.atomic_number), Some(1));
    }

    #[test]
    fn test_search_reaches_uses_and_category() {
        let elements = &Catalog::builtin().elements;
        let filter = ElementFilter::default();
        let fertiliser = search(elements, "fertiliser", &filter);
        assert!(symbols(&fertiliser).contains(&"N".to_string()));

        let halogens = search(elements, "halogen", &filter);
        assert!(symbols(&halogens).starts_with(&["F".to_string(), "Cl".to_string()]));
    }

    #[test]
    fn test_search_is_idempotent() {
        let elements = &Catalog::builtin().elements;
        let filter = ElementFilter {
            block: Selection::Only(Block::D),
            ..Default::default()
        };
        assert_eq!(search(elements, "metal", &filter), search(elements, "metal", &filter));
    }

    #[test]
    fn test_adding_a_constraint_never_grows_the_result() {
        let elements = &Catalog::builtin().elements;
        let base = ElementFilter::default();
        let baseline = search(elements, "m", &base).len();

        let narrowed = [
            ElementFilter { category: Selection::Only(Category::TransitionMetal), ..base.clone() },
            ElementFilter { block: Selection::Only(Block::P), ..base.clone() },
            ElementFilter { period: Selection::Only(4), ..base.clone() },
            ElementFilter { group: Selection::Only(2), ..base.clone() },
            ElementFilter { state: Selection::Only(PhysicalState::Gas), ..base.clone() },
            ElementFilter { level: Selection::Only(Level::Neet), ..base.clone() },
        ];
        for filter in &narrowed {
            assert!(search(elements, "m", filter).len() <= baseline, "{filter:?}");
        }

        let both = ElementFilter {
            period: Selection::Only(4),
            block: Selection::Only(Block::D),
            ..base
        };
        let period_only = ElementFilter { period: Selection::Only(4), ..Default::default() };
        assert!(search(elements, "", &both).len() <= search(elements, "", &period_only).len());
    }

    #[test]
    fn test_levels_use_any_of() {
        let elements = &Catalog::builtin().elements;
        let filter = ElementFilter {
            level: Selection::Only(Level::Class12),
            ..Default::default()
        };
        let found = search(elements, "", &filter);
        assert!(!found.is_empty());
        assert!(found.iter().all(|e| e.levels.contains(&Level::Class12)));
        // iron is studied in both classes
        assert!(found.iter().any(|e| e.symbol == "Fe"));
    }

    #[test]
    fn test_haber_search() {
        let reactions = &Catalog::builtin().reactions;
        let found = search(reactions, "haber", &ReactionFilter::default());
        assert!(found.iter().any(|r| r.id == "haber-process"));
        assert!(found.iter().all(|r| r.category != ReactionCategory::Organic));
    }

    #[test]
    fn test_reaction_filter_on_text_fields() {
        let reactions = &Catalog::builtin().reactions;
        let filter = ReactionFilter {
            chapter: Selection::text_from_query(Some("HYDROCARBONS")),
            ..Default::default()
        };
        let found = search(reactions, "", &filter);
        assert!(!found.is_empty());
        assert!(found.iter().all(|r| r.chapter == "Hydrocarbons"));
    }

    #[test]
    fn test_question_filter() {
        let questions = &Catalog::builtin().questions;
        let filter = QuestionFilter {
            exam: Selection::Only(ExamType::Neet),
            ..Default::default()
        };
        let found = search(questions, "", &filter);
        assert!(!found.is_empty());
        assert!(found.iter().all(|q| q.exam == ExamType::Neet));
    }

    #[test]
    fn test_combine_any() {
        let elements = &Catalog::builtin().elements;
        let filter = ElementFilter {
            category: Selection::Only(Category::NobleGas),
            ..Default::default()
        };
        let either = search_with(elements, "sodium", &filter, Combine::Any);
        assert!(either.iter().any(|e| e.symbol == "Na"));
        assert_eq!(either.iter().filter(|e| e.category == Category::NobleGas).count(), 7);
        assert!(either
            .iter()
            .all(|e| e.category == Category::NobleGas || e.matches_query("sodium")));

        let both = search_with(elements, "sodium", &filter, Combine::All);
        assert!(both.is_empty());

        let nothing_active = search_with(elements, "", &ElementFilter::default(), Combine::Any);
        assert_eq!(nothing_active.len(), elements.len());
    }

    #[test]
    fn test_selection_from_query() {
        assert_eq!(Selection::<Category>::from_query(None), Ok(Selection::All));
        assert_eq!(Selection::<Category>::from_query(Some("ALL")), Ok(Selection::All));
        assert_eq!(
            Selection::<Category>::from_query(Some("halogen")),
            Ok(Selection::Only(Category::Halogen))
        );
        assert!(Selection::<Block>::from_query(Some("q")).is_err());
        assert_eq!(Selection::<u8>::number_from_query("period", Some("3")), Ok(Selection::Only(3)));
        assert!(Selection::<u8>::number_from_query("period", Some("three")).is_err());
        assert_eq!(Combine::from_query(Some("ANY")), Combine::Any);
        assert_eq!(Combine::from_query(None), Combine::All);
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=45).collect();
        let first = paginate(&items, 1, 20);
        assert_eq!(first.items, (1..=20u32).collect::<Vec<_>>());
        assert_eq!(first.pages, 3);

        let last = paginate(&items, 3, 20);
        assert_eq!(last.items, (41..=45u32).collect::<Vec<_>>());

        let beyond = paginate(&items, 9, 20);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 45);

        let clamped = paginate(&items, 0, 0);
        assert_eq!(clamped.page, 1);
        assert_eq!(clamped.per_page, 1);
        assert_eq!(clamped.items, vec![1]);
    }
}
