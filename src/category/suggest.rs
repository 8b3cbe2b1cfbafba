use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;

use super::{
    keywords::{KeywordMapping, DEFAULT_SUGGESTIONS, KEYWORD_MAPPINGS},
    vocabulary::all_categories,
    Category,
};

/// Upper bound on the number of suggestions returned by default.
pub const MAX_SUGGESTIONS: usize = 11;

static DEFAULT_TABLE: Lazy<Arc<[CompiledMapping]>> = Lazy::new(|| compile(KEYWORD_MAPPINGS));

#[derive(Debug)]
struct CompiledKeyword {
    text: String,
    weight: usize,
}

#[derive(Debug)]
struct CompiledMapping {
    keywords: Vec<CompiledKeyword>,
    category: Category,
}

fn compile(mappings: &[KeywordMapping]) -> Arc<[CompiledMapping]> {
    mappings
        .iter()
        .map(|mapping| CompiledMapping {
            keywords: mapping
                .keywords
                .iter()
                .map(|keyword| {
                    let text = keyword.to_lowercase();
                    let weight = text.chars().count();
                    CompiledKeyword { text, weight }
                })
                .filter(|keyword| keyword.weight > 0)
                .collect(),
            category: mapping.category,
        })
        .collect()
}

/// A suggested category together with its accumulated keyword score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCategory {
    pub category: Category,
    pub score: usize,
}

/// Ranks categories for a free-text description by keyword matches.
///
/// Each keyword contained in the lowercased description adds its character
/// length to its category, so longer and more specific keywords outweigh
/// short generic ones. Categories without a match are never returned.
#[derive(Debug, Clone)]
pub struct CategorySuggester {
    table: Arc<[CompiledMapping]>,
    max_suggestions: usize,
}

impl Default for CategorySuggester {
    fn default() -> Self {
        Self::new(MAX_SUGGESTIONS)
    }
}

impl CategorySuggester {
    pub fn new(max_suggestions: usize) -> Self {
        Self {
            table: Arc::clone(&DEFAULT_TABLE),
            max_suggestions,
        }
    }

    /// Builds a suggester over a custom keyword table.
    pub fn with_table(mappings: &[KeywordMapping], max_suggestions: usize) -> Self {
        Self {
            table: compile(mappings),
            max_suggestions,
        }
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    /// Scores the description, highest score first.
    ///
    /// Ties keep the table order of each category's first matching mapping.
    pub fn suggest_scored(&self, description: &str) -> Vec<ScoredCategory> {
        let normalized = description.trim().to_lowercase();
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut scores: Vec<ScoredCategory> = Vec::new();
        for mapping in self.table.iter() {
            let score: usize = mapping
                .keywords
                .iter()
                .filter(|keyword| normalized.contains(keyword.text.as_str()))
                .map(|keyword| keyword.weight)
                .sum();
            if score == 0 {
                continue;
            }
            match scores
                .iter_mut()
                .find(|entry| entry.category == mapping.category)
            {
                Some(entry) => entry.score += score,
                None => scores.push(ScoredCategory {
                    category: mapping.category,
                    score,
                }),
            }
        }

        // `sort_by` is stable, which keeps tie order reproducible.
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores.truncate(self.max_suggestions);
        debug!(
            "scored {} candidate categories for a {}-char description",
            scores.len(),
            normalized.chars().count()
        );
        scores
    }

    pub fn suggest(&self, description: &str) -> Vec<Category> {
        self.suggest_scored(description)
            .into_iter()
            .map(|entry| entry.category)
            .collect()
    }

    /// Categories a selector should display for the current description.
    ///
    /// `show_all` wins, then suggestions, then the static common list.
    pub fn display_categories(&self, description: &str, show_all: bool) -> Vec<Category> {
        if show_all {
            return all_categories().to_vec();
        }
        let suggested = self.suggest(description);
        if suggested.is_empty() {
            default_suggestions().to_vec()
        } else {
            suggested
        }
    }
}

/// Suggests up to [`MAX_SUGGESTIONS`] categories for `description`.
pub fn suggest_categories(description: &str) -> Vec<Category> {
    CategorySuggester::default().suggest(description)
}

/// Common categories offered when a description yields no suggestions.
pub fn default_suggestions() -> &'static [Category] {
    DEFAULT_SUGGESTIONS
}
