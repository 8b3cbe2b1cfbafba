//! Movement categories and the keyword-based suggestion engine.

pub mod keywords;
pub mod suggest;
pub mod vocabulary;

pub use keywords::{KeywordMapping, KEYWORD_MAPPINGS};
pub use suggest::{
    default_suggestions, suggest_categories, CategorySuggester, ScoredCategory, MAX_SUGGESTIONS,
};
pub use vocabulary::{all_categories, Category, CategoryGroup};
