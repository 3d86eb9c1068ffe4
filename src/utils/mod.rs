//! Utility functions for name validation, transliteration and matching.
//!
//! - [`city_name`] - Letters-and-spaces validation of city and region names
//! - [`text_normalizer`] - Transliteration of non-Latin input
//! - [`city_matcher`] - Levenshtein-based nearest-name fallback
//! - [`gazetteer_csv`] - Gazetteer CSV reader used by the admin import

pub mod city_matcher;
pub mod city_name;
pub mod gazetteer_csv;
pub mod text_normalizer;
