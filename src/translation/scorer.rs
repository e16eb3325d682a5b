//! Candidate extraction and scoring
//!
//! The translator prints a primary translation followed by alternatives,
//! separated by newlines, commas and parenthesised groups. Every fragment is
//! a candidate; the one sharing the fewest words with the English source
//! wins.

use std::sync::OnceLock;

use regex_lite::Regex;

use super::protected::ProtectedTermTable;

fn candidate_delimiter_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?m)\n|,|^\(|\)$").expect("Invalid candidate delimiter regex")
    })
}

/// Split raw translator output into candidate fragments
pub fn split_candidates(output: &str) -> Vec<String> {
    candidate_delimiter_regex()
        .split(output)
        .map(str::to_string)
        .collect()
}

/// Drop empty fragments and fragments carrying unknown long digit runs
pub fn filter_candidates(candidates: Vec<String>, table: &ProtectedTermTable) -> Vec<String> {
    candidates
        .into_iter()
        .filter(|c| !c.is_empty())
        .filter(|c| table.is_valid_candidate(c))
        .collect()
}

/// Score a candidate against the (placeholder-protected) source phrase.
///
/// Lower is better. Each source word found in the candidate costs its
/// length; protected placeholders found in a multi-word phrase earn it back.
pub fn score(untranslated: &str, candidate: &str, table: &ProtectedTermTable) -> i64 {
    let words: Vec<&str> = untranslated.split(' ').collect();
    let candidate_upper = candidate.to_uppercase();

    let mut score = 0i64;
    if candidate_upper == untranslated.to_uppercase() {
        score = words.len() as i64;
    }

    for word in &words {
        let word_upper = word.to_uppercase();
        let mut offset = word.chars().count() as i64;
        if words.len() > 1 && table.is_placeholder(&word_upper) {
            offset = -offset;
        }
        if candidate_upper.contains(&word_upper) {
            score += offset;
        }
    }
    score
}

/// Pick the best candidate; ties keep the earliest.
///
/// Falls back to the untranslated text when nothing survived filtering.
pub fn best_candidate(untranslated: &str, candidates: &[String], table: &ProtectedTermTable) -> String {
    let mut best: Option<(&str, i64)> = None;
    for candidate in candidates {
        let candidate_score = score(untranslated, candidate, table);
        match best {
            Some((_, best_score)) if candidate_score >= best_score => {}
            _ => best = Some((candidate, candidate_score)),
        }
    }

    best.map(|(text, _)| text)
        .unwrap_or(untranslated)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_candidates() {
        let output = "Bloc-notes du vin\n(Bloc-notes, Carnet)\nvin\n";
        let candidates = split_candidates(output);
        assert_eq!(
            candidates,
            vec!["Bloc-notes du vin", "", "Bloc-notes", " Carnet", "", "vin", ""]
        );
    }

    #[test]
    fn test_filter_candidates() {
        let table = ProtectedTermTable::with_defaults();
        let candidates = vec![
            "".to_string(),
            "Éditeur 002712425879".to_string(),
            "Éditeur 1234567890".to_string(),
        ];
        assert_eq!(filter_candidates(candidates, &table), vec!["Éditeur 002712425879"]);
    }

    #[test]
    fn test_score_exact_match() {
        let table = ProtectedTermTable::with_defaults();
        // Exact match: word count plus every word's length
        assert_eq!(score("Task Manager", "task manager", &table), 2 + 4 + 7);
    }

    #[test]
    fn test_score_partial_overlap() {
        let table = ProtectedTermTable::with_defaults();
        assert_eq!(score("Task Manager", "Gestionnaire des tâches", &table), 0);
        assert_eq!(score("Task Manager", "Manager de tâches", &table), 7);
    }

    #[test]
    fn test_score_rewards_kept_placeholder() {
        let table = ProtectedTermTable::with_defaults();
        let phrase = "002712425879 Notepad";
        assert_eq!(score(phrase, "Bloc-notes 002712425879", &table), -12);
        assert_eq!(score(phrase, "Bloc-notes", &table), 0);
    }

    #[test]
    fn test_single_word_placeholder_not_negated() {
        let table = ProtectedTermTable::with_defaults();
        assert_eq!(score("002712425879", "002712425879", &table), 1 + 12);
    }

    #[test]
    fn test_best_candidate_prefers_lowest_and_earliest() {
        let table = ProtectedTermTable::with_defaults();
        let candidates = vec![
            "Task Manager".to_string(),
            " Gestionnaire des tâches ".to_string(),
            "Gestionnaire de tâches".to_string(),
        ];
        assert_eq!(
            best_candidate("Task Manager", &candidates, &table),
            "Gestionnaire des tâches"
        );
    }

    #[test]
    fn test_best_candidate_first_is_initial_best() {
        let table = ProtectedTermTable::with_defaults();
        let candidates = vec!["Task Manager".to_string()];
        assert_eq!(best_candidate("Task Manager", &candidates, &table), "Task Manager");
    }

    #[test]
    fn test_best_candidate_falls_back_to_source() {
        let table = ProtectedTermTable::with_defaults();
        assert_eq!(best_candidate(" Wine Help ", &[], &table), "Wine Help");
    }
}
