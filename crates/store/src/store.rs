//! Persistent pattern store and trainer
//!
//! Reads take a point-in-time snapshot under a read lock; mutations hold
//! the write lock for the full mutate-and-persist cycle, so a reader never
//! observes a half-written record and writes are serialized against each
//! other. Every mutation persists the whole document via a temp file and
//! an atomic rename.

use chrono::Utc;
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use workmate_core::{ClassificationResult, Entities};

use crate::matcher::PatternMatcher;
use crate::record::{InteractionRecord, PatternRecord, StoreDocument};
use crate::synthesis::generalize_message;

/// Default confidence for explicitly added patterns
pub const DEFAULT_PATTERN_CONFIDENCE: f64 = 0.8;
/// Default starting success rate for explicitly added patterns
pub const DEFAULT_SUCCESS_RATE: f64 = 1.0;
/// Confidence for patterns synthesized from corrections
pub const LEARNED_PATTERN_CONFIDENCE: f64 = 0.7;
/// Success-rate boost applied on each confirming interaction
const SUCCESS_RATE_BOOST: f64 = 0.1;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Per-intent aggregate numbers
#[derive(Debug, Clone, serde::Serialize)]
pub struct IntentStatistics {
    pub pattern_count: usize,
    pub avg_success_rate: f64,
    pub total_usage: u64,
}

/// Store-wide aggregate numbers
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoreStatistics {
    pub total_patterns: usize,
    pub total_intents: usize,
    pub total_interactions: usize,
    pub intents: HashMap<String, IntentStatistics>,
}

struct StoreState {
    doc: StoreDocument,
    /// Pattern ids in insertion order, the ranking tie-break
    order: Vec<String>,
}

/// Persistent repository of learned patterns plus the feedback loop that
/// maintains them.
pub struct PatternStore {
    path: PathBuf,
    state: RwLock<StoreState>,
    matcher: PatternMatcher,
    learned_confidence: f64,
}

impl PatternStore {
    /// Open the store at `path`, loading any existing document. A missing
    /// or unreadable file degrades to an empty store rather than failing.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<StoreDocument>(&raw) {
                Ok(doc) => {
                    tracing::info!(
                        path = %path.display(),
                        patterns = doc.patterns.len(),
                        "Loaded pattern store"
                    );
                    doc
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "Pattern store unreadable, starting empty");
                    StoreDocument::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreDocument::default(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Pattern store unreadable, starting empty");
                StoreDocument::default()
            }
        };

        let order = insertion_order(&doc);
        Self {
            path,
            state: RwLock::new(StoreState { doc, order }),
            matcher: PatternMatcher::new(),
            learned_confidence: LEARNED_PATTERN_CONFIDENCE,
        }
    }

    /// Override the confidence assigned to patterns learned from
    /// corrections.
    pub fn with_learned_confidence(mut self, confidence: f64) -> Self {
        self.learned_confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Add a pattern with default confidence and success rate.
    pub fn add_pattern(
        &self,
        intent: &str,
        pattern: &str,
        entities: Entities,
    ) -> Result<String, StoreError> {
        self.add_pattern_with(
            intent,
            pattern,
            entities,
            DEFAULT_PATTERN_CONFIDENCE,
            DEFAULT_SUCCESS_RATE,
        )
    }

    /// Add a pattern, returning its newly assigned id. Inserts into both
    /// the record table and the intent index, then persists.
    pub fn add_pattern_with(
        &self,
        intent: &str,
        pattern: &str,
        entities: Entities,
        confidence: f64,
        success_rate: f64,
    ) -> Result<String, StoreError> {
        let mut state = self.state.write();

        let id = next_pattern_id(&state.doc, intent);
        let record = PatternRecord {
            id: id.clone(),
            intent: intent.to_string(),
            pattern: pattern.to_string(),
            entities,
            confidence: confidence.clamp(0.0, 1.0),
            success_rate: success_rate.clamp(0.0, 1.0),
            usage_count: 0,
            last_used: None,
            created: Utc::now(),
        };

        state.doc.patterns.insert(id.clone(), record);
        state
            .doc
            .intents
            .entry(intent.to_string())
            .or_default()
            .push(id.clone());
        state.order.push(id.clone());

        self.persist(&mut state)?;
        tracing::debug!(intent, pattern, id = %id, "Added pattern");
        Ok(id)
    }

    /// All patterns for one intent, in index order.
    pub fn get_patterns_for_intent(&self, intent: &str) -> Vec<PatternRecord> {
        let state = self.state.read();
        state
            .doc
            .intents
            .get(intent)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.doc.patterns.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Top patterns ranked by `(success_rate, usage_count)` descending,
    /// insertion order as the tie-break.
    pub fn get_best_patterns(&self, limit: usize) -> Vec<PatternRecord> {
        let state = self.state.read();
        ranked_ids(&state)
            .into_iter()
            .take(limit)
            .filter_map(|id| state.doc.patterns.get(&id).cloned())
            .collect()
    }

    /// Classify via stored patterns only: the first ranked pattern that
    /// matches wins. Returns `None` when nothing matches; callers then
    /// fall through to the rule cascade.
    pub fn classify_via_store(&self, message: &str) -> Option<ClassificationResult> {
        let state = self.state.read();
        for id in ranked_ids(&state) {
            if let Some(record) = state.doc.patterns.get(&id) {
                if self.matcher.matches(message, &record.pattern) {
                    tracing::debug!(
                        intent = %record.intent,
                        pattern = %record.pattern,
                        id = %record.id,
                        "Stored pattern matched"
                    );
                    return Some(ClassificationResult::new(
                        record.intent.clone(),
                        record.confidence,
                        record.entities.clone(),
                    ));
                }
            }
        }
        None
    }

    /// Consume one feedback event. Successful, agreeing detections boost
    /// every matching pattern under that intent; failures and corrections
    /// synthesize a generalized pattern under the actual intent.
    pub fn learn_from_interaction(
        &self,
        message: &str,
        detected_intent: &str,
        actual_intent: &str,
        entities: Entities,
        success: bool,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write();

        state.doc.interactions.push(InteractionRecord {
            message: message.to_string(),
            detected_intent: detected_intent.to_string(),
            actual_intent: actual_intent.to_string(),
            entities: entities.clone(),
            success,
            timestamp: Utc::now(),
        });

        if success && detected_intent == actual_intent {
            let matched: Vec<String> = state
                .doc
                .patterns
                .values()
                .filter(|record| {
                    record.intent == detected_intent
                        && self.matcher.matches(message, &record.pattern)
                })
                .map(|record| record.id.clone())
                .collect();

            let now = Utc::now();
            for id in matched {
                if let Some(record) = state.doc.patterns.get_mut(&id) {
                    record.usage_count += 1;
                    record.last_used = Some(now);
                    record.success_rate = (record.success_rate + SUCCESS_RATE_BOOST).min(1.0);
                }
            }
        } else if let Some(pattern) = generalize_message(message) {
            let already_known = state
                .doc
                .intents
                .get(actual_intent)
                .map(|ids| {
                    ids.iter().any(|id| {
                        state
                            .doc
                            .patterns
                            .get(id)
                            .map(|record| record.pattern == pattern)
                            .unwrap_or(false)
                    })
                })
                .unwrap_or(false);

            if !already_known {
                let id = next_pattern_id(&state.doc, actual_intent);
                let record = PatternRecord {
                    id: id.clone(),
                    intent: actual_intent.to_string(),
                    pattern: pattern.clone(),
                    entities,
                    confidence: self.learned_confidence,
                    success_rate: DEFAULT_SUCCESS_RATE,
                    usage_count: 0,
                    last_used: None,
                    created: Utc::now(),
                };
                state.doc.patterns.insert(id.clone(), record);
                state
                    .doc
                    .intents
                    .entry(actual_intent.to_string())
                    .or_default()
                    .push(id.clone());
                state.order.push(id);
                tracing::info!(intent = actual_intent, pattern, "Learned pattern from correction");
            }
        }

        self.persist(&mut state)
    }

    /// Remove a pattern and its intent-index entry. Returns whether the
    /// id existed.
    pub fn delete_pattern(&self, pattern_id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write();

        let Some(record) = state.doc.patterns.remove(pattern_id) else {
            return Ok(false);
        };
        if let Some(ids) = state.doc.intents.get_mut(&record.intent) {
            ids.retain(|id| id != pattern_id);
            if ids.is_empty() {
                state.doc.intents.remove(&record.intent);
            }
        }
        state.order.retain(|id| id != pattern_id);

        self.persist(&mut state)?;
        tracing::debug!(id = pattern_id, intent = %record.intent, "Deleted pattern");
        Ok(true)
    }

    /// Serialize the full document to `path`.
    pub fn export_patterns(&self, path: &Path) -> Result<(), StoreError> {
        let state = self.state.read();
        write_atomic(path, &state.doc)
    }

    /// Merge patterns from a previously exported document. Existing ids
    /// are kept untouched; unknown ids and intents are appended. Returns
    /// the number of patterns merged in.
    pub fn import_patterns(&self, path: &Path) -> Result<usize, StoreError> {
        let raw = fs::read_to_string(path)?;
        let imported: StoreDocument = serde_json::from_str(&raw)?;

        let mut state = self.state.write();
        let mut merged = 0;
        for (intent, ids) in &imported.intents {
            for id in ids {
                if state.doc.patterns.contains_key(id) {
                    continue;
                }
                let Some(record) = imported.patterns.get(id) else {
                    continue;
                };
                state.doc.patterns.insert(id.clone(), record.clone());
                state
                    .doc
                    .intents
                    .entry(intent.clone())
                    .or_default()
                    .push(id.clone());
                state.order.push(id.clone());
                merged += 1;
            }
        }

        if merged > 0 {
            self.persist(&mut state)?;
        }
        tracing::info!(path = %path.display(), merged, "Imported patterns");
        Ok(merged)
    }

    /// Aggregate counts for reporting surfaces.
    pub fn statistics(&self) -> StoreStatistics {
        let state = self.state.read();
        let mut intents = HashMap::new();
        for (intent, ids) in &state.doc.intents {
            let records: Vec<&PatternRecord> = ids
                .iter()
                .filter_map(|id| state.doc.patterns.get(id))
                .collect();
            if records.is_empty() {
                continue;
            }
            let avg = records.iter().map(|r| r.success_rate).sum::<f64>() / records.len() as f64;
            intents.insert(
                intent.clone(),
                IntentStatistics {
                    pattern_count: records.len(),
                    avg_success_rate: avg,
                    total_usage: records.iter().map(|r| r.usage_count).sum(),
                },
            );
        }

        StoreStatistics {
            total_patterns: state.doc.patterns.len(),
            total_intents: state.doc.intents.len(),
            total_interactions: state.doc.interactions.len(),
            intents,
        }
    }

    /// Interaction log snapshot.
    pub fn interactions(&self) -> Vec<InteractionRecord> {
        self.state.read().doc.interactions.clone()
    }

    fn persist(&self, state: &mut StoreState) -> Result<(), StoreError> {
        state.doc.metadata.last_updated = Utc::now();
        write_atomic(&self.path, &state.doc)
    }
}

/// Whole-file write through a sibling temp file and an atomic rename, so
/// a crash mid-write never leaves a truncated document behind.
fn write_atomic(path: &Path, doc: &StoreDocument) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let json = serde_json::to_string_pretty(doc)?;
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Id scheme `{intent}_{n}` with `n` starting at total pattern count + 1,
/// probed upward past gaps left by deletions.
fn next_pattern_id(doc: &StoreDocument, intent: &str) -> String {
    let mut n = doc.patterns.len() + 1;
    loop {
        let id = format!("{intent}_{n}");
        if !doc.patterns.contains_key(&id) {
            return id;
        }
        n += 1;
    }
}

/// Pattern ids ranked by `(success_rate, usage_count)` descending with
/// insertion order as the tie-break.
fn ranked_ids(state: &StoreState) -> Vec<String> {
    let mut ids: Vec<(usize, &String)> = state.order.iter().enumerate().collect();
    ids.sort_by(|(seq_a, id_a), (seq_b, id_b)| {
        let a = state.doc.patterns.get(*id_a);
        let b = state.doc.patterns.get(*id_b);
        match (a, b) {
            (Some(a), Some(b)) => b
                .success_rate
                .partial_cmp(&a.success_rate)
                .unwrap_or(Ordering::Equal)
                .then(b.usage_count.cmp(&a.usage_count))
                .then(seq_a.cmp(seq_b)),
            // dangling order entries sink to the end
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => seq_a.cmp(seq_b),
        }
    });
    ids.into_iter().map(|(_, id)| id.clone()).collect()
}

/// Rebuild insertion order from a loaded document: creation time, then id.
fn insertion_order(doc: &StoreDocument) -> Vec<String> {
    let mut ids: Vec<&PatternRecord> = doc.patterns.values().collect();
    ids.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));
    ids.into_iter().map(|record| record.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, PatternStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PatternStore::open(dir.path().join("patterns.json"));
        (dir, store)
    }

    #[test]
    fn test_add_and_get_patterns() {
        let (_dir, store) = temp_store();
        let id = store
            .add_pattern("list_pods", "list pods", Entities::new())
            .unwrap();

        let patterns = store.get_patterns_for_intent("list_pods");
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].id, id);
        assert_eq!(patterns[0].pattern, "list pods");
        assert_eq!(patterns[0].confidence, DEFAULT_PATTERN_CONFIDENCE);
        assert_eq!(patterns[0].success_rate, DEFAULT_SUCCESS_RATE);
    }

    #[test]
    fn test_classify_via_store_first_ranked_match() {
        let (_dir, store) = temp_store();
        store
            .add_pattern_with("read_emails", "email", Entities::new(), 0.8, 0.5)
            .unwrap();
        store
            .add_pattern_with("send_email", "send email", Entities::new(), 0.9, 1.0)
            .unwrap();

        // higher success_rate ranks first even though both match
        let result = store.classify_via_store("send email to bob").unwrap();
        assert_eq!(result.intent, "send_email");
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_classify_via_store_none_when_no_match() {
        let (_dir, store) = temp_store();
        store
            .add_pattern("list_pods", "list pods", Entities::new())
            .unwrap();
        assert!(store.classify_via_store("show my calendar").is_none());
    }

    #[test]
    fn test_learn_success_boosts_matching_patterns() {
        let (_dir, store) = temp_store();
        store
            .add_pattern_with("list_pods", "list pods", Entities::new(), 0.8, 0.5)
            .unwrap();

        store
            .learn_from_interaction("please list pods", "list_pods", "list_pods", Entities::new(), true)
            .unwrap();

        let record = &store.get_patterns_for_intent("list_pods")[0];
        assert_eq!(record.usage_count, 1);
        assert!((record.success_rate - 0.6).abs() < 1e-9);
        assert!(record.last_used.is_some());
    }

    #[test]
    fn test_success_rate_capped_at_one() {
        let (_dir, store) = temp_store();
        store
            .add_pattern_with("list_pods", "list pods", Entities::new(), 0.8, 0.95)
            .unwrap();
        store
            .learn_from_interaction("list pods", "list_pods", "list_pods", Entities::new(), true)
            .unwrap();
        let record = &store.get_patterns_for_intent("list_pods")[0];
        assert_eq!(record.success_rate, 1.0);
    }

    #[test]
    fn test_correction_synthesizes_pattern() {
        let (_dir, store) = temp_store();
        store
            .learn_from_interaction(
                "add comment to OCPQE-30241 working on it",
                "general_conversation",
                "add_jira_comment",
                Entities::new(),
                false,
            )
            .unwrap();

        let patterns = store.get_patterns_for_intent("add_jira_comment");
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].pattern, "add comment to [ISSUE_KEY] [COMMENT]");
        assert_eq!(patterns[0].confidence, LEARNED_PATTERN_CONFIDENCE);
    }

    #[test]
    fn test_correction_does_not_duplicate_pattern() {
        let (_dir, store) = temp_store();
        for _ in 0..2 {
            store
                .learn_from_interaction(
                    "add comment to OCPQE-30241 working on it",
                    "general_conversation",
                    "add_jira_comment",
                    Entities::new(),
                    false,
                )
                .unwrap();
        }
        assert_eq!(store.get_patterns_for_intent("add_jira_comment").len(), 1);
    }

    #[test]
    fn test_correction_without_volatile_tokens_adds_nothing() {
        let (_dir, store) = temp_store();
        store
            .learn_from_interaction(
                "show my calendar",
                "general_conversation",
                "show_calendar",
                Entities::new(),
                false,
            )
            .unwrap();
        assert!(store.get_patterns_for_intent("show_calendar").is_empty());
        // the interaction itself is still recorded
        assert_eq!(store.interactions().len(), 1);
    }

    #[test]
    fn test_delete_pattern() {
        let (_dir, store) = temp_store();
        let id = store
            .add_pattern("list_pods", "list pods", Entities::new())
            .unwrap();
        assert!(store.delete_pattern(&id).unwrap());
        assert!(!store.delete_pattern(&id).unwrap());
        assert!(store.get_patterns_for_intent("list_pods").is_empty());
    }

    #[test]
    fn test_persistence_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patterns.json");

        let store = PatternStore::open(&path);
        store
            .add_pattern("send_email", "send email to [EMAIL]", Entities::new())
            .unwrap();
        store
            .learn_from_interaction("send email", "send_email", "send_email", Entities::new(), true)
            .unwrap();

        let reopened = PatternStore::open(&path);
        let patterns = reopened.get_patterns_for_intent("send_email");
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].usage_count, 1);
        assert_eq!(reopened.interactions().len(), 1);
    }

    #[test]
    fn test_export_import_merge() {
        let dir = tempfile::tempdir().unwrap();
        let export_path = dir.path().join("export.json");

        let store = PatternStore::open(dir.path().join("a.json"));
        store
            .add_pattern("list_pods", "list pods", Entities::new())
            .unwrap();
        store
            .add_pattern("send_email", "send email", Entities::new())
            .unwrap();
        store.export_patterns(&export_path).unwrap();

        let fresh = PatternStore::open(dir.path().join("b.json"));
        let merged = fresh.import_patterns(&export_path).unwrap();
        assert_eq!(merged, 2);

        let original: Vec<String> = store
            .get_best_patterns(10)
            .into_iter()
            .map(|r| r.pattern)
            .collect();
        let imported: Vec<String> = fresh
            .get_best_patterns(10)
            .into_iter()
            .map(|r| r.pattern)
            .collect();
        let original: std::collections::HashSet<_> = original.into_iter().collect();
        let imported: std::collections::HashSet<_> = imported.into_iter().collect();
        assert_eq!(original, imported);

        // re-import is a no-op
        assert_eq!(fresh.import_patterns(&export_path).unwrap(), 0);
    }

    #[test]
    fn test_best_patterns_ranking() {
        let (_dir, store) = temp_store();
        store
            .add_pattern_with("a", "pa", Entities::new(), 0.8, 0.5)
            .unwrap();
        store
            .add_pattern_with("b", "pb", Entities::new(), 0.8, 0.9)
            .unwrap();
        store
            .add_pattern_with("c", "pc", Entities::new(), 0.8, 0.9)
            .unwrap();

        let best = store.get_best_patterns(2);
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].intent, "b"); // ties broken by insertion order
        assert_eq!(best[1].intent, "c");
    }

    #[test]
    fn test_unreadable_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patterns.json");
        fs::write(&path, "not json at all").unwrap();

        let store = PatternStore::open(&path);
        assert_eq!(store.statistics().total_patterns, 0);
    }

    #[test]
    fn test_statistics_shape() {
        let (_dir, store) = temp_store();
        store
            .add_pattern_with("list_pods", "list pods", Entities::new(), 0.8, 1.0)
            .unwrap();
        store
            .add_pattern_with("list_pods", "get pods", Entities::new(), 0.8, 0.5)
            .unwrap();

        let stats = store.statistics();
        assert_eq!(stats.total_patterns, 2);
        assert_eq!(stats.total_intents, 1);
        let list_pods = &stats.intents["list_pods"];
        assert_eq!(list_pods.pattern_count, 2);
        assert!((list_pods.avg_success_rate - 0.75).abs() < 1e-9);
    }
}
