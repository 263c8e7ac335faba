use crate::normalization::{normalize_comment, token_count};
use crate::rules::default_rules;
use crate::shared_types::{Rule, Topic};
use lazy_static::lazy_static;

/// Comments with fewer whitespace tokens than this are treated as off-topic
/// noise ("ok", "jaja", a lone emoji) unless an earlier rule group claims them.
const MIN_RELEVANT_TOKENS: usize = 3;

lazy_static! {
    static ref DEFAULT_CLASSIFIER: TopicClassifier = TopicClassifier::new();
}

/// Assigns exactly one topic to a comment by scanning an ordered rule
/// sequence over its lowercased text. First matching group wins; unmatched
/// comments fall through to the short-input shortcut or `Topic::Other`.
///
/// Stateless after construction and safe to share across threads.
pub struct TopicClassifier {
    rules: Vec<Rule>,
}

impl TopicClassifier {
    /// Classifier with the campaign's default rule table.
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Classifier over a caller-supplied rule sequence. Sequence order is
    /// priority order.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        TopicClassifier { rules }
    }

    /// Total over all inputs: every string yields exactly one topic, and the
    /// call never panics regardless of content, length, or language.
    pub fn classify(&self, comment: &str) -> Topic {
        let normalized = normalize_comment(comment);

        for rule in &self.rules {
            if rule.pattern.is_match(&normalized) {
                return rule.topic;
            }
        }

        if token_count(&normalized) < MIN_RELEVANT_TOKENS {
            return Topic::OffTopic;
        }

        Topic::Other
    }
}

impl Default for TopicClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// String-in, label-out boundary for ingestion pipelines that aggregate raw
/// labels. Backed by a shared immutable default classifier, so concurrent
/// callers need no coordination.
pub fn classify_topic(comment: &str) -> &'static str {
    DEFAULT_CLASSIFIER.classify(comment).label()
}
