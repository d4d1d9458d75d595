use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::enums::active_deals::ActiveDeals;
use crate::enums::initiator::Initiator;
use crate::enums::interaction_frequency::InteractionFrequency;
use crate::enums::priority_level::PriorityLevel;
use crate::enums::proposal_status::ProposalStatus;
use crate::enums::sentiment::Sentiment;
use crate::structs::content_analysis::ContentAnalysis;
use crate::structs::validation_result::ValidationResult;

/// Survey answers and content-analysis signals for one client.
///
/// Answers are sets so multi-select surveys keep working; today's callers
/// send one element each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritizationInput {
    pub active_deals: BTreeSet<ActiveDeals>,

    pub interaction_frequency: BTreeSet<InteractionFrequency>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who_initiated: Option<BTreeSet<Initiator>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_proposal: Option<BTreeSet<ProposalStatus>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_priority: Option<PriorityLevel>,

    /// Carried through to storage; no scoring rule reads it yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_keywords_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_sentiment: Option<Sentiment>,
}

impl PrioritizationInput {
    pub fn new(
        active_deals: impl IntoIterator<Item = ActiveDeals>,
        interaction_frequency: impl IntoIterator<Item = InteractionFrequency>,
    ) -> Self {
        Self {
            active_deals: active_deals.into_iter().collect(),
            interaction_frequency: interaction_frequency.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_who_initiated(mut self, who: impl IntoIterator<Item = Initiator>) -> Self {
        self.who_initiated = Some(who.into_iter().collect());
        self
    }

    pub fn with_pending_proposal(mut self, pending: impl IntoIterator<Item = ProposalStatus>) -> Self {
        self.pending_proposal = Some(pending.into_iter().collect());
        self
    }

    pub fn with_content_analysis(mut self, analysis: &ContentAnalysis) -> Self {
        self.pdf_priority = Some(analysis.priority);
        self.pdf_keywords_count = Some(analysis.keywords_count);
        self.pdf_sentiment = Some(analysis.sentiment);
        self
    }

    pub fn has_external_signals(&self) -> bool {
        self.pdf_priority.is_some() || self.pdf_keywords_count.is_some() || self.pdf_sentiment.is_some()
    }

    /// Checks that the mandatory questions were answered.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.active_deals.is_empty() {
            result.add_error("active_deals: at least one answer is required");
        }
        if self.interaction_frequency.is_empty() {
            result.add_error("interaction_frequency: at least one answer is required");
        }

        let multi_select = [
            ("active_deals", self.active_deals.len()),
            ("interaction_frequency", self.interaction_frequency.len()),
            ("who_initiated", self.who_initiated.as_ref().map_or(0, BTreeSet::len)),
            ("pending_proposal", self.pending_proposal.as_ref().map_or(0, BTreeSet::len)),
        ];
        for (field, count) in multi_select {
            if count > 1 {
                result.add_warning(&format!("{field}: {count} answers selected, every matching rule applies"));
            }
        }

        result
    }
}
