//! Three-stage rule evaluator mapping survey answers to a priority label.
//!
//! Stages run in a fixed order: a baseline from the mandatory questions,
//! an adjustment from the advanced questions, then an adjustment from
//! content-analysis signals. Every function here is pure.

use std::collections::BTreeSet;
use crate::enums::active_deals::ActiveDeals;
use crate::enums::initiator::Initiator;
use crate::enums::interaction_frequency::InteractionFrequency;
use crate::enums::priority_level::PriorityLevel;
use crate::enums::proposal_status::ProposalStatus;
use crate::enums::sentiment::Sentiment;
use crate::structs::prioritization_input::PrioritizationInput;
use crate::structs::score_breakdown::ScoreBreakdown;

pub struct PriorityScorer;

impl PriorityScorer {

    /// Stage 1. Rules are checked top to bottom and the first match wins,
    /// so many deals with rare contact still lands on `Low`.
    pub fn baseline(
        active_deals: &BTreeSet<ActiveDeals>,
        interaction_frequency: &BTreeSet<InteractionFrequency>,
    ) -> PriorityLevel {
        let has_high_deals = active_deals.contains(&ActiveDeals::Two)
            || active_deals.contains(&ActiveDeals::ThreePlus);
        let has_high_frequency = interaction_frequency.contains(&InteractionFrequency::SixToNine)
            || interaction_frequency.contains(&InteractionFrequency::TenPlus);

        if has_high_deals && has_high_frequency {
            return PriorityLevel::High;
        }

        if active_deals.contains(&ActiveDeals::One)
            && interaction_frequency.contains(&InteractionFrequency::ThreeToFive)
        {
            return PriorityLevel::Medium;
        }

        if interaction_frequency.contains(&InteractionFrequency::OneToTwo) {
            return PriorityLevel::Low;
        }

        PriorityLevel::Medium
    }

    /// Stage 2. Promotion and demotion are checked independently, demotion
    /// seeing the already promoted value.
    pub fn adjust_advanced(
        priority: PriorityLevel,
        who_initiated: Option<&BTreeSet<Initiator>>,
        pending_proposal: Option<&BTreeSet<ProposalStatus>>,
    ) -> PriorityLevel {
        let initiated_by = |who: Initiator| who_initiated.is_some_and(|set| set.contains(&who));
        let proposal_is = |status: ProposalStatus| pending_proposal.is_some_and(|set| set.contains(&status));

        let mut adjusted = priority;

        if initiated_by(Initiator::Client) && proposal_is(ProposalStatus::Yes) {
            adjusted = adjusted.promote();
        }

        if initiated_by(Initiator::You) && proposal_is(ProposalStatus::No) {
            adjusted = adjusted.demote();
        }

        adjusted
    }

    /// Stage 3. `pdf_keywords_count` is accepted but has no rule yet.
    pub fn adjust_external(
        priority: PriorityLevel,
        pdf_priority: Option<PriorityLevel>,
        pdf_keywords_count: Option<u32>,
        pdf_sentiment: Option<Sentiment>,
    ) -> PriorityLevel {
        if pdf_priority.is_none() && pdf_keywords_count.is_none() && pdf_sentiment.is_none() {
            return priority;
        }

        let mut adjusted = pdf_priority.map_or(priority, |external| priority.max(external));

        match pdf_sentiment {
            Some(Sentiment::High) => adjusted = adjusted.promote(),
            Some(Sentiment::Low) => adjusted = adjusted.demote(),
            Some(Sentiment::Mid) | None => {}
        }

        adjusted
    }

    pub fn score(input: &PrioritizationInput) -> PriorityLevel {
        Self::explain(input).final_priority
    }

    pub fn explain(input: &PrioritizationInput) -> ScoreBreakdown {
        let baseline = Self::baseline(&input.active_deals, &input.interaction_frequency);
        let after_advanced = Self::adjust_advanced(
            baseline,
            input.who_initiated.as_ref(),
            input.pending_proposal.as_ref(),
        );
        let final_priority = Self::adjust_external(
            after_advanced,
            input.pdf_priority,
            input.pdf_keywords_count,
            input.pdf_sentiment,
        );

        ScoreBreakdown {
            baseline,
            after_advanced,
            final_priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<T: Ord + Copy>(items: &[T]) -> BTreeSet<T> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_baseline_high_for_many_deals_and_frequent_contact() {
        for deals in [ActiveDeals::Two, ActiveDeals::ThreePlus] {
            for freq in [InteractionFrequency::SixToNine, InteractionFrequency::TenPlus] {
                assert_eq!(PriorityScorer::baseline(&set(&[deals]), &set(&[freq])), PriorityLevel::High);
            }
        }
    }

    #[test]
    fn test_baseline_medium_for_one_deal_and_moderate_contact() {
        let level = PriorityScorer::baseline(&set(&[ActiveDeals::One]), &set(&[InteractionFrequency::ThreeToFive]));
        assert_eq!(level, PriorityLevel::Medium);
    }

    #[test]
    fn test_baseline_low_whenever_contact_is_rare() {
        for deals in ActiveDeals::ALL {
            let level = PriorityScorer::baseline(&set(&[*deals]), &set(&[InteractionFrequency::OneToTwo]));
            assert_eq!(level, PriorityLevel::Low, "deals = {deals}");
        }
    }

    #[test]
    fn test_baseline_falls_back_to_medium() {
        // One deal with frequent contact matches no rule.
        let level = PriorityScorer::baseline(&set(&[ActiveDeals::One]), &set(&[InteractionFrequency::TenPlus]));
        assert_eq!(level, PriorityLevel::Medium);
        // Empty answers as well.
        assert_eq!(PriorityScorer::baseline(&BTreeSet::new(), &BTreeSet::new()), PriorityLevel::Medium);
        // Two deals, moderate contact.
        let level = PriorityScorer::baseline(&set(&[ActiveDeals::Two]), &set(&[InteractionFrequency::ThreeToFive]));
        assert_eq!(level, PriorityLevel::Medium);
    }

    #[test]
    fn test_advanced_promotes_one_level() {
        let who = set(&[Initiator::Client]);
        let pending = set(&[ProposalStatus::Yes]);
        assert_eq!(
            PriorityScorer::adjust_advanced(PriorityLevel::Low, Some(&who), Some(&pending)),
            PriorityLevel::Medium
        );
        assert_eq!(
            PriorityScorer::adjust_advanced(PriorityLevel::High, Some(&who), Some(&pending)),
            PriorityLevel::High
        );
    }

    #[test]
    fn test_advanced_demotes_one_level() {
        let who = set(&[Initiator::You]);
        let pending = set(&[ProposalStatus::No]);
        assert_eq!(
            PriorityScorer::adjust_advanced(PriorityLevel::High, Some(&who), Some(&pending)),
            PriorityLevel::Medium
        );
        assert_eq!(
            PriorityScorer::adjust_advanced(PriorityLevel::Low, Some(&who), Some(&pending)),
            PriorityLevel::Low
        );
    }

    #[test]
    fn test_advanced_needs_both_answers() {
        let who = set(&[Initiator::Client]);
        assert_eq!(
            PriorityScorer::adjust_advanced(PriorityLevel::Medium, Some(&who), None),
            PriorityLevel::Medium
        );
        assert_eq!(
            PriorityScorer::adjust_advanced(PriorityLevel::Medium, None, None),
            PriorityLevel::Medium
        );
        let mixed = set(&[ProposalStatus::No]);
        assert_eq!(
            PriorityScorer::adjust_advanced(PriorityLevel::Medium, Some(&who), Some(&mixed)),
            PriorityLevel::Medium
        );
    }

    #[test]
    fn test_advanced_applies_both_checks_in_order() {
        // Multi-select answers can satisfy both rules: promote then demote.
        let who = set(&[Initiator::Client, Initiator::You]);
        let pending = set(&[ProposalStatus::Yes, ProposalStatus::No]);
        assert_eq!(
            PriorityScorer::adjust_advanced(PriorityLevel::High, Some(&who), Some(&pending)),
            PriorityLevel::Medium
        );
        assert_eq!(
            PriorityScorer::adjust_advanced(PriorityLevel::Low, Some(&who), Some(&pending)),
            PriorityLevel::Low
        );
        assert_eq!(
            PriorityScorer::adjust_advanced(PriorityLevel::Medium, Some(&who), Some(&pending)),
            PriorityLevel::Medium
        );
    }

    #[test]
    fn test_external_takes_max_priority() {
        assert_eq!(
            PriorityScorer::adjust_external(PriorityLevel::Low, Some(PriorityLevel::High), None, None),
            PriorityLevel::High
        );
        assert_eq!(
            PriorityScorer::adjust_external(PriorityLevel::High, Some(PriorityLevel::Low), None, None),
            PriorityLevel::High
        );
    }

    #[test]
    fn test_external_sentiment_shifts_one_level() {
        assert_eq!(
            PriorityScorer::adjust_external(PriorityLevel::Medium, None, None, Some(Sentiment::Low)),
            PriorityLevel::Low
        );
        assert_eq!(
            PriorityScorer::adjust_external(PriorityLevel::Medium, None, None, Some(Sentiment::High)),
            PriorityLevel::High
        );
        assert_eq!(
            PriorityScorer::adjust_external(PriorityLevel::Medium, None, None, Some(Sentiment::Mid)),
            PriorityLevel::Medium
        );
    }

    #[test]
    fn test_external_max_then_capped_promotion() {
        assert_eq!(
            PriorityScorer::adjust_external(PriorityLevel::High, Some(PriorityLevel::Low), Some(50), Some(Sentiment::High)),
            PriorityLevel::High
        );
    }

    #[test]
    fn test_external_keywords_alone_change_nothing() {
        for level in PriorityLevel::ALL {
            assert_eq!(PriorityScorer::adjust_external(*level, None, Some(0), None), *level);
            assert_eq!(PriorityScorer::adjust_external(*level, None, Some(999), None), *level);
        }
    }

    #[test]
    fn test_explain_reports_each_stage() {
        let mut input = PrioritizationInput::new([ActiveDeals::One], [InteractionFrequency::ThreeToFive])
            .with_who_initiated([Initiator::Client])
            .with_pending_proposal([ProposalStatus::Yes]);
        input.pdf_sentiment = Some(Sentiment::Low);

        let breakdown = PriorityScorer::explain(&input);
        assert_eq!(breakdown.baseline, PriorityLevel::Medium);
        assert_eq!(breakdown.after_advanced, PriorityLevel::High);
        assert_eq!(breakdown.final_priority, PriorityLevel::Medium);
        assert_eq!(PriorityScorer::score(&input), breakdown.final_priority);
    }
}
