use std::collections::BTreeSet;
use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use crm_prioritizer::enums::active_deals::ActiveDeals;
use crm_prioritizer::enums::initiator::Initiator;
use crm_prioritizer::enums::interaction_frequency::InteractionFrequency;
use crm_prioritizer::enums::priority_level::PriorityLevel;
use crm_prioritizer::enums::proposal_status::ProposalStatus;
use crm_prioritizer::enums::sentiment::Sentiment;
use crm_prioritizer::services::priority_scorer::PriorityScorer;
use crm_prioritizer::structs::prioritization_input::PrioritizationInput;

fn non_empty_set<T: Copy + Ord + std::fmt::Debug + 'static>(all: &'static [T]) -> impl Strategy<Value = BTreeSet<T>> {
    subsequence(all.to_vec(), 1..=all.len()).prop_map(|items| items.into_iter().collect())
}

fn optional_set<T: Copy + Ord + std::fmt::Debug + 'static>(all: &'static [T]) -> impl Strategy<Value = Option<BTreeSet<T>>> {
    proptest::option::of(non_empty_set(all))
}

fn level() -> impl Strategy<Value = PriorityLevel> {
    select(PriorityLevel::ALL.to_vec())
}

prop_compose! {
    fn any_input()(
        active_deals in non_empty_set(ActiveDeals::ALL),
        interaction_frequency in non_empty_set(InteractionFrequency::ALL),
        who_initiated in optional_set(Initiator::ALL),
        pending_proposal in optional_set(ProposalStatus::ALL),
        pdf_priority in proptest::option::of(level()),
        pdf_keywords_count in proptest::option::of(0u32..500),
        pdf_sentiment in proptest::option::of(select(Sentiment::ALL.to_vec())),
    ) -> PrioritizationInput {
        PrioritizationInput {
            active_deals,
            interaction_frequency,
            who_initiated,
            pending_proposal,
            pdf_priority,
            pdf_keywords_count,
            pdf_sentiment,
        }
    }
}

proptest! {
    #[test]
    fn score_is_repeatable(input in any_input()) {
        prop_assert_eq!(PriorityScorer::score(&input), PriorityScorer::score(&input.clone()));
    }

    #[test]
    fn without_optional_signals_score_is_baseline(input in any_input()) {
        let bare = PrioritizationInput::new(input.active_deals.clone(), input.interaction_frequency.clone());
        prop_assert_eq!(
            PriorityScorer::score(&bare),
            PriorityScorer::baseline(&input.active_deals, &input.interaction_frequency)
        );
    }

    #[test]
    fn keywords_count_never_changes_the_score(input in any_input(), keywords in proptest::option::of(0u32..10_000)) {
        let mut with_keywords = input.clone();
        with_keywords.pdf_keywords_count = keywords;
        prop_assert_eq!(PriorityScorer::score(&with_keywords), PriorityScorer::score(&input));
    }

    #[test]
    fn external_priority_is_a_floor_before_sentiment(current in level(), external in level()) {
        let adjusted = PriorityScorer::adjust_external(current, Some(external), None, None);
        prop_assert_eq!(adjusted, current.max(external));
    }

    #[test]
    fn stages_move_at_most_one_level_per_rule(current in level(), input in any_input()) {
        let advanced = PriorityScorer::adjust_advanced(
            current,
            input.who_initiated.as_ref(),
            input.pending_proposal.as_ref(),
        );
        let distance = i16::from(advanced.rank()) - i16::from(current.rank());
        prop_assert!(distance.abs() <= 1);
    }

    #[test]
    fn explain_matches_score(input in any_input()) {
        prop_assert_eq!(PriorityScorer::explain(&input).final_priority, PriorityScorer::score(&input));
    }
}
