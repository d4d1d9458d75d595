use std::fs;
use std::path::PathBuf;
use clap::Args;
use crate::enums::active_deals::ActiveDeals;
use crate::enums::initiator::Initiator;
use crate::enums::interaction_frequency::InteractionFrequency;
use crate::enums::priority_level::PriorityLevel;
use crate::enums::proposal_status::ProposalStatus;
use crate::enums::sentiment::Sentiment;
use crate::errors::{PrioritizerError, PrioritizerResult};
use crate::structs::prioritization_input::PrioritizationInput;

/// Survey answers and analysis signals, given as flags or as a JSON file.
#[derive(Args, Debug, Clone, Default)]
pub struct SignalArgs {
    /// JSON file with the full input; the answer flags are ignored when set
    #[clap(long)]
    pub input: Option<PathBuf>,

    /// Active deals: 1, 2 or 3+
    #[clap(short = 'd', long = "deals")]
    pub deals: Vec<ActiveDeals>,

    /// Contacts in the last 14 days: 1-2times, 3-5times, 6-9times or 10+times
    #[clap(short = 'f', long = "frequency")]
    pub frequency: Vec<InteractionFrequency>,

    /// Who initiated contact: client or you
    #[clap(long = "initiated-by")]
    pub initiated_by: Vec<Initiator>,

    /// Pending proposal: yes or no
    #[clap(long = "pending-proposal")]
    pub pending_proposal: Vec<ProposalStatus>,

    /// Priority suggested by content analysis
    #[clap(long = "content-priority")]
    pub content_priority: Option<PriorityLevel>,

    /// Keyword count reported by content analysis
    #[clap(long)]
    pub keywords: Option<u32>,

    /// Sentiment reported by content analysis: low, mid or high
    #[clap(long)]
    pub sentiment: Option<Sentiment>,
}

impl SignalArgs {
    pub fn into_input(self) -> PrioritizerResult<PrioritizationInput> {
        if let Some(path) = &self.input {
            if !self.deals.is_empty() || !self.frequency.is_empty() {
                log::warn!("⚠️ --input given, ignoring answer flags");
            }
            let content = fs::read_to_string(path).map_err(|e| {
                PrioritizerError::validation_error("input", &path.display().to_string(), "readable JSON file", Some(&e.to_string()))
            })?;
            return Ok(serde_json::from_str(&content)?);
        }

        let mut input = PrioritizationInput::new(self.deals, self.frequency);
        if !self.initiated_by.is_empty() {
            input = input.with_who_initiated(self.initiated_by);
        }
        if !self.pending_proposal.is_empty() {
            input = input.with_pending_proposal(self.pending_proposal);
        }
        input.pdf_priority = self.content_priority;
        input.pdf_keywords_count = self.keywords;
        input.pdf_sentiment = self.sentiment;

        Ok(input)
    }
}
