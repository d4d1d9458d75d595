use crate::errors::PrioritizerResult;
use crate::structs::stored_prioritization::{NewPrioritization, StoredPrioritization};

/// Keeps at most one prioritization per client.
pub trait PrioritizationStore: Send + Sync {

    fn find_by_client(&self, client_id: &str) -> PrioritizerResult<Option<StoredPrioritization>>;

    fn list(&self) -> PrioritizerResult<Vec<StoredPrioritization>>;

    /// Fails with `DuplicatePrioritization` when the client already has a
    /// record and `replace` is false.
    fn save(&self, new: NewPrioritization, replace: bool) -> PrioritizerResult<StoredPrioritization>;
}
