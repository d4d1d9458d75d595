wire_enum! {
    /// Whether a proposal is waiting on the client.
    ProposalStatus, field = "pending_proposal" {
        Yes => "yes",
        No => "no",
    }
}
