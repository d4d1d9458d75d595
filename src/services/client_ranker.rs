use std::cmp::Reverse;
use std::collections::HashMap;
use crate::enums::priority_level::PriorityLevel;
use crate::structs::client_summary::{ClientSummary, DealSummary, RankedClient};

/// Builds the dashboard's "priority clients" list.
pub struct ClientRanker;

impl ClientRanker {
    /// Orders clients by priority, then by open deal count, and keeps the first `limit`.
    pub fn rank(clients: &[ClientSummary], deals: &[DealSummary], limit: usize) -> Vec<RankedClient> {
        let mut deal_counts: HashMap<&str, usize> = HashMap::new();
        for deal in deals {
            if let Some(client_id) = deal.client_id.as_deref() {
                *deal_counts.entry(client_id).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<RankedClient> = clients
            .iter()
            .map(|client| RankedClient {
                client: client.clone(),
                deal_count: deal_counts.get(client.id.as_str()).copied().unwrap_or(0),
                priority: Self::priority_of(client),
            })
            .collect();

        ranked.sort_by_key(|r| (Reverse(r.priority), Reverse(r.deal_count)));
        ranked.truncate(limit);

        log::debug!("Ranked {} of {} clients", ranked.len(), clients.len());
        ranked
    }

    fn priority_of(client: &ClientSummary) -> PriorityLevel {
        client
            .status
            .as_deref()
            .and_then(|status| status.parse().ok())
            .unwrap_or_default()
    }
}
