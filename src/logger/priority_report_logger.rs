use crate::structs::client_summary::RankedClient;
use crate::structs::prioritization_input::PrioritizationInput;
use crate::structs::score_breakdown::ScoreBreakdown;
use crate::structs::stored_prioritization::{PrioritizationResponse, StoredPrioritization};

pub struct PriorityReportLogger {}

impl PriorityReportLogger {

    pub fn print_score(breakdown: &ScoreBreakdown) {
        let level = breakdown.final_priority;
        println!("{} Priority: {}", level.emoji(), level);
    }

    pub fn print_breakdown(input: &PrioritizationInput, breakdown: &ScoreBreakdown) {
        println!("\n📊 Priority breakdown");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  1. Mandatory answers  → {}", breakdown.baseline);
        println!("  2. Advanced answers   → {}", breakdown.after_advanced);
        if input.has_external_signals() {
            println!("  3. Content analysis   → {}", breakdown.final_priority);
        } else {
            println!("  3. Content analysis   → {} (no signals)", breakdown.final_priority);
        }
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        Self::print_score(breakdown);
    }

    pub fn print_saved(response: &PrioritizationResponse) {
        println!(
            "{} Client {} prioritized as {} (id {}, updated {})",
            response.calculated_priority.emoji(),
            response.client_id,
            response.calculated_priority,
            response.id,
            response.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    pub fn print_prioritizations(records: &[StoredPrioritization]) {
        if records.is_empty() {
            println!("⚠️ No prioritizations saved yet.");
            return;
        }

        println!("\n📋 Saved prioritizations:");
        println!("{}", "=".repeat(50));
        for (i, record) in records.iter().enumerate() {
            println!(
                "{}. {} {} → {}",
                i + 1,
                record.calculated_priority.emoji(),
                record.client_id,
                record.calculated_priority
            );
            println!("   🆔 {}", record.id);
            println!("   🕒 Updated: {}", record.updated_at.format("%Y-%m-%d %H:%M:%S UTC"));
        }
        println!("\n📊 Total: {}", records.len());
    }

    pub fn print_ranking(ranked: &[RankedClient]) {
        println!("\n🔥 Priority clients");
        println!("{}", "=".repeat(50));

        if ranked.is_empty() {
            println!("No clients yet. Add your first client to get started.");
            return;
        }

        for (i, entry) in ranked.iter().enumerate() {
            let deals = if entry.deal_count == 1 { "deal" } else { "deals" };
            println!(
                "{}. {} {:<24} {:>3} {:<5} {}",
                i + 1,
                entry.priority.emoji(),
                entry.client.name,
                entry.deal_count,
                deals,
                entry.client.company.as_deref().unwrap_or("—")
            );
        }
    }
}
