wire_enum! {
    /// Sentiment reported by content analysis.
    Sentiment, field = "pdf_sentiment" {
        Low => "low",
        Mid => "mid",
        High => "high",
    }
}
