wire_enum! {
    /// Bucketed count of open deals linked to a client.
    ActiveDeals, field = "active_deals" {
        One => "1",
        Two => "2",
        ThreePlus => "3+",
    }
}
