wire_enum! {
    /// Client contacts within the trailing 14 days.
    InteractionFrequency, field = "interaction_frequency" {
        OneToTwo => "1-2times",
        ThreeToFive => "3-5times",
        SixToNine => "6-9times",
        TenPlus => "10+times",
    }
}
