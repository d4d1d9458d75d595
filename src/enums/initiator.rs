wire_enum! {
    /// Who started the most recent contact.
    Initiator, field = "who_initiated" {
        Client => "client",
        You => "you",
    }
}
