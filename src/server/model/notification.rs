/// Outbound message produced by a ladder state change.
///
/// Delivery (DM, channel post) is up to the `Notifier` implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEvent {
    pub message: String,
    pub challenge_id: String,
    /// Discord user ids to notify
    pub recipient_ids: Vec<u64>,
}
