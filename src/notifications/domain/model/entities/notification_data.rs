// Channel-agnostic envelope. Address semantics depend on the channel that
// consumes it: email addresses for the email channel, device tokens for push.
// An empty address set makes a send a no-op, not an error.
#[derive(Clone, Debug)]
pub struct NotificationData {
    pub addresses: Vec<String>,
    pub title: String,
    pub body: String,
}
