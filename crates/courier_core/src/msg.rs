#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the title field.
    TitleChanged(String),
    /// User edited the author field.
    AuthorChanged(String),
    /// User picked the file to send with the submission.
    FileChosen(String),
    /// User pressed the submit control.
    SubmitPressed,
    /// The request identified by `request` finished, one way or another.
    SubmissionSettled {
        request: crate::RequestId,
        outcome: SubmissionOutcome,
    },
}

/// How a dispatched submission ended, reduced to what the display needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The endpoint accepted the upload and replied with a message.
    Delivered { message: String },
    /// The endpoint answered with a non-success status; its body is not
    /// consulted.
    Rejected,
    /// The request never produced a usable reply: network failure, timeout,
    /// unreadable file, or a body that did not parse.
    TransportFailed,
}
