#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendSubmission {
        request: crate::RequestId,
        title: String,
        author: String,
        file_path: Option<String>,
    },
}
