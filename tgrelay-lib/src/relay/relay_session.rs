use std::sync::Arc;

use humansize::{format_size, DECIMAL};
use itertools::Itertools;
use tgrelay_proto::dto::{RelayOutcome, RelayResult, UploadFileDto};
use uuid::Uuid;

use super::DocumentSender;

/// Relays the files of one upload request, strictly one after another.
pub struct RelaySession {
    pub session_id: String,
    files: Vec<UploadFileDto>,
    sender: Arc<dyn DocumentSender>,
}

impl RelaySession {
    pub fn new(sender: Arc<dyn DocumentSender>, files: Vec<UploadFileDto>) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            files,
            sender,
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub async fn run(self) -> Vec<RelayResult> {
        let total = self.files.len();
        let mut results = Vec::with_capacity(total);

        for (index, file) in self.files.iter().enumerate() {
            log::info!(
                "[{}] [{}/{}] Relaying {} ({}, {})",
                self.session_id,
                index + 1,
                total,
                file.file_name,
                file.content_type,
                format_size(file.size(), DECIMAL),
            );

            let outcome = match self.sender.send_document(file).await {
                Ok(()) => RelayOutcome::Success,
                Err(e) => {
                    log::warn!(
                        "[{}] Failed to relay {}: {}",
                        self.session_id,
                        file.file_name,
                        e
                    );
                    RelayOutcome::Failure
                }
            };
            results.push(RelayResult::new(file.file_name.clone(), outcome));
        }

        let counts = results.iter().map(|r| r.outcome).counts();
        log::info!(
            "[{}] Done, {} succeeded, {} failed",
            self.session_id,
            counts.get(&RelayOutcome::Success).copied().unwrap_or(0),
            counts.get(&RelayOutcome::Failure).copied().unwrap_or(0),
        );

        results
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use super::*;
    use crate::{relay::RelayError, Result};

    /// Fails every file whose name starts with `bad`, records call order.
    #[derive(Default)]
    struct FakeSender {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl DocumentSender for FakeSender {
        async fn send_document(&self, file: &UploadFileDto) -> Result<()> {
            self.calls.lock().await.push(file.file_name.clone());
            if file.file_name.starts_with("bad") {
                return Err(RelayError::Rejected {
                    error_code: Some(400),
                    description: Some("nope".into()),
                }
                .into());
            }
            Ok(())
        }
    }

    fn file(name: &str) -> UploadFileDto {
        UploadFileDto::new(name, Some("text/plain".into()), name.as_bytes().to_vec())
    }

    #[tokio::test]
    async fn results_follow_input_order() {
        let sender = Arc::new(FakeSender::default());
        let session = RelaySession::new(
            sender.clone(),
            vec![file("a.txt"), file("bad.txt"), file("c.txt")],
        );
        assert_eq!(session.len(), 3);
        assert!(!session.is_empty());

        let results = session.run().await;
        assert_eq!(
            results,
            vec![
                RelayResult::new("a.txt", RelayOutcome::Success),
                RelayResult::new("bad.txt", RelayOutcome::Failure),
                RelayResult::new("c.txt", RelayOutcome::Success),
            ]
        );
        assert_eq!(
            *sender.calls.lock().await,
            vec!["a.txt", "bad.txt", "c.txt"]
        );
    }

    #[tokio::test]
    async fn same_file_twice_is_relayed_twice() {
        let sender = Arc::new(FakeSender::default());
        let results = RelaySession::new(sender.clone(), vec![file("a.txt"), file("a.txt")])
            .run()
            .await;
        assert_eq!(results.len(), 2);
        assert_eq!(sender.calls.lock().await.len(), 2);
    }
}
