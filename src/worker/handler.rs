//! Worker thread implementation for network operations.
//!
//! The worker owns the [`GifApi`] client and processes one message at a time,
//! so blocking HTTP never stalls the UI loop. Superseded requests are not
//! cancelled: each message runs to completion and its response is posted back;
//! deciding whether it still matters is the UI's job.

use crate::client::GifApi;
use crate::domain::error::Result;
use crate::worker::{FetchFailure, WorkerMessage, WorkerResponse};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

/// Message processor wrapping a backend client.
pub struct GifWorker<A: GifApi> {
    api: A,
    download_dir: PathBuf,
}

impl<A: GifApi> GifWorker<A> {
    pub fn new(api: A, download_dir: PathBuf) -> Self {
        Self { api, download_dir }
    }

    /// Processes a message and returns the response to post back.
    pub fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::FetchTrending { token, params } => {
                Self::fetch_result(token, self.api.trending(&params))
            }
            WorkerMessage::Search { token, params } => {
                Self::fetch_result(token, self.api.search(&params))
            }
            WorkerMessage::Download { id, url, file_name } => {
                match self.download(&url, &file_name) {
                    Ok(path) => {
                        tracing::info!(id = %id, path = ?path, "download saved");
                        WorkerResponse::Downloaded { id, path }
                    }
                    Err(e) => {
                        tracing::warn!(id = %id, error = %e, "download failed");
                        WorkerResponse::Error {
                            message: format!("download of {id} failed: {e}"),
                        }
                    }
                }
            }
        }
    }

    fn fetch_result(
        token: crate::worker::RequestToken,
        result: Result<crate::domain::GifResponse>,
    ) -> WorkerResponse {
        match result {
            Ok(response) => {
                tracing::debug!(token = %token, items = response.data.len(), "fetch completed");
                WorkerResponse::ResultsLoaded { token, response }
            }
            Err(e) => {
                tracing::debug!(token = %token, error = %e, "fetch failed");
                WorkerResponse::FetchFailed {
                    token,
                    failure: FetchFailure::from(&e),
                }
            }
        }
    }

    fn download(&self, url: &str, file_name: &str) -> Result<PathBuf> {
        let bytes = self.api.download(url)?;
        write_download(&self.download_dir, file_name, &bytes)
    }
}

fn write_download(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    let tmp_path = path.with_extension("part");
    std::fs::write(&tmp_path, bytes)?;
    std::fs::rename(&tmp_path, &path)?;
    Ok(path)
}

/// Handle to a running worker thread.
///
/// Dropping the handle closes the message channel, which ends the thread once
/// the message in progress completes.
pub struct WorkerHandle {
    sender: Sender<WorkerMessage>,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Queues a message for the worker.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Worker`](crate::ExplorerError::Worker) if the
    /// worker thread has exited.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        self.sender
            .send(message)
            .map_err(|e| crate::ExplorerError::Worker(format!("worker is gone: {e}")))
    }

    /// Closes the channel and waits for the thread to finish.
    pub fn shutdown(self) {
        let Self { sender, thread } = self;
        drop(sender);
        if let Some(thread) = thread {
            let _ = thread.join();
        }
    }
}

/// Spawns the worker thread.
///
/// Every response is handed to `reply`, which typically forwards it into the
/// UI loop's channel.
///
/// # Errors
///
/// Returns [`ExplorerError::Worker`](crate::ExplorerError::Worker) if the
/// thread cannot be spawned.
pub fn spawn<A, F>(worker: GifWorker<A>, mut reply: F) -> Result<WorkerHandle>
where
    A: GifApi + 'static,
    F: FnMut(WorkerResponse) + Send + 'static,
{
    let (sender, receiver): (Sender<WorkerMessage>, Receiver<WorkerMessage>) = mpsc::channel();

    let thread = std::thread::Builder::new()
        .name("gif-worker".to_string())
        .spawn(move || {
            tracing::debug!("worker started");
            for message in receiver {
                reply(worker.handle_message(message));
            }
            tracing::debug!("worker stopped");
        })
        .map_err(|e| crate::ExplorerError::Worker(format!("failed to spawn worker: {e}")))?;

    Ok(WorkerHandle {
        sender,
        thread: Some(thread),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{Language, Rating};
    use crate::client::{SearchParams, TrendingParams};
    use crate::domain::{ExplorerError, GifResponse, Item};
    use crate::worker::{FetchErrorKind, RequestToken};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Default, Clone)]
    struct FakeApi {
        calls: Arc<Mutex<Vec<String>>>,
        fail_search: bool,
    }

    impl GifApi for FakeApi {
        fn trending(&self, params: &TrendingParams) -> Result<GifResponse> {
            self.calls.lock().unwrap().push(format!("trending:{}", params.page));
            Ok(GifResponse {
                data: vec![Item::new(format!("t{}", params.page), "trend")],
                pagination: None,
            })
        }

        fn search(&self, params: &SearchParams) -> Result<GifResponse> {
            self.calls.lock().unwrap().push(format!("search:{}", params.query));
            if self.fail_search {
                return Err(ExplorerError::SearchFailed { status: 503 });
            }
            Ok(GifResponse::default())
        }

        fn download(&self, url: &str) -> Result<Vec<u8>> {
            Ok(url.as_bytes().to_vec())
        }
    }

    fn search_params() -> SearchParams {
        SearchParams {
            query: "cats".to_string(),
            page: 1,
            rating: Rating::G,
            language: Language::En,
            limit: 12,
        }
    }

    #[test]
    fn fetch_response_echoes_token() {
        let worker = GifWorker::new(FakeApi::default(), PathBuf::from("."));
        let response = worker.handle_message(WorkerMessage::FetchTrending {
            token: RequestToken::new(7),
            params: TrendingParams { page: 3, limit: 12 },
        });

        match response {
            WorkerResponse::ResultsLoaded { token, response } => {
                assert_eq!(token, RequestToken::new(7));
                assert_eq!(response.data[0].id, "t3");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn search_failure_becomes_typed_failure() {
        let api = FakeApi { fail_search: true, ..FakeApi::default() };
        let worker = GifWorker::new(api, PathBuf::from("."));
        let response = worker.handle_message(WorkerMessage::Search {
            token: RequestToken::new(2),
            params: search_params(),
        });

        match response {
            WorkerResponse::FetchFailed { token, failure } => {
                assert_eq!(token, RequestToken::new(2));
                assert_eq!(failure.kind, FetchErrorKind::SearchFailed);
                assert!(failure.message.contains("503"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn download_writes_file_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let worker = GifWorker::new(FakeApi::default(), dir.path().join("gifs"));

        let response = worker.handle_message(WorkerMessage::Download {
            id: "abc".to_string(),
            url: "https://m.example/abc.gif".to_string(),
            file_name: "gif-abc.gif".to_string(),
        });

        let WorkerResponse::Downloaded { id, path } = response else {
            panic!("download did not succeed");
        };
        assert_eq!(id, "abc");
        assert_eq!(path, dir.path().join("gifs").join("gif-abc.gif"));
        assert_eq!(std::fs::read(&path).unwrap(), b"https://m.example/abc.gif");
    }

    #[test]
    fn spawned_worker_processes_messages_in_order() {
        let api = FakeApi::default();
        let calls = Arc::clone(&api.calls);
        let (tx, rx) = mpsc::channel();

        let handle = spawn(GifWorker::new(api, PathBuf::from(".")), move |response| {
            let _ = tx.send(response);
        })
        .unwrap();

        handle
            .post(WorkerMessage::FetchTrending {
                token: RequestToken::new(1),
                params: TrendingParams { page: 1, limit: 12 },
            })
            .unwrap();
        handle
            .post(WorkerMessage::Search {
                token: RequestToken::new(2),
                params: search_params(),
            })
            .unwrap();

        let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let second = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(first, WorkerResponse::ResultsLoaded { token, .. } if token.value() == 1));
        assert!(matches!(second, WorkerResponse::ResultsLoaded { token, .. } if token.value() == 2));

        handle.shutdown();
        assert_eq!(*calls.lock().unwrap(), vec!["trending:1", "search:cats"]);
    }
}
