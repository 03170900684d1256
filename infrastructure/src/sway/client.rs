//! Sway IPC client
//!
//! Holds at most one connection to the compositor socket. Access is
//! serialized through an async mutex and every exchange, including the
//! connect, is bounded by the configured timeout. A connection that failed
//! or timed out is dropped and reopened on the next command; the failed
//! command itself is never resent.

use super::codec::{self, HEADER_LEN, RUN_COMMAND};
use super::error::{Result, SwayIpcError};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use swaytalk_application::{IpcError, WindowManagerPort};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub struct SwayIpcClient {
    path: PathBuf,
    timeout: Duration,
    stream: Mutex<Option<UnixStream>>,
}

impl SwayIpcClient {
    /// Create a client that connects on first use.
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            timeout,
            stream: Mutex::new(None),
        }
    }

    /// Create a client and open the connection immediately.
    pub async fn connect(path: impl Into<PathBuf>, timeout: Duration) -> Result<Self> {
        let client = Self::new(path, timeout);
        let stream = client.open().await?;
        *client.stream.lock().await = Some(stream);
        info!("Connected to {}", client.path.display());
        Ok(client)
    }

    /// Connect to `configured`, or to the socket named by the environment.
    pub async fn from_env(configured: Option<&Path>, timeout: Duration) -> Result<Self> {
        let path = match configured {
            Some(path) => path.to_path_buf(),
            None => socket_path_from(
                std::env::var_os("SWAYSOCK"),
                std::env::var_os("I3SOCK"),
            )
            .ok_or(SwayIpcError::SocketNotFound)?,
        };
        Self::connect(path, timeout).await
    }

    async fn open(&self) -> Result<UnixStream> {
        match tokio::time::timeout(self.timeout, UnixStream::connect(&self.path)).await {
            Ok(Ok(stream)) => Ok(stream),
            Ok(Err(source)) => Err(SwayIpcError::Connect {
                path: self.path.clone(),
                source,
            }),
            Err(_) => Err(SwayIpcError::Timeout(self.timeout)),
        }
    }

    /// Send one message and wait for its reply payload.
    pub async fn exchange(&self, message_type: u32, payload: &[u8]) -> Result<Vec<u8>> {
        let frame = codec::encode(message_type, payload)?;

        let mut guard = self.stream.lock().await;
        let mut stream = match guard.take() {
            Some(stream) => stream,
            None => {
                debug!("Reconnecting to {}", self.path.display());
                self.open().await?
            }
        };

        let reply = tokio::time::timeout(
            self.timeout,
            round_trip(&mut stream, message_type, &frame),
        )
        .await
        .map_err(|_| SwayIpcError::Timeout(self.timeout))??;

        *guard = Some(stream);
        Ok(reply)
    }

    /// Run one command and check the compositor's verdict.
    pub async fn run(&self, command: &str) -> Result<()> {
        let reply = self.exchange(RUN_COMMAND, command.as_bytes()).await?;
        codec::check_run_command_reply(&reply)
    }
}

async fn round_trip(stream: &mut UnixStream, message_type: u32, frame: &[u8]) -> Result<Vec<u8>> {
    stream.write_all(frame).await?;
    stream.flush().await?;

    let mut header = [0u8; HEADER_LEN];
    stream.read_exact(&mut header).await?;
    let (len, reply_type) = codec::decode_header(&header)?;
    if reply_type != message_type {
        return Err(SwayIpcError::Protocol(format!(
            "expected reply type {}, got {}",
            message_type, reply_type
        )));
    }

    let mut payload = vec![0u8; len];
    stream.read_exact(&mut payload).await?;
    Ok(payload)
}

/// `$SWAYSOCK` wins over `$I3SOCK`; empty values are ignored.
pub fn socket_path_from(swaysock: Option<OsString>, i3sock: Option<OsString>) -> Option<PathBuf> {
    [swaysock, i3sock]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[async_trait]
impl WindowManagerPort for SwayIpcClient {
    async fn run_command(&self, command: &str) -> std::result::Result<(), IpcError> {
        debug!(command, "Sending RUN_COMMAND");
        self.run(command).await.map_err(IpcError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::net::UnixListener;

    /// How the fake compositor answers a command.
    #[derive(Clone, Copy)]
    enum Behavior {
        Ack,
        Reject,
        Hang,
    }

    struct FakeSway {
        _dir: tempfile::TempDir,
        path: PathBuf,
        connections: Arc<AtomicUsize>,
        received: Arc<std::sync::Mutex<Vec<String>>>,
    }

    fn behavior_for(command: &str) -> Behavior {
        if command.starts_with("levitate") {
            Behavior::Reject
        } else if command.starts_with("hang") {
            Behavior::Hang
        } else {
            Behavior::Ack
        }
    }

    async fn fake_sway() -> FakeSway {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sway-ipc.sock");
        let listener = UnixListener::bind(&path).unwrap();
        let connections = Arc::new(AtomicUsize::new(0));
        let received = Arc::new(std::sync::Mutex::new(Vec::new()));

        let conns = Arc::clone(&connections);
        let log = Arc::clone(&received);
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                conns.fetch_add(1, Ordering::SeqCst);
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    loop {
                        let mut header = [0u8; HEADER_LEN];
                        if stream.read_exact(&mut header).await.is_err() {
                            return;
                        }
                        let (len, kind) = codec::decode_header(&header).unwrap();
                        let mut payload = vec![0u8; len];
                        stream.read_exact(&mut payload).await.unwrap();
                        let command = String::from_utf8(payload).unwrap();
                        log.lock().unwrap().push(command.clone());

                        let reply: &[u8] = match behavior_for(&command) {
                            Behavior::Ack => &br#"[{"success":true}]"#[..],
                            Behavior::Reject => &br#"[{"success":false,"parse_error":true,"error":"Unknown/invalid command 'levitate'"}]"#[..],
                            Behavior::Hang => {
                                tokio::time::sleep(Duration::from_secs(30)).await;
                                return;
                            }
                        };
                        let frame = codec::encode(kind, reply).unwrap();
                        stream.write_all(&frame).await.unwrap();
                    }
                });
            }
        });

        FakeSway {
            _dir: dir,
            path,
            connections,
            received,
        }
    }

    #[tokio::test]
    async fn test_acknowledged_command() {
        let sway = fake_sway().await;
        let client = SwayIpcClient::connect(&sway.path, Duration::from_secs(2))
            .await
            .unwrap();

        client.run_command("focus next").await.unwrap();
        assert_eq!(*sway.received.lock().unwrap(), vec!["focus next"]);
    }

    #[tokio::test]
    async fn test_rejected_command_is_remote_error() {
        let sway = fake_sway().await;
        let client = SwayIpcClient::connect(&sway.path, Duration::from_secs(2))
            .await
            .unwrap();

        let err = client.run_command("levitate up").await.unwrap_err();
        assert_eq!(
            err,
            IpcError::Remote("Unknown/invalid command 'levitate'".to_string())
        );
    }

    #[tokio::test]
    async fn test_connection_is_reused() {
        let sway = fake_sway().await;
        let client = SwayIpcClient::connect(&sway.path, Duration::from_secs(2))
            .await
            .unwrap();

        client.run_command("focus next").await.unwrap();
        let _ = client.run_command("levitate up").await;
        client.run_command("layout tabbed").await.unwrap();

        assert_eq!(sway.connections.load(Ordering::SeqCst), 1);
        assert_eq!(sway.received.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_timeout_resets_connection() {
        let sway = fake_sway().await;
        let client = SwayIpcClient::connect(&sway.path, Duration::from_millis(200))
            .await
            .unwrap();

        let err = client.run_command("hang forever").await.unwrap_err();
        assert_eq!(err, IpcError::Timeout(Duration::from_millis(200)));

        // The next command gets a fresh connection
        client.run_command("focus next").await.unwrap();
        assert_eq!(sway.connections.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_missing_socket_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let result =
            SwayIpcClient::connect(dir.path().join("absent.sock"), Duration::from_secs(1)).await;
        let err = result.err().unwrap();
        assert!(matches!(err, SwayIpcError::Connect { .. }));
        assert!(matches!(IpcError::from(err), IpcError::Connection(_)));
    }

    #[test]
    fn test_socket_path_precedence() {
        assert_eq!(
            socket_path_from(Some("/run/sway.sock".into()), Some("/run/i3.sock".into())),
            Some(PathBuf::from("/run/sway.sock"))
        );
        assert_eq!(
            socket_path_from(Some("".into()), Some("/run/i3.sock".into())),
            Some(PathBuf::from("/run/i3.sock"))
        );
        assert_eq!(socket_path_from(None, None), None);
    }
}
