//! A throwaway HTTP/1.1 server standing in for the EPIC api.

use std::{
    sync::{
        Arc,
        Mutex,
    },
    time::Duration,
};

use earthpic::EpicConfig;
use tokio::{
    io::{
        AsyncReadExt,
        AsyncWriteExt,
    },
    net::TcpListener,
};

#[derive(Debug, Clone, Default)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub location: Option<String>,
    pub delay: Duration,
}

impl Reply {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_owned(),
            ..Self::default()
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: 302,
            location: Some(location.to_owned()),
            ..Self::default()
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct Seen {
    pub path: String,
    pub head: String,
}

pub struct MockEpic {
    pub api_base: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl MockEpic {
    pub fn config(&self) -> EpicConfig {
        EpicConfig {
            api_base: self.api_base.clone(),
            ..EpicConfig::default()
        }
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen
            .lock()
            .expect("seen lock")
            .clone()
    }
}

/// Spawns the server on `127.0.0.1:0`, answering every request with `handler(path)`.
pub async fn spawn_epic_server(handler: fn(&str) -> Reply) -> MockEpic {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_by_server = seen.clone();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let seen = seen_by_server.clone();
            tokio::spawn(async move {
                let mut head = Vec::new();
                let mut buf = [0u8; 4096];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }

                let head = String::from_utf8_lossy(&head).to_string();
                let path = head
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("/")
                    .to_owned();
                let reply = handler(&path);
                seen.lock().expect("seen lock").push(Seen {
                    path,
                    head,
                });

                tokio::time::sleep(reply.delay).await;

                let mut response = format!(
                    "HTTP/1.1 {} MOCK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
                    reply.status,
                    reply.body.len(),
                );
                if let Some(location) = &reply.location {
                    response.push_str(&format!("Location: {}\r\n", location));
                }
                response.push_str("\r\n");
                response.push_str(&reply.body);

                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    MockEpic {
        api_base: format!("http://{}/api/", addr),
        seen,
    }
}
