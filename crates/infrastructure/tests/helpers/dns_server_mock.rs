use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Produces the datagrams (or TCP frames) sent back for one query, in order.
pub type Responder = Arc<dyn Fn(&[u8]) -> Vec<Vec<u8>> + Send + Sync>;

/// Loopback DNS server answering from a closure.
///
/// UDP always; TCP on the same port when a TCP responder is given.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&[u8]) -> Vec<Vec<u8>> + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        Self::spawn(socket, Arc::new(responder))
    }

    /// Accepts queries and never answers.
    pub async fn silent() -> Self {
        Self::start(|_| Vec::new()).await
    }

    pub async fn start_with_tcp<U, T>(udp_responder: U, tcp_responder: T) -> Self
    where
        U: Fn(&[u8]) -> Vec<Vec<u8>> + Send + Sync + 'static,
        T: Fn(&[u8]) -> Vec<Vec<u8>> + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let socket = UdpSocket::bind(("127.0.0.1", port)).await.unwrap();

        let tcp_responder: Responder = Arc::new(tcp_responder);
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let responder = Arc::clone(&tcp_responder);
                tokio::spawn(async move {
                    let mut len_buf = [0u8; 2];
                    if stream.read_exact(&mut len_buf).await.is_err() {
                        return;
                    }
                    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                    if stream.read_exact(&mut query).await.is_err() {
                        return;
                    }
                    for frame in responder(&query) {
                        let len = (frame.len() as u16).to_be_bytes();
                        let _ = stream.write_all(&len).await;
                        let _ = stream.write_all(&frame).await;
                    }
                });
            }
        });

        Self::spawn(socket, Arc::new(udp_responder))
    }

    fn spawn(socket: UdpSocket, responder: Responder) -> Self {
        let addr = socket.local_addr().unwrap();
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            for datagram in responder(&buf[..len]) {
                                let _ = socket.send_to(&datagram, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn endpoint(&self) -> String {
        self.addr.to_string()
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A loopback UDP port with nothing listening on it.
pub async fn closed_udp_port() -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.local_addr().unwrap()
}
