use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::Record;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock host root server answers.
#[derive(Clone)]
pub struct MockRootAnswer {
    pub rcode: ResponseCode,
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub authoritative: bool,
    /// UDP replies carry TC with no records; TCP gets the full answer.
    pub truncate_udp: bool,
    /// Replies use a different message ID than the query.
    pub wrong_id: bool,
}

impl MockRootAnswer {
    pub fn new(answers: Vec<Record>, authority: Vec<Record>) -> Self {
        Self {
            rcode: ResponseCode::NoError,
            answers,
            authority,
            authoritative: true,
            truncate_udp: false,
            wrong_id: false,
        }
    }

    pub fn rcode(rcode: ResponseCode) -> Self {
        Self {
            rcode,
            ..Self::new(vec![], vec![])
        }
    }
}

/// UDP + TCP listener on one loopback port, standing in for the host root server.
pub struct MockRootServer {
    addr: SocketAddr,
    answer: Arc<Mutex<MockRootAnswer>>,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<Message>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockRootServer {
    pub async fn start(answer: MockRootAnswer) -> Self {
        let udp = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = udp.local_addr().unwrap();
        let tcp = TcpListener::bind(addr).await.unwrap();

        let answer = Arc::new(Mutex::new(answer));
        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let last_query = Arc::new(Mutex::new(None));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let (a, uq, tq, lq) = (
            Arc::clone(&answer),
            Arc::clone(&udp_queries),
            Arc::clone(&tcp_queries),
            Arc::clone(&last_query),
        );

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = udp.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        uq.fetch_add(1, Ordering::SeqCst);
                        let answer = a.lock().unwrap().clone();
                        if let Some(reply) = Self::reply(&buf[..len], &answer, true, &lq) {
                            let _ = udp.send_to(&reply, peer).await;
                        }
                    }
                    accepted = tcp.accept() => {
                        let Ok((mut stream, _)) = accepted else { continue };
                        tq.fetch_add(1, Ordering::SeqCst);
                        let answer = a.lock().unwrap().clone();
                        let lq = Arc::clone(&lq);
                        tokio::spawn(async move {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                return;
                            }
                            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut query).await.is_err() {
                                return;
                            }
                            if let Some(reply) = Self::reply(&query, &answer, false, &lq) {
                                let _ = stream.write_all(&(reply.len() as u16).to_be_bytes()).await;
                                let _ = stream.write_all(&reply).await;
                            }
                        });
                    }
                }
            }
        });

        Self {
            addr,
            answer,
            udp_queries,
            tcp_queries,
            last_query,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    fn reply(
        query: &[u8],
        answer: &MockRootAnswer,
        over_udp: bool,
        last_query: &Mutex<Option<Message>>,
    ) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;
        *last_query.lock().unwrap() = Some(request.clone());

        let id = if answer.wrong_id {
            request.id().wrapping_add(1)
        } else {
            request.id()
        };

        let mut response = Message::new(id, MessageType::Response, request.op_code());
        response.add_queries(request.queries().to_vec());
        response.set_response_code(answer.rcode);
        response.set_authoritative(answer.authoritative);

        if over_udp && answer.truncate_udp {
            response.set_truncated(true);
        } else {
            response.add_answers(answer.answers.clone());
            response.add_name_servers(answer.authority.clone());
        }

        response.to_vec().ok()
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn set_answer(&self, answer: MockRootAnswer) {
        *self.answer.lock().unwrap() = answer;
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<Message> {
        self.last_query.lock().unwrap().clone()
    }
}

impl Drop for MockRootServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
