use ferrous_root_infrastructure::dns::RootServerHandler;
use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: RootServerHandler,
    tcp_timeout: Duration,
) -> anyhow::Result<()> {
    let udp_socket = UdpSocket::bind(bind_addr).await?;
    let tcp_listener = TcpListener::bind(bind_addr).await?;

    let mut server = ServerFuture::new(handler);
    server.register_socket(udp_socket);
    server.register_listener(tcp_listener, tcp_timeout);

    info!(bind_address = %bind_addr, "Root DNS server listening on UDP and TCP");

    server.block_until_done().await?;
    Ok(())
}
