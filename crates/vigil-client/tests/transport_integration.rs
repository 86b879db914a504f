//! Integration tests running the transport against in-process servers.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;
use vigil_client::{CommandClient, connect};
use vigil_proto::{ServerMessage, SimulateAttack, Snapshot};

/// Decoded frames come out of `from_server` in the order the server sent
/// them; an undecodable frame in the middle is skipped, not fatal.
#[tokio::test]
async fn delivers_decoded_messages_in_order() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut ws = tokio_tungstenite::accept_async(stream).await.expect("handshake");
        ws.send(Message::text(r#"{"event":"initial_data","data":{}}"#)).await.expect("send");
        ws.send(Message::text(r#"{"event":"new_feed_event","data":"first"}"#))
            .await
            .expect("send");
        ws.send(Message::text("not even json")).await.expect("send");
        ws.send(Message::text(r#"{"event":"new_feed_event","data":"second"}"#))
            .await
            .expect("send");
        // Hold the socket open until the client hangs up.
        let _ = ws.next().await;
    });

    let mut client = connect(&format!("http://{addr}")).await.expect("connect");

    assert_eq!(
        client.from_server.recv().await,
        Some(ServerMessage::InitialData(Snapshot::default()))
    );
    assert_eq!(client.from_server.recv().await, Some(ServerMessage::NewFeedEvent("first".into())));
    assert_eq!(client.from_server.recv().await, Some(ServerMessage::NewFeedEvent("second".into())));

    client.stop();
    server.abort();
}

/// After `stop` the channel closes and no further messages arrive.
#[tokio::test]
async fn stop_ends_delivery() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut ws = tokio_tungstenite::accept_async(stream).await.expect("handshake");
        let _ = ws.next().await;
    });

    let mut client = connect(&format!("http://{addr}")).await.expect("connect");
    client.stop();

    assert_eq!(client.from_server.recv().await, None);
    server.abort();
}

#[tokio::test]
async fn connect_rejects_bad_endpoints() {
    assert!(connect("ftp://127.0.0.1:5000").await.is_err());
    assert!(connect("not a url").await.is_err());
}

/// The command client posts the exact JSON body to `/simulate_attack`.
#[tokio::test]
async fn command_posts_expected_body() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let mut received = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).await.expect("read");
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
            if String::from_utf8_lossy(&received).contains("attack_type") {
                break;
            }
        }
        stream
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n")
            .await
            .expect("respond");
        String::from_utf8_lossy(&received).into_owned()
    });

    let commands = CommandClient::new(&format!("http://{addr}"));
    commands.simulate_attack(SimulateAttack { attack_type: "port_scan".into() });

    let request = server.await.expect("server task");
    assert!(request.starts_with("POST /simulate_attack"), "got: {request}");
    assert!(request.contains(r#"{"attack_type":"port_scan"}"#), "got: {request}");
}

/// A dead command endpoint is swallowed; nothing panics, nothing blocks.
#[tokio::test]
async fn command_failure_is_swallowed() {
    let commands = CommandClient::new("http://127.0.0.1:1");
    commands.simulate_attack(SimulateAttack { attack_type: "ddos".into() });
    tokio::time::sleep(Duration::from_millis(50)).await;
}
