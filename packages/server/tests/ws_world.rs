//! WebSocket integration tests.
//!
//! End-to-end scenarios over a real socket: connect handshake, position
//! propagation, protocol leniency, log bounds and disconnect cleanup.

mod fixtures;
use fixtures::TestServer;

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn connect(server: &TestServer) -> WsStream {
    let (stream, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect");
    stream
}

/// 次のテキストフレームを JSON として受信する
async fn next_json(ws: &mut WsStream) -> Value {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("stream ended unexpectedly")
            .expect("websocket error");
        if let Message::Text(text) = msg {
            return serde_json::from_str(&text).expect("invalid JSON frame");
        }
    }
}

/// 指定タイプのドキュメントが来るまで読み飛ばす
async fn next_of_type(ws: &mut WsStream, message_type: &str) -> Value {
    loop {
        let doc = next_json(ws).await;
        if doc["type"] == message_type {
            return doc;
        }
    }
}

fn assert_spawn_position(position: &Value) {
    let x = position[0].as_f64().unwrap();
    let y = position[1].as_f64().unwrap();
    let z = position[2].as_f64().unwrap();
    assert!((-8.0..=8.0).contains(&x), "x out of spawn bounds: {x}");
    assert_eq!(y, 0.5, "spawn height must be 0.5");
    assert!((-8.0..=8.0).contains(&z), "z out of spawn bounds: {z}");
}

#[tokio::test]
async fn test_connect_receives_welcome_and_snapshot() {
    // テスト項目: 接続直後に welcome と world-state が届き、スポーン状態が
    // 仕様の範囲に収まっている
    // given (前提条件):
    let server = TestServer::start(19090).await;

    // when (操作):
    let mut client = connect(&server).await;

    // then (期待する結果): 最初のドキュメントは welcome
    let welcome = next_json(&mut client).await;
    assert_eq!(welcome["type"], "welcome");
    let session_id = welcome["session_id"].as_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&session_id).is_ok());

    // 続いて自分を含む world-state スナップショットが届く
    let snapshot = next_json(&mut client).await;
    assert_eq!(snapshot["type"], "world-state");
    assert!(snapshot["messages"].as_array().unwrap().is_empty());

    let sessions = snapshot["sessions"].as_object().unwrap();
    assert_eq!(sessions.len(), 1);
    let me = &sessions[&session_id];
    assert_spawn_position(&me["position"]);
    assert!(me["color"].as_u64().unwrap() <= 0xFF_FFFF);
}

#[tokio::test]
async fn test_second_client_visible_to_both() {
    // テスト項目: 2 人目の接続が両方のクライアントの world-state に現れる
    // given (前提条件): A が接続済み
    let server = TestServer::start(19091).await;
    let mut client_a = connect(&server).await;
    let welcome_a = next_json(&mut client_a).await;
    let id_a = welcome_a["session_id"].as_str().unwrap().to_string();
    next_json(&mut client_a).await; // A 自身のスナップショット

    // when (操作): B が接続
    let mut client_b = connect(&server).await;
    let welcome_b = next_json(&mut client_b).await;
    let id_b = welcome_b["session_id"].as_str().unwrap().to_string();
    assert_ne!(id_a, id_b);

    // then (期待する結果): B のスナップショットには両方の ID が含まれる
    let snapshot_b = next_json(&mut client_b).await;
    let sessions_b = snapshot_b["sessions"].as_object().unwrap();
    assert_eq!(sessions_b.len(), 2);
    assert!(sessions_b.contains_key(&id_a));
    assert!(sessions_b.contains_key(&id_b));
    assert_spawn_position(&sessions_b[&id_b]["position"]);

    // A にも B を含む world-state がブロードキャストされる
    let broadcast_a = next_of_type(&mut client_a, "world-state").await;
    let sessions_a = broadcast_a["sessions"].as_object().unwrap();
    assert_eq!(sessions_a.len(), 2);
    assert!(sessions_a.contains_key(&id_b));
}

#[tokio::test]
async fn test_position_update_propagates() {
    // テスト項目: 位置更新が全クライアントに正確に伝わり、送信者には
    // composer-reset が先に届く（自己エコーは仕様どおり）
    // given (前提条件): A, B が接続済み
    let server = TestServer::start(19092).await;
    let mut client_a = connect(&server).await;
    let welcome_a = next_json(&mut client_a).await;
    let id_a = welcome_a["session_id"].as_str().unwrap().to_string();
    next_json(&mut client_a).await;

    let mut client_b = connect(&server).await;
    next_json(&mut client_b).await; // welcome
    next_json(&mut client_b).await; // snapshot
    next_of_type(&mut client_a, "world-state").await; // B 参加の通知

    // when (操作): A が位置を送信
    client_a
        .send(Message::Text("POS:1.5,0.5,-2.0".into()))
        .await
        .unwrap();

    // then (期待する結果): A はまず composer-reset を受け取る
    let ack = next_json(&mut client_a).await;
    assert_eq!(ack["type"], "composer-reset");

    // 続いて A 自身にも world-state がエコーされ、位置が正確に一致する
    let echo = next_of_type(&mut client_a, "world-state").await;
    assert_eq!(
        echo["sessions"][&id_a]["position"],
        serde_json::json!([1.5, 0.5, -2.0])
    );

    // B にも同じ位置が届く
    let broadcast_b = next_of_type(&mut client_b, "world-state").await;
    assert_eq!(
        broadcast_b["sessions"][&id_a]["position"],
        serde_json::json!([1.5, 0.5, -2.0])
    );
}

#[tokio::test]
async fn test_malformed_position_is_discarded() {
    // テスト項目: 解釈できない位置フレームはレジストリを変更せず、
    // それでもブロードキャストは発火する
    // given (前提条件):
    let server = TestServer::start(19093).await;
    let mut client = connect(&server).await;
    let welcome = next_json(&mut client).await;
    let session_id = welcome["session_id"].as_str().unwrap().to_string();
    let snapshot = next_json(&mut client).await;
    let spawn_position = snapshot["sessions"][&session_id]["position"].clone();

    // when (操作):
    client
        .send(Message::Text("POS:garbage".into()))
        .await
        .unwrap();

    // then (期待する結果): composer-reset の後の world-state で位置が
    // スポーン時のまま変わっていない
    let ack = next_json(&mut client).await;
    assert_eq!(ack["type"], "composer-reset");

    let broadcast = next_of_type(&mut client, "world-state").await;
    assert_eq!(broadcast["sessions"][&session_id]["position"], spawn_position);
    // 不正フレームはチャットログにも入らない
    assert!(broadcast["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_log_bounded_to_15_entries() {
    // テスト項目: 16 件のチャットを送ると最新 15 件だけが残る（新しい順）
    // given (前提条件):
    let server = TestServer::start(19094).await;
    let mut client = connect(&server).await;
    next_json(&mut client).await; // welcome
    next_json(&mut client).await; // snapshot

    // when (操作): 16 件送信し、それぞれの ack とブロードキャストを待つ
    let mut last_broadcast = Value::Null;
    for i in 1..=16 {
        client
            .send(Message::Text(format!("msg-{i}").into()))
            .await
            .unwrap();
        let ack = next_json(&mut client).await;
        assert_eq!(ack["type"], "composer-reset");
        last_broadcast = next_of_type(&mut client, "world-state").await;
    }

    // then (期待する結果):
    let messages = last_broadcast["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 15);
    assert_eq!(messages[0], "msg-16");
    assert_eq!(messages[14], "msg-2");
    assert!(!messages.iter().any(|m| m == "msg-1"));
}

#[tokio::test]
async fn test_disconnect_removes_session_from_broadcast() {
    // テスト項目: 切断したセッションが残りのクライアントの world-state から消える
    // given (前提条件): A, B が接続済み
    let server = TestServer::start(19095).await;
    let mut client_a = connect(&server).await;
    let welcome_a = next_json(&mut client_a).await;
    let id_a = welcome_a["session_id"].as_str().unwrap().to_string();
    next_json(&mut client_a).await;

    let mut client_b = connect(&server).await;
    let welcome_b = next_json(&mut client_b).await;
    let id_b = welcome_b["session_id"].as_str().unwrap().to_string();
    next_json(&mut client_b).await;
    next_of_type(&mut client_a, "world-state").await; // B 参加の通知

    // when (操作): B が切断
    client_b.close(None).await.unwrap();

    // then (期待する結果): A には B のいない world-state が届く
    let broadcast = next_of_type(&mut client_a, "world-state").await;
    let sessions = broadcast["sessions"].as_object().unwrap();
    assert_eq!(sessions.len(), 1);
    assert!(sessions.contains_key(&id_a));
    assert!(!sessions.contains_key(&id_b));
}
