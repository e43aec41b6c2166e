//! Telegram adapter and the full command flow against mocked Bot API and ticker
//! Run with: cargo test --test telegram_flow_test

use std::sync::Arc;

use mockito::{Matcher, Server};
use serde_json::json;
use ton_ticker_bot::application::errors::BotError;
use ton_ticker_bot::application::messaging::formatter::refresh_keyboard;
use ton_ticker_bot::application::messaging::{MessageDispatcher, MessageFormatter, MessageParser};
use ton_ticker_bot::application::services::{AutoPoster, TickerService};
use ton_ticker_bot::domain::entities::CommandRegistry;
use ton_ticker_bot::domain::traits::Bot;
use ton_ticker_bot::infrastructure::adapters::telegram::TelegramAdapter;
use ton_ticker_bot::infrastructure::market::BinanceClient;

const TOKEN: &str = "123456:TEST";

fn adapter(server: &Server) -> TelegramAdapter {
    TelegramAdapter::new(TOKEN).unwrap().with_api_base(server.url())
}

fn method_path(method: &str) -> String {
    format!("/bot{}/{}", TOKEN, method)
}

fn ok_message(message_id: i64) -> String {
    json!({
        "ok": true,
        "result": { "message_id": message_id, "date": 0, "chat": { "id": 42, "type": "private" } }
    })
    .to_string()
}

#[tokio::test]
async fn test_send_message_uses_html_and_inline_keyboard() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", method_path("sendMessage").as_str())
        .match_body(Matcher::PartialJson(json!({
            "chat_id": 42,
            "text": "<b>hi</b>",
            "parse_mode": "HTML",
            "reply_markup": {
                "inline_keyboard": [[{ "text": "🔄 Refresh", "callback_data": "refresh_price" }]]
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ok_message(1001))
        .create_async()
        .await;

    let id = adapter(&server)
        .send_message(42, "<b>hi</b>", Some(&refresh_keyboard()))
        .await
        .unwrap();

    assert_eq!(id, 1001);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_error_is_reported() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", method_path("sendMessage").as_str())
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#)
        .create_async()
        .await;

    let err = adapter(&server).send_message(1, "x", None).await.unwrap_err();

    match err {
        BotError::Api(msg) => assert!(msg.contains("chat not found")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_edit_not_modified_counts_as_success() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", method_path("editMessageText").as_str())
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"ok": false, "error_code": 400, "description": "Bad Request: message is not modified: specified new message content and reply markup are exactly the same"}"#,
        )
        .create_async()
        .await;

    adapter(&server).edit_message(42, 7, "same", None).await.unwrap();
}

#[tokio::test]
async fn test_delete_webhook_drops_pending_updates() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", method_path("deleteWebhook").as_str())
        .match_body(Matcher::PartialJson(json!({ "drop_pending_updates": true })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "result": true, "description": "Webhook was deleted"}"#)
        .create_async()
        .await;

    adapter(&server).delete_webhook(true).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_price_command_end_to_end() {
    let mut market_server = Server::new_async().await;
    let _ticker = market_server
        .mock("GET", "/api/v3/ticker/24hr")
        .match_query(Matcher::UrlEncoded("symbol".into(), "TONUSDT".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"lastPrice": "5.1234", "highPrice": "5.5", "lowPrice": "4.9", "priceChangePercent": "2.5"}"#)
        .create_async()
        .await;

    let mut tg_server = Server::new_async().await;
    let send = tg_server
        .mock("POST", method_path("sendMessage").as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({ "chat_id": 42, "parse_mode": "HTML" })),
            Matcher::Regex(r"\$5\.1234".to_string()),
            Matcher::Regex(r"\+2\.50%".to_string()),
            Matcher::Regex("refresh_price".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ok_message(5))
        .create_async()
        .await;

    let market = Arc::new(BinanceClient::new(market_server.url()).unwrap());
    let ticker = Arc::new(TickerService::new(market, "TONUSDT", MessageFormatter::default()));
    let bot: Arc<dyn Bot> = Arc::new(adapter(&tg_server));
    let parser = MessageParser::new(CommandRegistry::with_defaults());
    let dispatcher = MessageDispatcher::with_defaults(parser, bot, ticker);

    dispatcher.dispatch(dispatcher.parser().parse(42, "/tonprice")).await;

    send.assert_async().await;
}

#[tokio::test]
async fn test_refresh_failure_only_answers_callback() {
    let mut market_server = Server::new_async().await;
    let _ticker = market_server
        .mock("GET", "/api/v3/ticker/24hr")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let mut tg_server = Server::new_async().await;
    let edit = tg_server
        .mock("POST", method_path("editMessageText").as_str())
        .expect(0)
        .create_async()
        .await;
    let answer = tg_server
        .mock("POST", method_path("answerCallbackQuery").as_str())
        .match_body(Matcher::PartialJson(json!({
            "callback_query_id": "cb-9",
            "text": "❌ Error updating price"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "result": true}"#)
        .create_async()
        .await;

    let market = Arc::new(BinanceClient::new(market_server.url()).unwrap());
    let ticker = Arc::new(TickerService::new(market, "TONUSDT", MessageFormatter::default()));
    let bot: Arc<dyn Bot> = Arc::new(adapter(&tg_server));
    let parser = MessageParser::new(CommandRegistry::with_defaults());
    let dispatcher = MessageDispatcher::with_defaults(parser, bot, ticker);

    let press = dispatcher
        .parser()
        .parse_callback(42, "cb-9", Some("refresh_price"))
        .with_message_id(77);
    dispatcher.dispatch(press).await;

    edit.assert_async().await;
    answer.assert_async().await;
}

#[tokio::test]
async fn test_auto_post_sends_to_configured_chat() {
    let mut market_server = Server::new_async().await;
    let _ticker = market_server
        .mock("GET", "/api/v3/ticker/24hr")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"lastPrice": 1.5, "highPrice": 2, "lowPrice": 1, "priceChangePercent": -0.5}"#)
        .create_async()
        .await;

    let mut tg_server = Server::new_async().await;
    let send = tg_server
        .mock("POST", method_path("sendMessage").as_str())
        .match_body(Matcher::PartialJson(json!({ "chat_id": -1001234567890_i64 })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ok_message(9))
        .create_async()
        .await;

    let market = Arc::new(BinanceClient::new(market_server.url()).unwrap());
    let ticker = Arc::new(TickerService::new(market, "TONUSDT", MessageFormatter::default()));
    let bot: Arc<dyn Bot> = Arc::new(adapter(&tg_server));

    let id = AutoPoster::new(ticker, bot, -1001234567890).post_once().await.unwrap();

    assert_eq!(id, 9);
    send.assert_async().await;
}
