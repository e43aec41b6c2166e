use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use ton_ticker_bot::application::errors::BotError;
use ton_ticker_bot::application::messaging::{MessageDispatcher, MessageFormatter, MessageParser};
use ton_ticker_bot::application::services::{AutoPoster, TickerService};
use ton_ticker_bot::domain::entities::CommandRegistry;
use ton_ticker_bot::domain::traits::{Bot, MarketData};
use ton_ticker_bot::infrastructure::adapters::telegram::{TelegramAdapter, UpdatePoller};
use ton_ticker_bot::infrastructure::config::{Config, MarketConfig};
use ton_ticker_bot::infrastructure::liveness;
use ton_ticker_bot::infrastructure::market::BinanceClient;

#[derive(Parser)]
#[command(name = "ton-ticker-bot")]
#[command(about = "Telegram bot for 24h market stats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Bot token (overrides BOT_TOKEN)
    #[arg(short, long, global = true)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Fetch once and print the message the bot would send
    Price {
        /// Print the mood message instead of the stats
        #[arg(long)]
        mood: bool,
    },
    /// Show version
    Version,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Run => rt.block_on(run_bot(cli.token)),
        Commands::Price { mood } => rt.block_on(print_once(mood)),
        Commands::Version => {
            println!("ton-ticker-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_bot(token_override: Option<String>) -> Result<(), BotError> {
    let config = Config::from_env_with_token(token_override)?;

    tracing::info!(
        "Starting ton-ticker-bot: {} -> chat {} every {}s",
        config.market.symbol,
        config.auto_post.chat_id,
        config.auto_post.interval.as_secs()
    );

    let market: Arc<dyn MarketData> = Arc::new(BinanceClient::new(&config.market.api_base)?);
    let telegram = Arc::new(TelegramAdapter::new(&config.telegram.token)?);

    // Start from a clean backlog
    telegram.delete_webhook(true).await?;
    tracing::info!("Webhook removed, pending updates dropped");

    let registry = CommandRegistry::with_defaults();
    if let Err(e) = telegram.register_commands(&registry).await {
        tracing::warn!("Failed to register commands: {}", e);
    }

    let mut parser = MessageParser::new(registry);
    match telegram.fetch_username().await {
        Ok(username) => {
            tracing::info!("Bot started: @{}", username);
            parser = parser.with_bot_username(username);
        }
        Err(e) => tracing::warn!("Failed to fetch bot info: {}", e),
    }

    let formatter = MessageFormatter::new(&config.market.asset_name, &config.market.asset_ticker);
    let ticker = Arc::new(TickerService::new(market, &config.market.symbol, formatter));
    let bot: Arc<dyn Bot> = telegram.clone();

    let dispatcher = Arc::new(MessageDispatcher::with_defaults(parser, bot.clone(), ticker.clone()));
    let poster = AutoPoster::new(ticker, bot, config.auto_post.chat_id)
        .with_interval(config.auto_post.interval);
    let poller = UpdatePoller::new(telegram, dispatcher);

    let liveness_task = tokio::spawn(liveness::serve(config.liveness.port));
    let auto_post = tokio::spawn(poster.run());
    let polling = tokio::spawn(poller.run());

    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal.map_err(|e| BotError::Internal(format!("Failed to listen for shutdown: {}", e)))?;
            tracing::info!("Shutdown signal received, exiting");
            Ok(())
        }
        res = liveness_task => Err(match res {
            Ok(Err(e)) => e,
            Ok(Ok(())) => BotError::Internal("liveness server stopped".to_string()),
            Err(e) => BotError::Internal(format!("liveness server crashed: {}", e)),
        }),
        res = auto_post => Err(BotError::Internal(format!("auto post loop stopped: {:?}", res.err()))),
        res = polling => Err(BotError::Internal(format!("update poller stopped: {:?}", res.err()))),
    }
}

async fn print_once(mood: bool) -> Result<(), BotError> {
    let config = MarketConfig::from_env();
    let market = Arc::new(BinanceClient::new(&config.api_base)?);
    let formatter = MessageFormatter::new(&config.asset_name, &config.asset_ticker);
    let ticker = TickerService::new(market, &config.symbol, formatter);

    let rendered = if mood {
        ticker.mood_message().await?
    } else {
        ticker.stats_message().await?
    };
    println!("{}", rendered.text);
    Ok(())
}
