use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use etvas_sign::{Config, Dispatcher, RequestBuilder, RequestSigner};
use failure::Fail;
use tracing_subscriber::EnvFilter;

/// Sign a request to the Etvas API and send it.
///
/// Credentials and the base URL are read from ETVAS_API_KEY, ETVAS_SIGN_SECRET and
/// ETVAS_API_BASE_URL, or from a `.env` file.
#[derive(Parser)]
#[clap(name = "etvas-request")]
struct Args {
    /// Request path, e.g. /greet
    path: String,
    #[clap(long, short = 'X', default_value = "GET")]
    method: String,
    /// Query string, without the leading `?`
    #[clap(long)]
    query: Option<String>,
    /// Value for the x-etvas-context header
    #[clap(long)]
    context: Option<String>,
    #[clap(long)]
    content_type: Option<String>,
    /// Request body, sent and hashed verbatim
    #[clap(long)]
    body: Option<String>,
    /// Override the timestamp (seconds since the epoch)
    #[clap(long)]
    timestamp: Option<u64>,
    /// Print the signed headers instead of sending the request
    #[clap(long)]
    sign_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()
        .map_err(Fail::compat)
        .context("reading configuration")?;

    let mut builder = RequestBuilder::new(&args.method, &args.path)
        .query(args.query.as_deref())
        .context(args.context.as_deref())
        .content_type(args.content_type.as_deref())
        .body(args.body.as_deref());
    if let Some(ts) = args.timestamp {
        builder = builder.timestamp(ts);
    }
    let request = builder.request();

    if args.sign_only {
        let signer = RequestSigner::from_config(&config).map_err(Fail::compat)?;
        let headers = signer.sign(&request).map_err(Fail::compat)?;
        for (name, value) in headers.pairs() {
            println!("{}: {}", name, value);
        }
        return Ok(());
    }

    let dispatcher = Dispatcher::new(&config).map_err(Fail::compat)?;
    let response = dispatcher.send(&request).await.map_err(Fail::compat)?;
    println!("{}", response.status());
    println!("{}", response.text().await?);
    Ok(())
}
