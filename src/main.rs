use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spotirecap_smoke::checker::Checker;
use spotirecap_smoke::endpoints::checklist;
use spotirecap_smoke::report;

#[derive(Parser, Debug)]
#[command(name = "spotirecap_smoke")]
#[command(about = "Smoke test for Spotirecap API endpoints", long_about = None)]
struct Opts {
	/// Base URL of the API under test; falls back to SMOKE_BASE_URL.
	#[arg(long)]
	base: Option<String>,
	/// Bearer token; falls back to SMOKE_TOKEN, then the shipped placeholder.
	#[arg(long)]
	token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// Load local .env first so RUST_LOG and SMOKE_* set there are visible.
	dotenv().ok();
	let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::new(env_filter))
		.with(tracing_subscriber::fmt::layer())
		.try_init()
		.ok();

	let opts = Opts::parse();
	let base = opts.base
		.or_else(|| std::env::var("SMOKE_BASE_URL").ok())
		.unwrap_or_else(|| "http://localhost:8080".into());
	let token = opts.token
		.or_else(|| std::env::var("SMOKE_TOKEN").ok())
		.unwrap_or_else(|| "placeholder".into());

	let checker = Checker::new(&base, &token);
	println!("{}", report::header());
	for endpoint in checklist() {
		let line = report::render_line(&checker.check(&endpoint).await);
		println!("{}", line);
	}
	Ok(())
}
