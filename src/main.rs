use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use kiosk::content::{DirFetcher, HttpFetcher, PageFetcher, SiteIndex, parse_site_index};
use kiosk::core::state::App;
use kiosk::tui;

#[derive(Parser)]
#[command(name = "kiosk", about = "Terminal shell for fragment-based static sites")]
struct Args {
    /// Site root: a base URL (http/https) or a local directory containing
    /// index.html and pages/
    site: String,

    /// Page key to open at startup (the address fragment)
    #[arg(short, long, default_value = "home")]
    page: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // File logger - writes to kiosk.log in the current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("kiosk.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Kiosk starting up for site: {}", args.site);

    let fetcher: Arc<dyn PageFetcher> =
        if args.site.starts_with("http://") || args.site.starts_with("https://") {
            Arc::new(HttpFetcher::new(args.site.clone()))
        } else {
            Arc::new(DirFetcher::new(args.site.clone().into()))
        };

    // Bootstrap from the entry document; nothing can render without it.
    let index_html = match fetcher.fetch_index().await {
        Ok(html) => html,
        Err(e) => {
            log::error!("failed to fetch site index: {}", e);
            eprintln!("kiosk: failed to fetch the site index: {e}");
            std::process::exit(1);
        }
    };
    let SiteIndex { home, nav, slides } = match parse_site_index(&index_html) {
        Ok(site) => site,
        Err(e) => {
            log::error!("failed to parse site index: {}", e);
            eprintln!("kiosk: the site index is unusable: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "site bootstrapped: {} nav entries, {} banner slides",
        nav.len(),
        slides.len()
    );

    let app = App::new(fetcher, home, nav);
    tui::run(app, slides, args.page)
}
