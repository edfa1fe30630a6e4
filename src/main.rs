use anyhow::Context;
use log::info;

use wayfarer::modules::catalog::{Category, RawSearchFilters};
use wayfarer::shared::{utils::init_logger, AppConfig};
use wayfarer::AppState;

const FEATURED_PER_CATEGORY: u32 = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = AppConfig::from_env().context("loading configuration")?;
    let state = AppState::build(&config).context("initializing application state")?;

    for featured in state
        .catalog
        .featured(&Category::ALL, FEATURED_PER_CATEGORY)
        .await
    {
        info!(
            "{}: {} listed, showing {}",
            featured.category,
            featured.total,
            featured.items.len()
        );
        for item in &featured.items {
            info!("  {} ({:.0}) {}", item.title, item.price, item.subtitle);
        }
    }

    let hotels = state
        .catalog
        .search(
            Category::Hotels,
            None,
            None,
            RawSearchFilters::default().with_to("goa"),
        )
        .await
        .context("searching hotels")?;
    info!(
        "Hotels in Goa: {} match(es) via {} path",
        hotels.page.total, hotels.path
    );

    Ok(())
}
