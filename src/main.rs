mod args;

use args::Cli;
use anyhow::Context;
use clap::Parser;
use rental_finder::config::Config;
use rental_finder::engine::{FilterSet, ListingView};
use rental_finder::models::ListingSnapshot;
use rental_finder::sources::{
    save_snapshot, ApiParams, JsonFileSource, PropertySource, RentalApiSource, Scope,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let source: Box<dyn PropertySource> = match &cli.file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => {
            let params = ApiParams {
                base_url: cli.api_url.clone().unwrap_or(config.api_url.clone()),
                scope: cli.landlord.map_or(Scope::All, Scope::Landlord),
                timeout_secs: config.http_timeout_secs,
            };
            Box::new(RentalApiSource::with_params(params)?)
        }
    };

    let properties = source
        .fetch()
        .await
        .with_context(|| format!("Failed to load properties from {}", source.source_name()))?;
    info!("✅ Loaded {} properties", properties.len());

    if let Some(path) = &cli.save {
        let snapshot = ListingSnapshot::new(source.source_name(), properties.clone());
        save_snapshot(path, &snapshot).await?;
    }

    let page_size = cli.page_size.unwrap_or(config.page_size);
    let mut view = ListingView::new(properties, page_size);
    if let Some(ids) = &cli.favourites {
        view.set_favourites(Some(ids.iter().copied().collect()));
    }
    view.apply_filters(FilterSet::from_input(&cli.filter_input()));
    let shown = view.go_to_page(cli.page);
    if shown != cli.page {
        info!("Page {} is out of range, showing page {}", cli.page, shown);
    }

    let chips = view.active_filters();
    if !chips.is_empty() {
        let labels: Vec<String> = chips.iter().map(|c| c.to_string()).collect();
        println!("Filters: {}", labels.join(" | "));
        println!();
    }

    let page = view.page();
    let offset = (page.page - 1) * page.page_size;
    for (i, property) in page.items.iter().enumerate() {
        let price = property
            .price
            .map_or_else(|| "price on request".to_string(), |p| format!("Rs. {}", p));
        println!("{}. {} ({})", offset + i + 1, property.title, price);
        println!(
            "   {} · {} · {}",
            property.room_type, property.city, property.status
        );
        println!(
            "   {} bed, {} bath, {} kitchen",
            property.bedrooms(),
            property.washrooms(),
            property.kitchens()
        );
        if let Some(image) = property.images.first() {
            println!("   Image: {} ({} total)", image, property.images.len());
        }
        println!("   ID: {}", property.property_id);
        println!();
    }

    println!(
        "Page {} of {} ({} matching properties)",
        page.page,
        page.total_pages,
        view.filtered_count()
    );

    Ok(())
}
