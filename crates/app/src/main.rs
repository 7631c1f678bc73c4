use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_app::{AppConfig, CatalogViewModel};
use catalog_client::{ProductRepository, ProductsApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_app=info,catalog_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env();
    let api = ProductsApi::from_config(&config.client).context("Failed to build HTTP client")?;
    tracing::info!(api_url = %api.api_url(), "Loading catalog");

    let mut catalog = CatalogViewModel::new(api).with_items_per_page(config.items_per_page);
    catalog.init().await;

    if let Some(term) = std::env::args().nth(1) {
        catalog.set_search_term(&term);
        catalog.perform_search();
    }

    print_page(&catalog);
    Ok(())
}

fn print_page<R: ProductRepository>(catalog: &CatalogViewModel<R>) {
    if !catalog.has_results() {
        println!("No hay productos");
        return;
    }

    println!(
        "{:<10}  {:<24}  {:<40}  {:<10}  {:<10}",
        "ID", "Nombre", "Descripción", "Liberación", "Revisión"
    );
    for product in catalog.paged_records() {
        println!(
            "{:<10}  {:<24}  {:<40}  {:<10}  {:<10}",
            product.id,
            truncate(&product.name, 24),
            truncate(&product.description, 40),
            CatalogViewModel::<R>::format_date_for_table(Some(&product.release_date)),
            CatalogViewModel::<R>::format_date_for_table(Some(&product.revision_date)),
        );
    }

    let info = catalog.pagination_info();
    println!(
        "\n{}-{} de {} resultados · página {} de {} {:?}",
        info.start,
        info.end,
        catalog.filtered_records().len(),
        catalog.current_page(),
        catalog.total_pages(),
        catalog.visible_page_window(),
    );
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let mut out: String = value.chars().take(max - 1).collect();
        out.push('…');
        out
    }
}
