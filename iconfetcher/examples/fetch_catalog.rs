use iconfetcher::CatalogClient;

#[tokio::main]
async fn main() {
    let client = CatalogClient::new();

    match client.fetch_icons().await {
        Ok(icons) => {
            println!("Fetched {} icons from the catalog.", icons.len());
            for icon in icons.iter().take(10) {
                println!(
                    "{}  tags={:?}  category={:?}",
                    icon.name.as_deref().unwrap_or("<unnamed>"),
                    icon.tags,
                    icon.category
                );
            }
        }
        Err(e) => {
            eprintln!("Error fetching catalog: {}", e);
        }
    }
}
