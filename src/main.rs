#[tokio::main]
async fn main() {
    storefront_backend::run().await;
}
