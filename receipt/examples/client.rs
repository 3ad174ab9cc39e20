use decision_receipt::{ApiConfig, DecisionApi, ReceiptApi, SelectedFile};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;
    let api = ReceiptApi::new(config.clone());

    let pdf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("policy.pdf"));

    println!("🔍 Testing Decision Receipt client against {}", config.base_url);

    // Upload
    println!("\n📚 Upload {}:", pdf.display());
    let file = SelectedFile::from_path(&pdf).await?;
    let upload = api.upload(&file).await?;
    println!("Pages indexed: {:?}", upload.pages_indexed);

    // Query
    println!("\n🔍 Query Test:");
    let response = api.query("What is the refund window?").await?;
    for item in &response.results {
        println!("Page {} ({}): {}", item.page, item.confidence_percent(), item.policy_text);
    }

    println!("\n✅ Client test completed!");
    Ok(())
}
