/*
[INPUT]:  GS2_CLIENT_ID / GS2_CLIENT_SECRET environment variables
[OUTPUT]: Namespace listing or the classified error
[POS]:    Examples - one signed GET request
[UPDATE]: When the request surface changes
*/

use gs2_client::*;

/// Example: list account namespaces
#[tokio::main]
async fn main() {
    println!("=== GS2 Signed Request Example ===\n");

    let (client_id, client_secret) = match (
        std::env::var("GS2_CLIENT_ID"),
        std::env::var("GS2_CLIENT_SECRET"),
    ) {
        (Ok(id), Ok(secret)) => (id, secret),
        _ => {
            eprintln!("Set GS2_CLIENT_ID and GS2_CLIENT_SECRET");
            return;
        }
    };

    let client = match Gs2Client::new(Credentials::new(client_id, client_secret), "ap-northeast-1")
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    let endpoint = Endpoint::new("account", "account", "DescribeNamespaces");
    match client.get(endpoint, "/namespace", &[("limit", "10")], None).await {
        Ok(value) => println!("✓ Namespaces: {}", value),
        Err(e) => match e.status() {
            Some(status) => println!("✗ {} error: {}", status, e),
            None => println!("✗ Error: {}", e),
        },
    }
}
