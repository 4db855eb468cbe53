use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let api_key = std::env::var("POSTCODE_API_KEY").unwrap_or_else(|_| "test".to_string());
    let api_secret = std::env::var("POSTCODE_API_SECRET").unwrap_or_else(|_| "test".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    mock_server::run(listener, &api_key, &api_secret).await
}
