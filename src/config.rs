use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    pub scheduling_api_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .unwrap_or(5000);

        let bind_address = format!("{}:{}", host, port)
            .parse()
            .expect("Invalid bind address");

        let scheduling_api_url = std::env::var("SCHEDULING_API_URL")
            .unwrap_or_else(|_| "http://localhost:3333".to_string());

        Self {
            bind_address,
            scheduling_api_url,
        }
    }
}
