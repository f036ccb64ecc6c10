// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Extension;
use scraperd::config::settings::Settings;
use scraperd::engines::cookie_loader::FileCookieLoader;
use scraperd::engines::fetch_engine::FetchEngine;
use scraperd::engines::traits::{CookieLoader, ScraperEngine};
use scraperd::infrastructure::store::ScrapeStore;
use scraperd::presentation::routes;
use scraperd::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting scraperd...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize Components
    let store = Arc::new(ScrapeStore::new());
    let engine: Arc<dyn ScraperEngine> = Arc::new(FetchEngine::new(&settings.scraper)?);
    let cookie_loader: Arc<dyn CookieLoader> =
        Arc::new(FileCookieLoader::new(settings.cookies.path.clone()));
    info!(
        "Engine '{}' and cookie loader '{}' initialized",
        engine.name(),
        cookie_loader.name()
    );

    // 4. Start HTTP server
    let app = routes::routes()
        .layer(Extension(store))
        .layer(Extension(engine))
        .layer(Extension(cookie_loader))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
