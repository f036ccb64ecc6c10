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

use axum::{extract::Extension, Json};
use std::sync::Arc;
use tracing::info;

use crate::application::dto::scrape_request::ScrapeRequestDto;
use crate::application::dto::scrape_response::ScrapeAckDto;
use crate::domain::models::scrape_result::ScrapeResult;
use crate::engines::traits::ScraperEngine;
use crate::infrastructure::store::ScrapeStore;
use crate::presentation::errors::ApiError;
use crate::utils::validators;

/// 抓取完成后返回的确认消息
///
/// 消息措辞属于对外接口契约，抓取实际在响应前同步完成
const SCRAPE_ACK_MESSAGE: &str = "Data scraping initiated";

pub async fn create_scrape(
    Extension(store): Extension<Arc<ScrapeStore>>,
    Extension(engine): Extension<Arc<dyn ScraperEngine>>,
    Json(payload): Json<ScrapeRequestDto>,
) -> Result<Json<ScrapeAckDto>, ApiError> {
    // Validation happens before the engine is touched, so a bad request
    // never disturbs the stored result.
    let url = validators::non_empty_url(payload.url.as_deref()).ok_or(ApiError::MissingUrl)?;

    let result = engine.scrape(url).await?;

    // Unconditional overwrite, even for null/empty payloads. Last write wins.
    store.put(ScrapeResult::new(url.to_string(), result));
    info!("Scrape completed via engine '{}' for {}", engine.name(), url);

    Ok(Json(ScrapeAckDto {
        message: SCRAPE_ACK_MESSAGE.to_string(),
    }))
}

pub async fn get_data(
    Extension(store): Extension<Arc<ScrapeStore>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    store.latest().map(Json).ok_or(ApiError::NoData)
}
