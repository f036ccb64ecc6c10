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

use async_trait::async_trait;
use scraper::{Html, Selector};
use serde_json::json;
use std::time::{Duration, Instant};
use url::Url;

use crate::config::settings::ScraperSettings;
use crate::engines::traits::{EngineError, ScraperEngine};

/// 文本摘要的最大长度（字符）
const TEXT_EXCERPT_LIMIT: usize = 2000;

/// 抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎，将页面解析为结构化JSON载荷
pub struct FetchEngine {
    client: reqwest::Client,
}

impl FetchEngine {
    /// 根据配置创建抓取引擎
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取引擎配置
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchEngine)` - 创建成功的引擎
    /// * `Err(EngineError)` - HTTP客户端构建失败
    pub fn new(settings: &ScraperSettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout))
            .build()?;

        Ok(Self { client })
    }

    /// 将HTML文档提取为结构化载荷
    fn extract(url: &str, status_code: u16, body: &str, response_time_ms: u64) -> serde_json::Value {
        let document = Html::parse_document(body);

        let title_selector = Selector::parse("title").unwrap();
        let description_selector = Selector::parse("meta[name='description']").unwrap();
        let body_selector = Selector::parse("body").unwrap();

        let title = document
            .select(&title_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string());

        let description = document
            .select(&description_selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|s| s.trim().to_string());

        let text = document.select(&body_selector).next().map(|el| {
            el.text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
                .chars()
                .take(TEXT_EXCERPT_LIMIT)
                .collect::<String>()
        });

        json!({
            "url": url,
            "status_code": status_code,
            "title": title,
            "description": description,
            "text": text,
            "response_time_ms": response_time_ms,
        })
    }
}

#[async_trait]
impl ScraperEngine for FetchEngine {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `url` - 要抓取的URL
    ///
    /// # 返回值
    ///
    /// * `Ok(Value)` - 解析后的结构化载荷
    /// * `Err(EngineError)` - 抓取过程中出现的错误
    async fn scrape(&self, url: &str) -> Result<serde_json::Value, EngineError> {
        let parsed = Url::parse(url).map_err(|e| EngineError::InvalidUrl(e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(EngineError::InvalidUrl(format!(
                "unsupported scheme: {}",
                parsed.scheme()
            )));
        }

        let start = Instant::now();
        let response = self.client.get(parsed).send().await?;

        let status_code = response.status().as_u16();
        let body = response.text().await?;
        let response_time_ms = start.elapsed().as_millis() as u64;

        Ok(Self::extract(url, status_code, &body, response_time_ms))
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "fetch"
    }
}
