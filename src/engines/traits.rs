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
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// IO失败
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 无效的URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// 载荷无法解析
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 抓取引擎特质
///
/// 外部抓取协作方的接口。载荷结构由实现方决定，
/// 网关按不透明JSON值处理。
#[async_trait]
pub trait ScraperEngine: Send + Sync {
    /// 抓取指定URL并返回结构化载荷
    async fn scrape(&self, url: &str) -> Result<serde_json::Value, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}

/// Cookie加载器特质
///
/// 外部Cookie协作方的接口，每次调用重新加载，与抓取状态无关。
#[async_trait]
pub trait CookieLoader: Send + Sync {
    /// 加载Cookie载荷，空存储返回None
    async fn load_cookies(&self) -> Result<Option<serde_json::Value>, EngineError>;

    /// 加载器名称
    fn name(&self) -> &'static str;
}
