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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、抓取引擎和Cookie存储等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 抓取引擎配置
    pub scraper: ScraperSettings,
    /// Cookie存储配置
    pub cookies: CookieSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 抓取引擎配置设置
#[derive(Debug, Deserialize)]
pub struct ScraperSettings {
    /// 单次请求超时时间（秒）
    pub timeout: u64,
    /// 请求使用的User-Agent
    pub user_agent: String,
}

/// Cookie存储配置设置
#[derive(Debug, Deserialize)]
pub struct CookieSettings {
    /// Cookie存储文件路径
    pub path: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default scraper settings
            .set_default("scraper.timeout", 30)?
            .set_default(
                "scraper.user_agent",
                "Mozilla/5.0 (compatible; scraperd/0.1; +https://github.com/Kirky-X/scraperd)",
            )?
            // Default cookie store settings
            .set_default("cookies.path", "cookies.json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SCRAPERD").separator("__"));

        builder.build()?.try_deserialize()
    }
}
