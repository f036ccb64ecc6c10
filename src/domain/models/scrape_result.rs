// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 抓取结果实体
///
/// 保存最近一次成功抓取的结果。载荷的结构完全由抓取引擎决定，
/// 网关将其视为不透明的JSON值原样存储并返回。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// 目标URL，被抓取的具体网页地址
    pub url: String,
    /// 引擎返回的载荷，按原样存储
    pub payload: serde_json::Value,
    /// 抓取完成时间，并发覆盖时以此判定最后写入
    pub fetched_at: DateTime<Utc>,
}

impl ScrapeResult {
    /// 创建一个新的抓取结果
    ///
    /// # 参数
    ///
    /// * `url` - 被抓取的URL
    /// * `payload` - 引擎返回的载荷
    ///
    /// # 返回值
    ///
    /// 返回一个新的ScrapeResult实例，带有当前时间戳
    pub fn new(url: String, payload: serde_json::Value) -> Self {
        Self {
            url,
            payload,
            fetched_at: Utc::now(),
        }
    }
}
