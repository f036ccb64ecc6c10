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

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::models::scrape_result::ScrapeResult;

/// 抓取结果存储
///
/// 进程内单槽位存储，保存最近一次抓取的结果。
/// 写入为锁内的整体替换，后写覆盖先写，读取方不会观察到部分更新。
#[derive(Debug, Default)]
pub struct ScrapeStore {
    slot: RwLock<Option<ScrapeResult>>,
}

impl ScrapeStore {
    /// 创建一个空的存储实例
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// 槽位是否已填充
    pub fn is_ready(&self) -> bool {
        self.slot.read().is_some()
    }

    /// 写入结果，无条件覆盖之前的值
    pub fn put(&self, result: ScrapeResult) {
        *self.slot.write() = Some(result);
    }

    /// 返回当前载荷的副本，槽位为空时返回None
    pub fn latest(&self) -> Option<serde_json::Value> {
        self.slot.read().as_ref().map(|r| r.payload.clone())
    }

    /// 最近一次写入的时间戳
    pub fn last_fetched_at(&self) -> Option<DateTime<Utc>> {
        self.slot.read().as_ref().map(|r| r.fetched_at)
    }
}
