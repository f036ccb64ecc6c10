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

use serde::{Deserialize, Serialize};

/// 抓取确认响应数据传输对象
///
/// 抓取完成后返回给客户端的确认消息
#[derive(Debug, Deserialize, Serialize)]
pub struct ScrapeAckDto {
    /// 确认消息
    pub message: String,
}

/// 状态响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct StatusDto {
    /// 网关状态："ready" 或 "not ready"
    pub status: String,
}
