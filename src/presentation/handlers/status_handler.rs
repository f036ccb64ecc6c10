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

use crate::application::dto::scrape_response::StatusDto;
use crate::infrastructure::store::ScrapeStore;

pub async fn get_status(Extension(store): Extension<Arc<ScrapeStore>>) -> Json<StatusDto> {
    let status = if store.is_ready() {
        "ready"
    } else {
        "not ready"
    };

    Json(StatusDto {
        status: status.to_string(),
    })
}
