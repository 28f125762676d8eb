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

use std::time::{Duration, Instant};

use async_trait::async_trait;
use encoding_rs::Encoding;
use reqwest::Client;
use tracing::debug;

use crate::config::settings::SourceSettings;
use crate::engines::traits::{EngineError, FetchEngine, FetchResponse};

/// 基于reqwest的HTTP抓取引擎
///
/// 响应体按Content-Type声明的字符集解码；源站点通常
/// 以ISO-8859-1输出且不总是声明，故保留可配置的回退字符集
pub struct ReqwestEngine {
    client: Client,
    fallback: &'static Encoding,
}

impl ReqwestEngine {
    /// 创建新的抓取引擎实例
    pub fn new(settings: &SourceSettings) -> Result<Self, EngineError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        let fallback = Encoding::for_label(settings.fallback_charset.as_bytes())
            .unwrap_or(encoding_rs::WINDOWS_1252);
        Ok(Self { client, fallback })
    }

    fn charset_for(&self, content_type: &str) -> &'static Encoding {
        content_type
            .split(';')
            .filter_map(|part| part.trim().strip_prefix("charset="))
            .filter_map(|label| Encoding::for_label(label.trim_matches('"').as_bytes()))
            .next()
            .unwrap_or(self.fallback)
    }
}

#[async_trait]
impl FetchEngine for ReqwestEngine {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, EngineError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::HttpStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        let bytes = response.bytes().await?;
        let (content, _, _) = self.charset_for(&content_type).decode(&bytes);

        let response_time_ms = start.elapsed().as_millis() as u64;
        debug!("Fetched {} ({} bytes) in {}ms", url, bytes.len(), response_time_ms);

        Ok(FetchResponse {
            status_code: status.as_u16(),
            content: content.into_owned(),
            content_type,
            response_time_ms,
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}
