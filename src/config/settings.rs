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
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 源站点配置
    pub source: SourceSettings,
    /// 参考数据配置
    pub reference: ReferenceSettings,
    /// 输出配置
    pub output: OutputSettings,
}

/// 源站点配置设置
#[derive(Debug, Deserialize)]
pub struct SourceSettings {
    /// 结果页URL基址
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent请求头
    pub user_agent: String,
    /// 响应头未声明字符集时的回退字符集
    pub fallback_charset: String,
}

/// 参考数据配置设置
#[derive(Debug, Deserialize)]
pub struct ReferenceSettings {
    /// 选区CSV文件路径
    pub distritos_csv: String,
}

/// 输出配置设置
#[derive(Debug, Deserialize)]
pub struct OutputSettings {
    /// 输出文件路径（JSON行格式）
    pub path: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 先应用内置默认值，再叠加可选的配置文件与环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Source site defaults
            .set_default(
                "source.base_url",
                "http://www.primarias2011.gob.ar/paginas/paginas",
            )?
            .set_default("source.timeout_secs", 30)?
            .set_default("source.user_agent", "Mozilla/5.0 (compatible; escrutinio/0.1)")?
            .set_default("source.fallback_charset", "iso-8859-1")?
            // Reference data defaults
            .set_default("reference.distritos_csv", "data/distritos.csv")?
            // Output defaults
            .set_default("output.path", "resultados.jsonl")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("ESCRUTINIO").separator("__"));

        builder.build()?.try_deserialize()
    }
}
