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

use std::fs::File;
use std::io::BufWriter;

use escrutinio::config::settings::Settings;
use escrutinio::engines::reqwest_engine::ReqwestEngine;
use escrutinio::jobs::enumerator;
use escrutinio::output::json_writer::ResultWriter;
use escrutinio::reference::tables::ReferenceTables;
use escrutinio::runner;
use escrutinio::utils::telemetry;
use tracing::info;

/// 主函数
///
/// 一次性批处理入口：加载配置与参考数据，枚举全部任务并
/// 顺序执行，结果逐行写入输出文件
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting escrutinio...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Load reference tables (fatal on failure)
    let tables = ReferenceTables::load(&settings.reference.distritos_csv)?;

    // 4. Enumerate jobs
    let jobs = enumerator::enumerate_jobs(&tables, &settings.source.base_url)?;
    info!("Generated {} jobs", jobs.len());

    // 5. Fetch, extract and write, one job at a time
    let engine = ReqwestEngine::new(&settings.source)?;
    let file = File::create(&settings.output.path)?;
    let mut writer = ResultWriter::new(BufWriter::new(file));

    let summary = runner::run_jobs(&engine, &jobs, &mut writer).await?;
    writer.flush()?;

    info!(
        "Finished: {} jobs ok, {} failed, output written to {}",
        summary.ok, summary.failed, settings.output.path
    );
    Ok(())
}
