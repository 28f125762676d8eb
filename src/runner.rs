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

use std::io::{self, Write};

use scraper::Html;
use tracing::{info, warn};

use crate::domain::models::result_record::ResultRecord;
use crate::engines::traits::FetchEngine;
use crate::extract::extractor;
use crate::jobs::descriptor::JobDescriptor;
use crate::output::assembler;
use crate::output::json_writer::ResultWriter;
use crate::utils::errors::ScrapeError;

/// 处理单个任务：抓取页面、提取得票记录并装配输出
pub async fn process_job<E: FetchEngine>(
    engine: &E,
    job: &JobDescriptor,
) -> Result<ResultRecord, ScrapeError> {
    let response = engine.fetch(&job.url).await?;

    // Html is not Send; keep parsing after the last await point
    let document = Html::parse_document(&response.content);
    let votes = extractor::extract_all(&document)?;

    Ok(assembler::assemble(job, votes))
}

/// 运行统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// 成功任务数
    pub ok: usize,
    /// 失败任务数
    pub failed: usize,
}

/// 顺序执行全部任务并写出结果
///
/// 单个任务失败只记录日志并跳过，不产出记录也不影响其余
/// 任务；写出目标的I/O错误则视为致命并向上传播
pub async fn run_jobs<E, W>(
    engine: &E,
    jobs: &[JobDescriptor],
    writer: &mut ResultWriter<W>,
) -> io::Result<RunSummary>
where
    E: FetchEngine,
    W: Write,
{
    let mut summary = RunSummary::default();

    for job in jobs {
        match process_job(engine, job).await {
            Ok(record) => {
                writer.write_record(&record)?;
                info!("Done processing {}", job.url);
                summary.ok += 1;
            }
            Err(e) => {
                warn!("Job {} failed: {}", job.url, e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
