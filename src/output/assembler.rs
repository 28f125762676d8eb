// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;

use crate::domain::models::result_record::ResultRecord;
use crate::domain::models::vote_record::VoteRecord;
use crate::jobs::descriptor::JobDescriptor;

/// 合并任务元数据与提取出的得票列表，加盖捕获时间戳
///
/// 时间戳取装配完成时刻的墙钟时间；每个任务恰好产出一条
pub fn assemble(job: &JobDescriptor, votes: Vec<VoteRecord>) -> ResultRecord {
    ResultRecord {
        source_url: job.url.clone(),
        district_id: job.district_id.clone(),
        province_id: job.province_id.clone(),
        race_id: job.race_id.clone(),
        race_name: job.race_name.clone(),
        votes,
        timestamp: Utc::now(),
    }
}
