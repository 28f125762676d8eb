// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::vote_record::VoteRecord;

/// 单个任务的最终输出记录
///
/// 合并任务元数据、提取出的得票列表与捕获时间戳。
/// 每个任务恰好产出一条，不跨任务合并
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// 来源页URL
    pub source_url: String,
    /// 选区ID（4位数字串）
    pub district_id: String,
    /// 省份ID（选区ID的前两位）
    pub province_id: String,
    /// 职位代码
    pub race_id: String,
    /// 职位显示名称
    pub race_name: String,
    /// 按提取顺序排列的得票记录
    pub votes: Vec<VoteRecord>,
    /// 装配完成时刻的捕获时间戳（Unix秒）
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
}
