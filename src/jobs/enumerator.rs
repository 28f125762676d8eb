// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::debug;

use crate::jobs::descriptor::JobDescriptor;
use crate::reference::tables::ReferenceTables;
use crate::utils::errors::ConfigurationError;

/// 按固定模板构建结果页URL
///
/// 路径结构指向源站点的真实目录布局，必须逐字节一致
pub fn build_results_url(
    base_url: &str,
    province_id: &str,
    race_id: &str,
    district_id: &str,
) -> String {
    format!("{base_url}/dat{province_id}/D{race_id}{district_id}.htm")
}

/// 枚举全部抓取任务
///
/// 选区按字典序升序、职位按该省的配置顺序迭代，
/// 输出顺序因此是确定的。纯计算，不做任何I/O
pub fn enumerate_jobs(
    tables: &ReferenceTables,
    base_url: &str,
) -> Result<Vec<JobDescriptor>, ConfigurationError> {
    let mut jobs = Vec::new();

    for district_id in tables.distritos().keys() {
        let province_id =
            district_id
                .get(..2)
                .ok_or_else(|| ConfigurationError::UnknownProvince {
                    district_id: district_id.clone(),
                    province_id: String::new(),
                })?;
        let races = tables.races_for_province(province_id).ok_or_else(|| {
            ConfigurationError::UnknownProvince {
                district_id: district_id.clone(),
                province_id: province_id.to_string(),
            }
        })?;

        for race_id in races {
            let race_name = ReferenceTables::race_name(province_id, race_id).ok_or_else(|| {
                ConfigurationError::UnknownRace {
                    race_id: race_id.to_string(),
                }
            })?;

            let job = JobDescriptor {
                url: build_results_url(base_url, province_id, race_id, district_id),
                district_id: district_id.clone(),
                province_id: province_id.to_string(),
                race_id: race_id.to_string(),
                race_name: race_name.to_string(),
            };
            debug!("Generated job {:?}", job);
            jobs.push(job);
        }
    }

    Ok(jobs)
}
