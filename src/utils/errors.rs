// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 配置与参考数据错误类型
///
/// 这一类错误是致命的：参考数据不完整时整个批处理无法进行
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("failed to read district table: {0}")]
    Csv(#[from] csv::Error),

    #[error("unexpected district table header: expected \"id,nombre\", found \"{found}\"")]
    HeaderMismatch { found: String },

    #[error("district row at line {line} is missing the nombre column")]
    MalformedRow { line: u64 },

    #[error("district {district_id} maps to unknown province {province_id}")]
    UnknownProvince {
        district_id: String,
        province_id: String,
    },

    #[error("unknown race code {race_id}")]
    UnknownRace { race_id: String },
}

/// 页面结构错误类型
///
/// 结果页的表结构不符合预期时产生；按任务隔离，
/// 绝不输出不完整的记录
#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("results table #TVOTOS not found")]
    MissingTable,

    #[error("empty row group")]
    EmptyGroup,

    #[error("row group does not start with an agrupación row")]
    MissingOpeningRow,

    #[error("unexpected second agrupación row inside group")]
    UnexpectedOpeningRow,

    #[error("row has no header cell")]
    MissingHeaderCell,

    #[error("header cell has no id attribute")]
    MissingCellId,

    #[error("expected exactly one vote cell, found {found}")]
    VoteCellCandidates { found: usize },

    #[error("invalid vote count {text:?}: {source}")]
    InvalidVoteCount {
        text: String,
        source: std::num::ParseIntError,
    },
}

/// 单个任务的失败类型
///
/// 任务级错误只记录日志并跳过该任务，不影响其余任务
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] crate::engines::traits::EngineError),

    #[error("unexpected page shape: {0}")]
    Shape(#[from] ShapeError),
}
