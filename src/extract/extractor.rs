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

use scraper::{ElementRef, Html, Selector};

use crate::domain::models::vote_record::{Sigla, VoteRecord};
use crate::extract::grouping::group_rows;
use crate::extract::rows::{classify, is_vote_cell, stripe_marker, RowRole};
use crate::utils::errors::ShapeError;
use crate::utils::text_processing::{digits_only, whitespace_cleanup};

fn class_of<'a>(element: &'a ElementRef<'a>) -> &'a str {
    element.value().attr("class").unwrap_or("")
}

fn cell_text(cell: &ElementRef) -> String {
    whitespace_cleanup(&cell.text().collect::<Vec<_>>().join(" "))
}

fn header_cell<'a>(row: &ElementRef<'a>) -> Result<ElementRef<'a>, ShapeError> {
    let th = Selector::parse("th").unwrap();
    row.select(&th).next().ok_or(ShapeError::MissingHeaderCell)
}

fn sigla_of(cell: &ElementRef) -> Result<Sigla, ShapeError> {
    let id = cell.value().attr("id").ok_or(ShapeError::MissingCellId)?;
    Ok(Sigla {
        id: whitespace_cleanup(id),
        nombre: cell_text(cell),
    })
}

/// 在行组内筛选得票单元格并解析票数
///
/// 本期与上一期的得票单元格可能并存，且其中一个为空；
/// 过滤后必须恰好剩下一个非空候选，零个或多个都按
/// 结构异常处理，绝不猜测
fn vote_count(group: &[ElementRef]) -> Result<u64, ShapeError> {
    let td = Selector::parse("td").unwrap();

    let mut candidates = Vec::new();
    for row in group {
        for cell in row.select(&td) {
            if !is_vote_cell(class_of(&cell)) {
                continue;
            }
            let digits = digits_only(&cell_text(&cell));
            if !digits.is_empty() {
                candidates.push(digits);
            }
        }
    }

    match candidates.as_slice() {
        [digits] => digits.parse().map_err(|source| ShapeError::InvalidVoteCount {
            text: digits.clone(),
            source,
        }),
        other => Err(ShapeError::VoteCellCandidates { found: other.len() }),
    }
}

/// 从一个行组装配单条得票记录
///
/// 组的首行必须是agrupación行，其余行按角色分别归入
/// listas或fórmula字段
pub fn extract(group: &[ElementRef]) -> Result<VoteRecord, ShapeError> {
    let (first, rest) = group.split_first().ok_or(ShapeError::EmptyGroup)?;

    let first_header = header_cell(first)?;
    if classify(class_of(first), class_of(&first_header)) != RowRole::Opening {
        return Err(ShapeError::MissingOpeningRow);
    }
    let agrupacion = sigla_of(&first_header)?;

    let mut listas = Vec::new();
    let mut formula_id = None;
    let mut formula_nombre = None;

    for row in rest {
        let header = header_cell(row)?;
        match classify(class_of(row), class_of(&header)) {
            RowRole::Opening => return Err(ShapeError::UnexpectedOpeningRow),
            RowRole::Lista => listas.push(sigla_of(&header)?),
            RowRole::Formula => {
                let formula = sigla_of(&header)?;
                formula_id = Some(formula.id);
                formula_nombre = Some(formula.nombre);
            }
        }
    }

    Ok(VoteRecord {
        agrupacion,
        listas,
        formula_id,
        formula_nombre,
        vote_count: vote_count(group)?,
    })
}

/// 定位TVOTOS表并提取页面上的全部得票记录
///
/// 表的第一行是标题行，必须在分组之前剔除
pub fn extract_all(document: &Html) -> Result<Vec<VoteRecord>, ShapeError> {
    let table_sel = Selector::parse("table#TVOTOS").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();

    let table = document
        .select(&table_sel)
        .next()
        .ok_or(ShapeError::MissingTable)?;
    let rows: Vec<ElementRef> = table.select(&tr_sel).skip(1).collect();

    group_rows(rows, |row| stripe_marker(class_of(row)))
        .iter()
        .map(|group| extract(group))
        .collect()
}
