// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

/// 把非ASCII字符写作 `\uXXXX` 转义的JSON格式化器
///
/// 与历史输出格式兼容；BMP之外的字符写作UTF-16代理对。
/// 强制转义（引号、反斜杠、控制字符）由默认实现处理
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// 结果写出器
///
/// 每条记录写为独立的一行JSON
pub struct ResultWriter<W: Write> {
    inner: W,
}

impl<W: Write> ResultWriter<W> {
    /// 包装任意写出目标
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// 写出单条记录并换行
    pub fn write_record<T: Serialize>(&mut self, record: &T) -> io::Result<()> {
        let mut serializer = serde_json::Serializer::with_formatter(&mut self.inner, AsciiFormatter);
        record.serialize(&mut serializer)?;
        self.inner.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::result_record::ResultRecord;
    use crate::domain::models::vote_record::{Sigla, VoteRecord};
    use chrono::DateTime;

    fn record() -> ResultRecord {
        ResultRecord {
            source_url: "http://example.com/dat02/DPR0201.htm".to_string(),
            district_id: "0201".to_string(),
            province_id: "02".to_string(),
            race_id: "PR".to_string(),
            race_name: "Presidente".to_string(),
            votes: vec![
                VoteRecord {
                    agrupacion: Sigla {
                        id: "A1".to_string(),
                        nombre: "Unión Cívica".to_string(),
                    },
                    listas: vec![Sigla {
                        id: "L1".to_string(),
                        nombre: "Lista X".to_string(),
                    }],
                    formula_id: None,
                    formula_nombre: None,
                    vote_count: 1234,
                },
                VoteRecord {
                    agrupacion: Sigla {
                        id: "A2".to_string(),
                        nombre: "Partido Dos".to_string(),
                    },
                    listas: Vec::new(),
                    formula_id: Some("F2".to_string()),
                    formula_nombre: Some("Pérez - Gómez".to_string()),
                    vote_count: 567,
                },
            ],
            timestamp: DateTime::from_timestamp(1_313_280_000, 0).unwrap(),
        }
    }

    fn write_to_string(record: &ResultRecord) -> String {
        let mut writer = ResultWriter::new(Vec::new());
        writer.write_record(record).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_output_is_ascii_with_unicode_escapes() {
        let line = write_to_string(&record());
        assert!(line.is_ascii());
        // ó in "Unión Cívica" and é in "Pérez"
        assert!(line.contains(r"Uni\u00f3n C\u00edvica"));
        assert!(line.contains(r"P\u00e9rez"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let line = write_to_string(&record());
        let objects: Vec<&str> = line.split("agrupacion").collect();
        // First vote has listas but no formula, second the other way around
        assert!(objects[1].contains("listas"));
        assert!(!objects[1].contains("formula_id"));
        assert!(!objects[2].contains("listas"));
        assert!(objects[2].contains("formula_id"));
    }

    #[test]
    fn test_round_trip_preserves_metadata_and_vote_order() {
        let original = record();
        let line = write_to_string(&original);
        let parsed: ResultRecord = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_astral_characters_use_surrogate_pairs() {
        #[derive(Serialize)]
        struct Doc {
            text: &'static str,
        }
        let mut writer = ResultWriter::new(Vec::new());
        writer.write_record(&Doc { text: "voto 𝄞" }).unwrap();
        let line = String::from_utf8(writer.into_inner()).unwrap();
        // U+1D11E encodes as the surrogate pair d834 dd1e
        assert!(line.contains(r"\ud834\udd1e"));
    }
}
