// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::utils::errors::ConfigurationError;

/// 职位代码与显示名称的固定词汇表
const CARGOS: &[(&str, &str)] = &[
    ("PR", "Presidente"),
    ("SN", "Senador Nacional"),
    ("DN", "Diputado Nacional"),
    ("GO", "Gobernador"),
    ("SP", "Senador Provincial"),
    ("DP", "Diputado Provincial"),
];

/// 各省适用的职位列表，列表顺序即URL生成顺序
///
/// 上游数据源把 "02" 定义了两次，后一条覆盖前一条；
/// 此处按源数据原样保留两条，构表时同样以后写者为准
const CARGOS_POR_PROVINCIA: &[(&str, &[&str])] = &[
    ("99", &["PR"]),
    ("01", &["PR", "DN"]),
    ("02", &["PR", "SN", "DN", "GO", "SP", "DP"]),
    ("02", &["PR", "DN"]),
    ("03", &["PR", "DN"]),
    ("04", &["PR", "DN"]),
    ("05", &["PR", "DN"]),
    ("06", &["PR", "DN"]),
    ("07", &["PR", "DN"]),
    ("08", &["PR", "DN"]),
    ("09", &["PR", "SN", "DN"]),
    ("10", &["PR", "SN", "DN"]),
    ("11", &["PR", "DN"]),
    ("12", &["PR", "SN", "DN"]),
    ("13", &["PR", "DN"]),
    ("14", &["PR", "SN", "DN"]),
    ("15", &["PR", "DN"]),
    ("16", &["PR", "DN"]),
    ("17", &["PR", "DN"]),
    ("18", &["PR", "SN", "DN", "GO", "SP", "DP"]),
    ("19", &["PR", "SN", "DN"]),
    ("20", &["PR", "SN", "DN"]),
    ("21", &["PR", "DN"]),
    ("22", &["PR", "DN"]),
    ("23", &["PR", "DN"]),
    ("24", &["PR", "DN"]),
];

/// 参考数据表
///
/// 通过一次性的load()调用构建，之后只读，
/// 以参数形式传给任务枚举器使用
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    distritos: BTreeMap<String, String>,
    cargos_por_provincia: BTreeMap<&'static str, &'static [&'static str]>,
}

impl ReferenceTables {
    /// 从CSV文件加载选区表并构建参考数据
    ///
    /// CSV表头必须逐字为 `id,nombre`，否则加载失败
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers != ["id", "nombre"] {
            return Err(ConfigurationError::HeaderMismatch {
                found: headers.join(","),
            });
        }

        let mut distritos = BTreeMap::new();
        for result in reader.records() {
            let record = result?;
            match (record.get(0), record.get(1)) {
                (Some(id), Some(nombre)) => {
                    distritos.insert(id.to_string(), nombre.to_string());
                }
                _ => {
                    return Err(ConfigurationError::MalformedRow {
                        line: record.position().map(|p| p.line()).unwrap_or(0),
                    });
                }
            }
        }
        info!("{}: loaded {} districts", path.display(), distritos.len());

        let mut cargos_por_provincia = BTreeMap::new();
        for (province_id, races) in CARGOS_POR_PROVINCIA {
            cargos_por_provincia.insert(*province_id, *races);
        }

        Ok(Self {
            distritos,
            cargos_por_provincia,
        })
    }

    /// 选区表：选区ID到显示名称的映射，按键升序迭代
    pub fn distritos(&self) -> &BTreeMap<String, String> {
        &self.distritos
    }

    /// 某省适用的职位代码列表（配置顺序）
    pub fn races_for_province(&self, province_id: &str) -> Option<&'static [&'static str]> {
        self.cargos_por_provincia.get(province_id).copied()
    }

    /// 解析职位显示名称
    ///
    /// 18省（圣胡安）对两个省级职位使用不同的名称
    pub fn race_name(province_id: &str, race_id: &str) -> Option<&'static str> {
        match (province_id, race_id) {
            ("18", "SP") => Some("Senador Proporcional"),
            ("18", "DP") => Some("Diputado Departamental"),
            _ => CARGOS
                .iter()
                .find(|(id, _)| *id == race_id)
                .map(|(_, name)| *name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_districts_sorted() {
        let file = write_csv("id,nombre\n0201,Buenos Aires\n0101,Capital Federal\n");
        let tables = ReferenceTables::load(file.path()).unwrap();

        let keys: Vec<&str> = tables.distritos().keys().map(String::as_str).collect();
        assert_eq!(keys, ["0101", "0201"]);
        assert_eq!(tables.distritos()["0201"], "Buenos Aires");
    }

    #[test]
    fn test_load_rejects_bad_header() {
        let file = write_csv("codigo,nombre\n0101,Capital Federal\n");
        let err = ReferenceTables::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::HeaderMismatch { found } if found == "codigo,nombre"
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ReferenceTables::load("no/such/distritos.csv").unwrap_err();
        assert!(matches!(err, ConfigurationError::Csv(_)));
    }

    #[test]
    fn test_duplicate_province_key_last_write_wins() {
        // "02" appears twice in the source table; the later, shorter list
        // is the one actually observed.
        let file = write_csv("id,nombre\n0201,Buenos Aires\n");
        let tables = ReferenceTables::load(file.path()).unwrap();
        assert_eq!(tables.races_for_province("02"), Some(&["PR", "DN"][..]));
    }

    #[test]
    fn test_races_for_unknown_province() {
        let file = write_csv("id,nombre\n0101,Capital Federal\n");
        let tables = ReferenceTables::load(file.path()).unwrap();
        assert_eq!(tables.races_for_province("55"), None);
    }

    #[test]
    fn test_race_name_vocabulary() {
        assert_eq!(ReferenceTables::race_name("01", "PR"), Some("Presidente"));
        assert_eq!(
            ReferenceTables::race_name("02", "DN"),
            Some("Diputado Nacional")
        );
        assert_eq!(ReferenceTables::race_name("01", "XX"), None);
    }

    #[test]
    fn test_race_name_san_juan_overrides() {
        assert_eq!(
            ReferenceTables::race_name("18", "SP"),
            Some("Senador Proporcional")
        );
        assert_eq!(
            ReferenceTables::race_name("18", "DP"),
            Some("Diputado Departamental")
        );
        // Overrides are keyed on the exact (province, race) pair
        assert_eq!(
            ReferenceTables::race_name("18", "GO"),
            Some("Gobernador")
        );
        assert_eq!(
            ReferenceTables::race_name("02", "SP"),
            Some("Senador Provincial")
        );
    }
}
