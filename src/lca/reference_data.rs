//! 재료/에너지원 영향 계수와 점수 구간표.
//! 계수는 예시용 상수이며 과학적 정확성을 보장하지 않는다.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::advisor::SuggestionPolicy;
use super::category::{ImpactCategory, ImpactVector};
use super::error::{IdentifierKind, LcaError};
use super::score::{self, ScoreBand};

/// 재료 1 kg당 영향 계수.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    pub id: String,
    pub coefficients: ImpactVector,
}

/// 에너지 1 kWh당 영향 계수.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyProfile {
    pub id: String,
    pub coefficients: ImpactVector,
}

/// 범주별 점수 구간표. 파일에서 빠진 범주는 내장 구간을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBandTable {
    pub co2: Vec<ScoreBand>,
    pub water: Vec<ScoreBand>,
    pub energy: Vec<ScoreBand>,
    pub acidification: Vec<ScoreBand>,
}

impl ScoreBandTable {
    pub fn get(&self, category: ImpactCategory) -> &[ScoreBand] {
        match category {
            ImpactCategory::Co2 => &self.co2,
            ImpactCategory::Water => &self.water,
            ImpactCategory::Energy => &self.energy,
            ImpactCategory::Acidification => &self.acidification,
        }
    }
}

impl Default for ScoreBandTable {
    fn default() -> Self {
        Self {
            co2: score::CO2_BANDS.to_vec(),
            water: score::WATER_BANDS.to_vec(),
            energy: score::ENERGY_BANDS.to_vec(),
            acidification: score::ACIDIFICATION_BANDS.to_vec(),
        }
    }
}

/// 프로세스 시작 시 한 번 만들어 계산기에 주입하는 불변 참조 데이터.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub materials: Vec<MaterialProfile>,
    pub energy_sources: Vec<EnergyProfile>,
    #[serde(default)]
    pub score_bands: ScoreBandTable,
    #[serde(default)]
    pub suggestions: SuggestionPolicy,
}

/// 참조 데이터 파일 로드 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    /// 파일 입출력 오류
    #[error("reference data I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("reference data parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// 불변식 위반
    #[error(transparent)]
    Invalid(#[from] LcaError),
}

impl ReferenceData {
    /// 내장 계수표.
    pub fn builtin() -> Self {
        Self {
            materials: MATERIALS
                .iter()
                .map(|(id, coefficients)| MaterialProfile {
                    id: (*id).to_string(),
                    coefficients: *coefficients,
                })
                .collect(),
            energy_sources: ENERGY_SOURCES
                .iter()
                .map(|(id, coefficients)| EnergyProfile {
                    id: (*id).to_string(),
                    coefficients: *coefficients,
                })
                .collect(),
            score_bands: ScoreBandTable::default(),
            suggestions: SuggestionPolicy::default(),
        }
    }

    /// TOML 문자열을 읽어 검증까지 마친 참조 데이터를 만든다.
    pub fn from_toml_str(src: &str) -> Result<Self, ReferenceDataError> {
        let data: ReferenceData = toml::from_str(src)?;
        data.validate()?;
        Ok(data)
    }

    /// 파일에서 참조 데이터를 로드한다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let data = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            materials = data.materials.len(),
            energy_sources = data.energy_sources.len(),
            "loaded reference data"
        );
        Ok(data)
    }

    /// 설정에 경로가 있으면 파일을, 없으면 내장 계수표를 쓴다.
    pub fn load_or_builtin(path: Option<&str>) -> Result<Self, ReferenceDataError> {
        match path {
            Some(p) if !p.trim().is_empty() => Self::load(p),
            _ => {
                debug!("using built-in reference data");
                Ok(Self::builtin())
            }
        }
    }

    pub fn lookup_material(&self, id: &str) -> Result<&MaterialProfile, LcaError> {
        find_by_id(&self.materials, id, |m| &m.id).ok_or_else(|| LcaError::UnknownIdentifier {
            kind: IdentifierKind::Material,
            id: id.to_string(),
        })
    }

    pub fn lookup_energy(&self, id: &str) -> Result<&EnergyProfile, LcaError> {
        find_by_id(&self.energy_sources, id, |e| &e.id).ok_or_else(|| {
            LcaError::UnknownIdentifier {
                kind: IdentifierKind::Energy,
                id: id.to_string(),
            }
        })
    }

    pub fn material_ids(&self) -> impl Iterator<Item = &str> {
        self.materials.iter().map(|m| m.id.as_str())
    }

    pub fn energy_ids(&self) -> impl Iterator<Item = &str> {
        self.energy_sources.iter().map(|e| e.id.as_str())
    }

    /// 계수, 구간표, 제안 정책의 불변식을 확인한다.
    pub fn validate(&self) -> Result<(), LcaError> {
        let invalid = LcaError::InvalidReferenceData;
        if self.materials.is_empty() {
            return Err(invalid("at least one material is required".into()));
        }
        if self.energy_sources.is_empty() {
            return Err(invalid("at least one energy source is required".into()));
        }
        check_profiles("material", self.materials.iter().map(|m| (&m.id, &m.coefficients)))?;
        check_profiles(
            "energy source",
            self.energy_sources.iter().map(|e| (&e.id, &e.coefficients)),
        )?;
        for category in ImpactCategory::ALL {
            score::check_bands(self.score_bands.get(category))
                .map_err(|e| invalid(format!("{} bands: {e}", category.key())))?;
        }
        score::check_bands(&self.suggestions.energy_band)
            .map_err(|e| invalid(format!("energy suggestion bands: {e}")))?;
        Ok(())
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn find_by_id<'a, T>(items: &'a [T], id: &str, key: impl Fn(&T) -> &String) -> Option<&'a T> {
    let id = id.trim();
    items
        .iter()
        .find(|item| key(item) == id)
        .or_else(|| items.iter().find(|item| key(item).eq_ignore_ascii_case(id)))
}

fn check_profiles<'a>(
    kind: &str,
    profiles: impl Iterator<Item = (&'a String, &'a ImpactVector)>,
) -> Result<(), LcaError> {
    let mut seen = HashSet::new();
    for (id, coefficients) in profiles {
        if id.trim().is_empty() {
            return Err(LcaError::InvalidReferenceData(format!("{kind} id is empty")));
        }
        if !seen.insert(id.to_ascii_lowercase()) {
            return Err(LcaError::InvalidReferenceData(format!("duplicate {kind} id: {id}")));
        }
        if let Some(category) = coefficients.first_invalid() {
            return Err(LcaError::InvalidReferenceData(format!(
                "{kind} {id}: {} coefficient must be a non-negative number",
                category.key()
            )));
        }
    }
    Ok(())
}

const MATERIALS: &[(&str, ImpactVector)] = &[
    ("ethylene", ImpactVector::new(1.75, 1.2, 78.0, 0.015)),
    ("ammonia", ImpactVector::new(2.38, 1.8, 38.0, 0.022)),
    ("polyethylene", ImpactVector::new(2.1, 0.8, 85.0, 0.012)),
    ("sulfuric_acid", ImpactVector::new(0.35, 0.3, 2.5, 0.045)),
    ("hydrogen", ImpactVector::new(10.4, 1.5, 55.0, 0.008)),
];

const ENERGY_SOURCES: &[(&str, ImpactVector)] = &[
    ("natural_gas", ImpactVector::new(0.49, 0.002, 3.6, 0.0003)),
    ("coal", ImpactVector::new(1.02, 0.004, 3.6, 0.0012)),
    ("grid_electricity", ImpactVector::new(0.68, 0.003, 3.6, 0.0008)),
    ("renewables", ImpactVector::new(0.05, 0.001, 3.6, 0.0001)),
    ("solar", ImpactVector::new(0.04, 0.001, 3.6, 0.0001)),
    ("wind", ImpactVector::new(0.03, 0.001, 3.6, 0.0001)),
];
