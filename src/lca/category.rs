use serde::{Deserialize, Serialize};

/// 환경 영향 범주. 순서는 계산/출력 순서와 동일하게 고정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactCategory {
    /// 탄소 배출
    Co2,
    /// 용수 사용
    Water,
    /// 에너지 사용
    Energy,
    /// 산성화 잠재력
    Acidification,
}

impl ImpactCategory {
    /// 계산과 보고서에 쓰이는 고정 순서.
    pub const ALL: [ImpactCategory; 4] = [
        ImpactCategory::Co2,
        ImpactCategory::Water,
        ImpactCategory::Energy,
        ImpactCategory::Acidification,
    ];

    /// 설정 파일/번역 키에 쓰이는 문자열 키.
    pub fn key(self) -> &'static str {
        match self {
            ImpactCategory::Co2 => "co2",
            ImpactCategory::Water => "water",
            ImpactCategory::Energy => "energy",
            ImpactCategory::Acidification => "acidification",
        }
    }

    /// 보고서 기본(영문) 표시명.
    pub fn label(self) -> &'static str {
        match self {
            ImpactCategory::Co2 => "CO2",
            ImpactCategory::Water => "Water",
            ImpactCategory::Energy => "Energy",
            ImpactCategory::Acidification => "Acidification",
        }
    }

    /// 범주별 물리 단위.
    pub fn unit(self) -> &'static str {
        match self {
            ImpactCategory::Co2 => "kg CO2-eq",
            ImpactCategory::Water => "m³",
            ImpactCategory::Energy => "MJ",
            ImpactCategory::Acidification => "kg SO2-eq",
        }
    }
}

/// 범주마다 하나씩 값을 갖는 계수 묶음.
///
/// 재료는 kg당, 에너지원은 kWh당 영향값을 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactVector {
    pub co2: f64,
    pub water: f64,
    pub energy: f64,
    pub acidification: f64,
}

impl ImpactVector {
    pub const fn new(co2: f64, water: f64, energy: f64, acidification: f64) -> Self {
        Self {
            co2,
            water,
            energy,
            acidification,
        }
    }

    pub fn get(&self, category: ImpactCategory) -> f64 {
        match category {
            ImpactCategory::Co2 => self.co2,
            ImpactCategory::Water => self.water,
            ImpactCategory::Energy => self.energy,
            ImpactCategory::Acidification => self.acidification,
        }
    }

    /// 음수나 NaN/무한대가 섞여 있으면 해당 범주를 돌려준다.
    pub fn first_invalid(&self) -> Option<ImpactCategory> {
        ImpactCategory::ALL
            .into_iter()
            .find(|c| !(self.get(*c).is_finite() && self.get(*c) >= 0.0))
    }
}
