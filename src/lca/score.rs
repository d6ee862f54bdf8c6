use serde::{Deserialize, Serialize};

/// 값이 이 구간을 모두 넘으면 부여하는 최고 점수.
pub const MAX_SCORE: u8 = 10;

/// 상한(포함) 임계값과 점수 한 쌍.
///
/// 설정 파일에서는 `[10.0, 1]` 형태의 배열로 적는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, u8)", into = "(f64, u8)")]
pub struct ScoreBand {
    pub threshold: f64,
    pub score: u8,
}

impl ScoreBand {
    pub const fn new(threshold: f64, score: u8) -> Self {
        Self { threshold, score }
    }
}

impl From<(f64, u8)> for ScoreBand {
    fn from((threshold, score): (f64, u8)) -> Self {
        Self { threshold, score }
    }
}

impl From<ScoreBand> for (f64, u8) {
    fn from(band: ScoreBand) -> Self {
        (band.threshold, band.score)
    }
}

/// 오름차순 구간을 순서대로 훑어 `value <= threshold`인 첫 구간의 점수를 돌려준다.
/// 어느 구간에도 들지 않으면 10점이다.
///
/// 음수는 첫 구간 점수가 되고 NaN은 어떤 비교도 통과하지 못하므로 10점이 된다.
pub fn bucketize(value: f64, bands: &[ScoreBand]) -> u8 {
    bands
        .iter()
        .find(|band| value <= band.threshold)
        .map(|band| band.score)
        .unwrap_or(MAX_SCORE)
}

/// 구간표가 비어 있지 않고, 임계값이 양수이며 엄격히 증가하고, 점수가 1~9인지 확인한다.
pub fn check_bands(bands: &[ScoreBand]) -> Result<(), String> {
    if bands.is_empty() {
        return Err("score band table is empty".into());
    }
    for band in bands {
        if !(band.threshold.is_finite() && band.threshold > 0.0) {
            return Err(format!("threshold {} must be positive", band.threshold));
        }
        if !(1..MAX_SCORE).contains(&band.score) {
            return Err(format!("band score {} must be within 1..=9", band.score));
        }
    }
    for pair in bands.windows(2) {
        if pair[1].threshold <= pair[0].threshold {
            return Err(format!(
                "thresholds must increase strictly ({} then {})",
                pair[0].threshold, pair[1].threshold
            ));
        }
    }
    Ok(())
}

const fn sb(threshold: f64, score: u8) -> ScoreBand {
    ScoreBand::new(threshold, score)
}

pub const CO2_BANDS: &[ScoreBand] = &[sb(10.0, 1), sb(25.0, 3), sb(50.0, 5), sb(100.0, 7), sb(500.0, 9)];
pub const WATER_BANDS: &[ScoreBand] = &[sb(5.0, 1), sb(20.0, 3), sb(50.0, 5), sb(100.0, 7), sb(200.0, 9)];
pub const ENERGY_BANDS: &[ScoreBand] = &[
    sb(100.0, 1),
    sb(500.0, 3),
    sb(1000.0, 5),
    sb(2000.0, 7),
    sb(5000.0, 9),
];
pub const ACIDIFICATION_BANDS: &[ScoreBand] = &[
    sb(0.01, 1),
    sb(0.05, 3),
    sb(0.1, 5),
    sb(0.5, 7),
    sb(1.0, 9),
];

/// 에너지원 자체 기여분(CO2 + 산성화)에 쓰는 별도 구간표.
pub const ENERGY_SUGGESTION_BANDS: &[ScoreBand] =
    &[sb(2.0, 1), sb(5.0, 3), sb(10.0, 5), sb(20.0, 7), sb(50.0, 9)];
